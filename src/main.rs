use anyhow::Context;
use art_catalog::config::Config;
use art_catalog::logging;
use art_catalog::query::{run_query, ProductQuery};
use art_catalog::server::{create_server, start_server};
use art_catalog::service::CatalogService;
use art_catalog::storage::InMemoryCatalog;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "art_catalog")]
#[command(about = "Art storefront catalog service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the products API
    Serve {
        /// Path to config.toml (defaults to ./config.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run one listing query offline and print the JSON result
    Query {
        /// JSON catalog file; the bundled artworks when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Query parameters as key=value, e.g. company=abstract sort=-price
        params: Vec<String>,
    },
    /// Print a single product by id
    Show {
        #[arg(long)]
        catalog: Option<PathBuf>,
        id: u64,
    },
}

/// Splits `key=value` arguments; a bare key gets an empty value.
fn query_pairs(params: &[String]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|param| match param.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (param.clone(), String::new()),
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, port } => {
            logging::init_logging();
            art_catalog::metrics::init_metrics();

            let mut config = Config::load(config.as_deref()).context("loading configuration")?;
            if let Some(port) = port {
                config.server.port = port;
            }

            let catalog = InMemoryCatalog::load(config.catalog.path.as_deref())
                .context("loading catalog")?;
            info!(products = catalog.len(), "Catalog ready");

            let service = CatalogService::new(Arc::new(catalog));
            let router = create_server(service, config.ui.static_dir.as_deref());
            start_server(router, config.bind_addr()).await?;
        }
        Commands::Query { catalog, params } => {
            let catalog = InMemoryCatalog::load(catalog.as_deref()).context("loading catalog")?;
            let query = ProductQuery::from_params(query_pairs(&params));
            let page = run_query(catalog.products(), &query);
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Commands::Show { catalog, id } => {
            let catalog = InMemoryCatalog::load(catalog.as_deref()).context("loading catalog")?;
            match catalog.products().iter().find(|p| p.id == id) {
                Some(product) => println!("{}", serde_json::to_string_pretty(product)?),
                None => anyhow::bail!("Product {} not found", id),
            }
        }
    }
    Ok(())
}
