use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
        }
    }
}

/// Where products come from; the bundled artworks when `path` is unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

/// Prebuilt storefront bundle served next to the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Reads `path`, then applies `PORT` and `CATALOG_PATH` overrides.
    /// A missing file at the default location is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Config::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| CatalogError::Config(format!("Invalid PORT value '{}'", port)))?;
        }
        if let Ok(path) = std::env::var("CATALOG_PATH") {
            if !path.is_empty() {
                self.catalog.path = Some(PathBuf::from(path));
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr().port(), 5000);
    }

    #[test]
    fn reads_all_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 8081

[catalog]
path = "data/products.json"

[ui]
static_dir = "dist/public"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8081".parse::<SocketAddr>().unwrap());
        assert_eq!(config.catalog.path, Some(PathBuf::from("data/products.json")));
        assert_eq!(config.ui.static_dir, Some(PathBuf::from("dist/public")));
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, IpAddr::from([0, 0, 0, 0]));
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let err = Config::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Toml(_)));
    }
}
