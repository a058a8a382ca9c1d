use crate::error::Result;
use crate::metrics;
use crate::query::{run_query, ProductPage, ProductQuery};
use crate::storage::CatalogSource;
use crate::types::Product;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Answers catalog requests against an injected, read-only source.
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage> {
        let started = Instant::now();
        let products = match self.source.all_products().await {
            Ok(products) => products,
            Err(e) => {
                metrics::record_listing("error", 0, started);
                return Err(e);
            }
        };
        let page = run_query(&products, query);
        debug!(
            count = page.count,
            page = page.current_page,
            returned = page.products.len(),
            "Listed products"
        );
        metrics::record_listing("ok", page.count, started);
        Ok(page)
    }

    pub async fn product(&self, id: u64) -> Result<Option<Product>> {
        let result = self.source.product_by_id(id).await;
        let outcome = match &result {
            Ok(Some(_)) => "found",
            Ok(None) => "not_found",
            Err(e) => {
                warn!(id, "Product lookup failed: {}", e);
                "error"
            }
        };
        metrics::record_detail(outcome);
        result
    }
}
