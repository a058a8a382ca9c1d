use crate::error::{CatalogError, Result};
use crate::seed::seed_products;
use crate::types::Product;
use async_trait::async_trait;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Read-only access to the product catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every product, in catalog order
    async fn all_products(&self) -> Result<Vec<Product>>;

    async fn product_by_id(&self, id: u64) -> Result<Option<Product>>;
}

/// Catalog held in memory, loaded once and never mutated afterwards
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Arc<[Product]>,
}

impl InMemoryCatalog {
    /// Builds a catalog after checking the record invariants.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        validate_products(&products)?;
        Ok(Self {
            products: products.into(),
        })
    }

    /// The artworks bundled with the service.
    pub fn seeded() -> Self {
        Self {
            products: seed_products().into(),
        }
    }

    /// Loads a JSON array of products from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        let catalog = Self::new(products)?;
        info!(path = %path.display(), products = catalog.len(), "Loaded catalog file");
        Ok(catalog)
    }

    /// Uses the file at `path` when given, otherwise the bundled artworks.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => {
                let catalog = Self::seeded();
                info!(products = catalog.len(), "Using bundled catalog");
                Ok(catalog)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

fn validate_products(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            return Err(CatalogError::InvalidCatalog(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::InvalidCatalog(format!(
                "product {} has invalid price {}",
                product.id, product.price
            )));
        }
        if product.size.is_empty() || product.color.is_empty() {
            return Err(CatalogError::InvalidCatalog(format!(
                "product {} must list at least one size and one color",
                product.id
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn all_products(&self) -> Result<Vec<Product>> {
        debug!("Snapshot of {} products", self.products.len());
        Ok(self.products.to_vec())
    }

    async fn product_by_id(&self, id: u64) -> Result<Option<Product>> {
        let product = self.products.iter().find(|p| p.id == id).cloned();
        Ok(product)
    }
}
