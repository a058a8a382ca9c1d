use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Catalog source error: {message}")]
    Source { message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
