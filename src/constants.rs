/// Query-string parameter names accepted by the listing endpoint.
pub const PARAM_FEATURED: &str = "featured";
pub const PARAM_COMPANY: &str = "company";
pub const PARAM_NAME: &str = "name";
pub const PARAM_SIZE: &str = "size";
pub const PARAM_COLOR: &str = "color";
pub const PARAM_NUMERIC_FILTERS: &str = "numericFilters";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_FIELDS: &str = "fields";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_PAGE: &str = "page";

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_PAGE: usize = 1;

// Only this exact value counts as true for `featured`
pub const FEATURED_TRUE: &str = "true";

// Error bodies returned by the HTTP layer
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const ERROR_FETCHING_PRODUCT: &str = "Error fetching product";
pub const ERROR_FETCHING_PRODUCTS: &str = "Error fetching products";

pub const API_PREFIX: &str = "/api/v1";
pub const SERVICE_NAME: &str = "art-catalog";
