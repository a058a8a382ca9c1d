use crate::constants::{
    API_PREFIX, ERROR_FETCHING_PRODUCT, ERROR_FETCHING_PRODUCTS, PRODUCT_NOT_FOUND, SERVICE_NAME,
};
use crate::error::CatalogError;
use crate::query::{parse_int_prefix, ProductPage, ProductQuery};
use crate::service::CatalogService;
use crate::types::Product;
use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use hyper::Server;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

/// Errors surfaced by the catalog endpoints. Internal failures are logged
/// here and answered with a fixed message only.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Internal {
        message: &'static str,
        source: CatalogError,
    },
}

impl ApiError {
    fn internal(message: &'static str, source: CatalogError) -> Self {
        ApiError::Internal { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": PRODUCT_NOT_FOUND })),
            )
                .into_response(),
            ApiError::Internal { message, source } => {
                error!("{}: {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /api/v1/products`
async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ProductPage>, ApiError> {
    let query = ProductQuery::from_params(params);
    state
        .catalog
        .list_products(&query)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(ERROR_FETCHING_PRODUCTS, e))
}

/// `GET /api/v1/products/:id`; ids that do not parse are simply not found.
async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let Some(id) = parse_int_prefix(&raw_id).and_then(|n| u64::try_from(n).ok()) else {
        return Err(ApiError::NotFound);
    };
    match state.catalog.product(id).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::internal(ERROR_FETCHING_PRODUCT, e)),
    }
}

/// Create the HTTP router with the catalog API and, when given, the storefront bundle.
pub fn create_server(catalog: CatalogService, static_dir: Option<&std::path::Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let api = Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product));

    let mut router = Router::new()
        .route("/health", get(health))
        .nest(API_PREFIX, api)
        .with_state(AppState { catalog });

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}

/// Serve until Ctrl-C.
pub async fn start_server(router: Router, addr: SocketAddr) -> Result<(), hyper::Error> {
    info!("HTTP server running on http://{}", addr);
    info!("Products API: http://{}{}/products", addr, API_PREFIX);

    Server::bind(&addr)
        .serve(router.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
}
