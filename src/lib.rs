use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod store;

use store::ClientStore;

pub const BASE_PATH: &str = "/clients";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClientStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }
}

pub fn build_app(state: AppState) -> Router {
    // `get` would otherwise answer HEAD as well
    let collection = get(http::handlers::list_clients)
        .head(http::handlers::method_not_allowed)
        .post(http::handlers::create_client)
        .fallback(http::handlers::method_not_allowed);
    let member = get(http::handlers::get_client)
        .head(http::handlers::method_not_allowed)
        .put(http::handlers::update_client)
        .delete(http::handlers::delete_client)
        .fallback(http::handlers::method_not_allowed);

    // The catch-all keeps `/clients/1/x` on the member handlers so the id check rejects it;
    // `/clients/` is routed separately because a wildcard never matches an empty suffix.
    Router::new()
        .route(logging::HEALTH_PATH, get(http::handlers::health))
        .route(BASE_PATH, collection)
        .route(&format!("{BASE_PATH}/"), member.clone())
        .route(&format!("{BASE_PATH}/{{*id}}"), member)
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
