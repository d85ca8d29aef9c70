use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod generate;
pub mod health;
pub mod marketplace;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router().merge(generate::router()))
        .nest("/marketplace", marketplace::router())
}
