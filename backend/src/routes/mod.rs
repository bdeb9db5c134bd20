//! Route definitions for the Medical Store Inventory backend

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create the store's form routes
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/add_medication",
            get(handlers::add_medication_form).post(handlers::add_medication),
        )
        .route(
            "/add_supplier",
            get(handlers::add_supplier_form).post(handlers::add_supplier),
        )
        .route(
            "/update_inventory",
            get(handlers::update_inventory_form).post(handlers::update_inventory),
        )
        .route("/check_stock", get(handlers::check_stock))
        .route("/generate_alerts", get(handlers::generate_alerts))
        .route(
            "/record_sale",
            get(handlers::record_sale_form).post(handlers::record_sale),
        )
        .route(
            "/place_order",
            get(handlers::place_order_form).post(handlers::place_order),
        )
}
