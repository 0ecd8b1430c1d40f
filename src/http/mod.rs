//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod activity;
pub mod entries;
pub mod ui;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::ui_index))
        .route("/get/", get(entries::list_entries))
        .route("/get/:id", get(entries::get_entry))
        .route("/create/", post(entries::create_entry))
        .route("/update/:id", put(entries::update_entry))
        .route("/delete/:id", delete(entries::delete_entry))
        .route("/activity", get(activity::list_activity))
        .with_state(state)
}
