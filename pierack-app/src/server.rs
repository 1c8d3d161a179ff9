//! Router construction

use crate::handlers::{admin, assets, public};
use crate::state::AppState;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/pies") }))
        .route("/pies", get(public::pies_page))
        .route("/admin/pies", get(admin::list_pies).post(admin::create_pie))
        .route("/admin/pies/new", get(admin::new_pie_form))
        .route("/admin/pies/:id", get(admin::edit_pie).post(admin::update_pie))
        .route("/admin/pies/:id/details", post(admin::save_details))
        .route("/admin/pies/:id/delete", get(admin::delete_pie))
        .route("/assets/*path", get(assets::serve_asset))
        .with_state(state)
}
