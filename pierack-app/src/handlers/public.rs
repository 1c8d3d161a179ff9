//! The public pies page

use crate::error::AppError;
use crate::page::page;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::Html;
use pierack_directive::expand_content;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub paged: Option<u32>,
}

/// GET /pies - the configured page body with directives expanded
pub async fn pies_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, AppError> {
    let body = expand_content(
        &state.content,
        &state.config.page_body,
        params.paged.unwrap_or(1),
        "/pies",
    )
    .await?;

    Ok(Html(page(&state.pies_type().labels.name, &body)))
}
