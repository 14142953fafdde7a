use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::errors::AppError;
use crate::types::AppState;

/// The one document this server renders
const USAGE_TEMPLATE: &str = "usage.html";

/// Build the application router around an explicitly constructed state value
pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(handle_usage)).with_state(state)
}

/// Handle root path requests by rendering the usage page
pub async fn handle_usage(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    log::debug!("Usage page requested");
    let page = state.templates.render(USAGE_TEMPLATE)?;
    Ok(Html(page))
}
