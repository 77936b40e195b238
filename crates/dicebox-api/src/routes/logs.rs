//! Routes for reading the roll log.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use tracing::instrument;

use dicebox_roll::application::query_handlers::{self, RollLogView};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/diceLogs
///
/// Returns every persisted roll, in the store's natural order.
#[instrument(skip(state))]
async fn list_logs(State(state): State<AppState>) -> Result<Json<Vec<RollLogView>>, ApiError> {
    let views = query_handlers::list_roll_logs(&*state.store).await?;
    Ok(Json(views))
}

/// Returns the router for the roll log endpoints.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/diceLogs", get(list_logs))
}
