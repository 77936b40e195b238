//! Routes for rolling dice.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use tracing::{info, instrument};
use uuid::Uuid;

use dicebox_roll::application::command_handlers;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /roll
///
/// Draws a single die value without recording it.
#[instrument(skip(state))]
async fn quick_roll(State(state): State<AppState>) -> Result<Json<u8>, ApiError> {
    let value = command_handlers::handle_quick_roll(&state.rng)?;
    Ok(Json(value))
}

/// GET /api/rollDice
///
/// Draws one die value and appends a single-die log entry.
#[instrument(skip(state))]
async fn roll_one(State(state): State<AppState>) -> Result<Json<u8>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "handling single-die roll");

    let value =
        command_handlers::handle_roll_one(state.clock.as_ref(), &state.rng, &*state.store).await?;

    Ok(Json(value))
}

/// GET /api/rollDices/{count}
///
/// Draws `count` die values and appends one log entry for the batch. A
/// malformed or negative path value never reaches the handler: the `u32`
/// extractor rejects it with a client error.
#[instrument(skip(state))]
async fn roll_many(
    State(state): State<AppState>,
    Path(count): Path<u32>,
) -> Result<Json<Vec<u8>>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, count, "handling multi-die roll");

    let results =
        command_handlers::handle_roll_many(count, state.clock.as_ref(), &state.rng, &*state.store)
            .await?;

    Ok(Json(results))
}

/// Returns the router for the roll endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roll", get(quick_roll))
        .route("/api/rollDice", get(roll_one))
        .route("/api/rollDices/{count}", get(roll_many))
}
