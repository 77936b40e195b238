//! Command handlers for the roll handler context.
//!
//! This module contains the application-level functions that orchestrate a
//! roll: validate the request, draw die values, and persist one log entry.
//! Every endpoint that rolls dice goes through these handlers.

use std::sync::Mutex;

use dicebox_core::clock::Clock;
use dicebox_core::error::DomainError;
use dicebox_core::rng::RandomSource;
use dicebox_core::store::{RollLog, RollLogStore};

use crate::domain::die;

/// Upper bound on the number of dice a single request may roll.
pub const MAX_DICE: u32 = 100;

fn lock_rng(
    rng: &Mutex<dyn RandomSource>,
) -> Result<std::sync::MutexGuard<'_, dyn RandomSource + 'static>, DomainError> {
    rng.lock()
        .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))
}

/// Draws a single die value without recording it.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the RNG mutex is poisoned.
pub fn handle_quick_roll(rng: &Mutex<dyn RandomSource>) -> Result<u8, DomainError> {
    let mut rng_guard = lock_rng(rng)?;
    Ok(die::roll_die(&mut *rng_guard))
}

/// Draws one die value and appends a single-die log entry.
///
/// The RNG mutex is locked only around the synchronous draw, never across
/// an await point.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the append fails or the RNG
/// mutex is poisoned.
pub async fn handle_roll_one(
    clock: &dyn Clock,
    rng: &Mutex<dyn RandomSource>,
    store: &dyn RollLogStore,
) -> Result<u8, DomainError> {
    let value = {
        let mut rng_guard = lock_rng(rng)?;
        die::roll_die(&mut *rng_guard)
    };

    let log = RollLog::new(vec![value], clock.now());
    store.append(&log).await?;

    Ok(value)
}

/// Draws `count` die values and appends one log entry capturing all of
/// them. A count of zero is valid: it draws nothing and records an entry
/// with empty results.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `count` exceeds [`MAX_DICE`], and
/// `DomainError::Infrastructure` if the append fails or the RNG mutex is
/// poisoned. No draw and no append happen on validation failure.
pub async fn handle_roll_many(
    count: u32,
    clock: &dyn Clock,
    rng: &Mutex<dyn RandomSource>,
    store: &dyn RollLogStore,
) -> Result<Vec<u8>, DomainError> {
    if count > MAX_DICE {
        return Err(DomainError::Validation(format!(
            "dice count {count} exceeds the maximum of {MAX_DICE}"
        )));
    }

    let results = {
        let mut rng_guard = lock_rng(rng)?;
        die::roll_dice(&mut *rng_guard, count)
    };

    let log = RollLog::new(results.clone(), clock.now());
    store.append(&log).await?;

    Ok(results)
}
