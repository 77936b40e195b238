//! Shared application state.

use std::sync::{Arc, Mutex};

use dicebox_core::clock::Clock;
use dicebox_core::rng::RandomSource;
use dicebox_core::store::RollLogStore;

/// Application state shared across all request handlers.
///
/// All collaborators are constructed once at startup and passed in
/// explicitly; handlers never reach for ambient singletons.
#[derive(Clone)]
pub struct AppState {
    /// Source of timestamps for persisted rolls.
    pub clock: Arc<dyn Clock>,
    /// Die value source. Locked only around synchronous draws.
    pub rng: Arc<Mutex<dyn RandomSource>>,
    /// Roll log persistence.
    pub store: Arc<dyn RollLogStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        rng: Arc<Mutex<dyn RandomSource>>,
        store: Arc<dyn RollLogStore>,
    ) -> Self {
        Self { clock, rng, store }
    }
}
