//! Shared test mocks and utilities for the Dicebox roll service.

mod clock;
mod rng;
mod store;

pub use clock::FixedClock;
pub use rng::{MockRng, SequenceRng};
pub use store::{FailingRollLogStore, RecordingRollLogStore};
