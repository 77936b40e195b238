//! Dicebox Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types the roll handler,
//! the store, and the API server all depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod error;
pub mod rng;
pub mod store;
