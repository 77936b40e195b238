//! Dicebox — roll handler bounded context.
//!
//! Responsible for drawing six-sided die values, recording each logged
//! roll in the roll log store, and serving read-only views of the log.

pub mod application;
pub mod domain;
