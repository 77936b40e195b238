//! Dicebox — PostgreSQL-backed roll log store.

pub mod pg_roll_log_store;
pub mod schema;
