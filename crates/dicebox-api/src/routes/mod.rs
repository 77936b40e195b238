//! Route modules for the Dicebox API.

pub mod health;
pub mod logs;
pub mod roll;
