//! CLI command implementations.

pub mod app;
pub mod credential;
pub mod services;
