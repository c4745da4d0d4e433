//! Port trait definitions (Hexagonal Architecture)
//!
//! - EnvironmentSource: read access to named environment variables
//!
//! Loaders depend on this trait rather than on `std::env`, so callers can
//! supply fixed input without touching the process environment.

pub mod environment;

pub use environment::EnvironmentSource;
