//! Domain layer for VCAP descriptors
//!
//! Descriptor models, the service registry with its lookup rules, and the
//! port through which environment variables are read.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::VcapError;
