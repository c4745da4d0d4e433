//! Infrastructure layer
//!
//! Adapters around the domain:
//! - `environment`: environment sources (process env, in-memory map)
//! - `descriptors`: VCAP descriptor loading
//! - `config`: figment-based configuration for the inspector
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod descriptors;
pub mod environment;
pub mod logging;
