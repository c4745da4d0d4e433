//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting on stderr
//! - `RUST_LOG` overrides the configured level

pub mod logger;

pub use logger::{LogFormat, LoggerImpl};
