//! vcap - typed access to Cloud Foundry VCAP descriptors
//!
//! Decodes `VCAP_APPLICATION` and `VCAP_SERVICES` into typed records and
//! resolves single credentials from the bound services.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): descriptor models, registry lookups, ports
//! - **Infrastructure Layer** (`infrastructure`): environment sources, loading,
//!   configuration, logging
//! - **CLI Layer** (`cli`): the `vcap` inspector
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), vcap::VcapError> {
//! let services = vcap::load_services()?;
//! let username = services.get_credential("postgres", "username")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    ApplicationDescriptor, Credentials, Limits, Postgres, Protocol, RabbitMq, ServiceInstance,
    ServiceRegistry, Uaa, UaaZone,
};
pub use domain::ports::EnvironmentSource;
pub use domain::VcapError;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::descriptors::{load_application, load_services, VcapLoader};
pub use infrastructure::environment::{MapEnvironment, SystemEnvironment};
