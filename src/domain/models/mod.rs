pub mod application;
pub mod config;
pub mod credentials;
pub mod registry;
pub mod service;

use serde::{Deserialize, Deserializer};

pub use application::{ApplicationDescriptor, Limits};
pub use config::{Config, LoggingConfig};
pub use credentials::{Postgres, Protocol, Protocols, RabbitMq, Uaa, UaaZone};
pub use registry::ServiceRegistry;
pub use service::{render_credential, Credentials, ServiceInstance};

/// Treat an explicit JSON `null` like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
