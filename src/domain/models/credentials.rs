//! Typed views over well-known service credential blocks.
//!
//! Decode with [`ServiceInstance::credentials_as`](super::ServiceInstance::credentials_as).
//! Absent fields take their default value; contents are not validated.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Postgres credentials block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Postgres {
    #[serde(rename = "ID")]
    pub id: i64,
    pub binding_id: String,
    pub database: String,
    pub dsn: String,
    pub host: String,
    pub instance_id: String,
    pub jdbc_uri: String,
    pub password: String,
    /// Brokers publish the port as a string
    pub port: String,
    pub uri: String,
    pub username: String,
}

/// UAA identity-broker credentials block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Uaa {
    #[serde(rename = "ID")]
    pub issuer_id: String,
    pub subdomain: String,
    pub uri: String,
    pub zone: UaaZone,
}

/// Identity zone routing header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UaaZone {
    #[serde(rename = "http-header-name")]
    pub header_name: String,
    #[serde(rename = "http-header-value")]
    pub header_value: String,
}

/// RabbitMQ credentials block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RabbitMq {
    pub dashboard_url: String,
    pub hostname: String,
    pub hostnames: Vec<String>,
    #[serde(rename = "http_api_uri")]
    pub api_uri: String,
    #[serde(rename = "http_api_uris")]
    pub api_uris: Vec<String>,
    pub password: String,
    pub protocols: Protocols,
    pub ssl: bool,
    pub uri: String,
    pub uris: Vec<String>,
    pub username: String,
    pub vhost: String,
}

/// Protocol name (`amqp`, `management`, `mqtt`, `stomp`, ...) to connection details
pub type Protocols = HashMap<String, Protocol>;

/// Connection details for one RabbitMQ protocol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Protocol {
    pub host: String,
    pub hosts: Vec<String>,
    pub password: String,
    /// Only present for the management protocol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub port: u16,
    pub ssl: bool,
    pub uri: String,
    pub uris: Vec<String>,
    pub username: String,
    /// Absent for management and MQTT
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vhost: Option<String>,
}

impl RabbitMq {
    /// Details for a single protocol, e.g. `amqp`
    pub fn protocol(&self, name: &str) -> Option<&Protocol> {
        self.protocols.get(name)
    }
}
