//! Application descriptor model.
//!
//! Mirrors the `VCAP_APPLICATION` document. Deprecated or redundant attributes
//! (`host`, `instance_index`, `name`, `port`, `started_at`, `state_timestamp`,
//! `uris`, `users`, `version`) are ignored on decode.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::domain::error::VcapError;

/// Identity and runtime metadata for the running application instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDescriptor {
    #[serde(
        rename = "application_id",
        default,
        deserialize_with = "null_as_default"
    )]
    pub id: String,

    #[serde(
        rename = "application_name",
        default,
        deserialize_with = "null_as_default"
    )]
    pub name: String,

    #[serde(
        rename = "application_uris",
        default,
        deserialize_with = "null_as_default"
    )]
    pub uris: Vec<String>,

    #[serde(
        rename = "application_version",
        default,
        deserialize_with = "null_as_default"
    )]
    pub version: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub limits: Limits,

    #[serde(default, deserialize_with = "null_as_default")]
    pub space_id: String,

    /// Start time as reported by the platform, kept verbatim
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,

    /// Start time in seconds since the Unix epoch
    #[serde(default, deserialize_with = "null_as_default")]
    pub started_at_timestamp: i64,
}

/// Resource limits granted to the instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Memory limit in megabytes
    #[serde(default, deserialize_with = "null_as_default")]
    pub mem: i64,

    /// Disk limit in megabytes
    #[serde(default, deserialize_with = "null_as_default")]
    pub disk: i64,

    /// Maximum open file descriptors
    #[serde(default, deserialize_with = "null_as_default")]
    pub fds: i64,
}

impl ApplicationDescriptor {
    /// Parse a descriptor from JSON text.
    ///
    /// A `null` document yields the default descriptor. `source_name` only
    /// labels the error.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self, VcapError> {
        serde_json::from_str::<Option<Self>>(json)
            .map(Option::unwrap_or_default)
            .map_err(|e| VcapError::decode(source_name, e))
    }

    /// `started_at_timestamp` as a UTC instant, if it is representable
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.started_at_timestamp, 0)
    }
}

impl FromStr for ApplicationDescriptor {
    type Err = VcapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json("application descriptor", s)
    }
}
