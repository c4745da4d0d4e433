use thiserror::Error;

/// Errors raised while decoding VCAP descriptors or reading credentials
#[derive(Error, Debug)]
pub enum VcapError {
    /// The named source was missing, empty, or not the expected JSON shape.
    #[error("failed to decode {source_name}: {source}")]
    Decode {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not find service with name or label {identifier}")]
    NotFound { identifier: String },

    #[error("could not read credential {identifier}.{key}")]
    CredentialRead { identifier: String, key: String },
}

impl VcapError {
    pub(crate) fn decode(source_name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            source_name: source_name.into(),
            source,
        }
    }

    /// True for decode failures, including a missing or empty variable
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// True when no service matched by name or label
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when the service matched but the credential was absent or null
    pub const fn is_credential_read(&self) -> bool {
        matches!(self, Self::CredentialRead { .. })
    }
}
