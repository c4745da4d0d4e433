use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::CommandOutput;
use crate::domain::ports::EnvironmentSource;
use crate::infrastructure::descriptors::VcapLoader;

#[derive(Debug, Serialize)]
pub struct CredentialOutput {
    pub identifier: String,
    pub key: String,
    pub value: String,
}

impl CommandOutput for CredentialOutput {
    /// Bare value, so the command composes in shell substitutions
    fn to_human(&self) -> String {
        self.value.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "identifier": self.identifier,
            "key": self.key,
            "value": self.value,
        })
    }
}

/// Handle the credential command
pub fn execute<E: EnvironmentSource>(
    loader: &VcapLoader<E>,
    identifier: &str,
    key: &str,
) -> Result<CredentialOutput> {
    let registry = loader.load_services().with_context(|| {
        format!(
            "Failed to load service bindings from {}",
            loader.services_key()
        )
    })?;

    let value = registry.get_credential(identifier, key)?;
    tracing::debug!(identifier, key, "resolved credential");

    Ok(CredentialOutput {
        identifier: identifier.to_string(),
        key: key.to_string(),
        value,
    })
}
