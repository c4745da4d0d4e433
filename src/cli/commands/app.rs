use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::CommandOutput;
use crate::domain::models::ApplicationDescriptor;
use crate::domain::ports::EnvironmentSource;
use crate::infrastructure::descriptors::VcapLoader;

#[derive(Debug, Serialize)]
pub struct AppOutput {
    pub application: ApplicationDescriptor,
}

impl CommandOutput for AppOutput {
    fn to_human(&self) -> String {
        let app = &self.application;
        let started = app
            .started_at()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| app.start.clone());

        let mut lines = vec![
            "Application Details:".to_string(),
            "─────────────────────────────────────────".to_string(),
            format!("Name:        {}", app.name),
            format!("ID:          {}", app.id),
            format!("Version:     {}", app.version),
            format!("Instance:    {}", app.instance_id),
            format!("Space:       {}", app.space_id),
            format!("Started:     {started}"),
            format!(
                "Limits:      mem={}M disk={}M fds={}",
                app.limits.mem, app.limits.disk, app.limits.fds
            ),
        ];

        if app.uris.is_empty() {
            lines.push("URIs:        (none)".to_string());
        } else {
            lines.push("URIs:".to_string());
            lines.extend(app.uris.iter().map(|uri| format!("  - {uri}")));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.application).unwrap_or_default()
    }
}

/// Handle the app command
pub fn execute<E: EnvironmentSource>(loader: &VcapLoader<E>) -> Result<AppOutput> {
    let application = loader.load_application().with_context(|| {
        format!(
            "Failed to load application descriptor from {}",
            loader.application_key()
        )
    })?;

    tracing::debug!(name = %application.name, id = %application.id, "loaded application descriptor");

    Ok(AppOutput { application })
}
