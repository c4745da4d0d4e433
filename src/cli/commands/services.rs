use anyhow::{Context, Result};
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::cli::output::CommandOutput;
use crate::domain::models::{ServiceInstance, ServiceRegistry};
use crate::domain::ports::EnvironmentSource;
use crate::infrastructure::descriptors::VcapLoader;

/// Criteria for the services listing; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    pub name: Option<String>,
    pub label: Option<String>,
    pub tag: Option<String>,
}

impl ServiceFilter {
    fn matches(&self, service: &ServiceInstance) -> bool {
        self.name.as_deref().is_none_or(|n| service.name == n)
            && self.label.as_deref().is_none_or(|l| service.label == l)
            && self.tag.as_deref().is_none_or(|t| service.has_tag(t))
    }
}

/// One bound instance, without its credentials
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceRow {
    pub binding: String,
    pub name: String,
    pub label: String,
    pub plan: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ServicesOutput {
    pub services: Vec<ServiceRow>,
}

impl CommandOutput for ServicesOutput {
    fn to_human(&self) -> String {
        if self.services.is_empty() {
            return "No services found.".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Binding").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Label").add_attribute(Attribute::Bold),
            Cell::new("Plan").add_attribute(Attribute::Bold),
            Cell::new("Tags").add_attribute(Attribute::Bold),
        ]);

        for row in &self.services {
            table.add_row(vec![
                Cell::new(&row.binding),
                Cell::new(&row.name),
                Cell::new(&row.label),
                Cell::new(row.plan.as_deref().unwrap_or("-")),
                Cell::new(row.tags.join(", ")),
            ]);
        }

        let count = self.services.len();
        format!(
            "{table}\n\nShowing {count} service{}",
            if count == 1 { "" } else { "s" }
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.services).unwrap_or_default()
    }
}

/// Rows for every instance matching `filter`, ordered by binding key
pub fn list_services(registry: &ServiceRegistry, filter: &ServiceFilter) -> Vec<ServiceRow> {
    let mut bindings: Vec<_> = registry.bindings().collect();
    bindings.sort_by_key(|(key, _)| *key);

    bindings
        .into_iter()
        .flat_map(move |(binding, instances)| {
            instances
                .iter()
                .filter(move |s| filter.matches(s))
                .map(move |s| ServiceRow {
                    binding: binding.to_string(),
                    name: s.name.clone(),
                    label: s.label.clone(),
                    plan: s.plan.clone(),
                    tags: s.tags.clone(),
                })
        })
        .collect()
}

/// Handle the services command
pub fn execute<E: EnvironmentSource>(
    loader: &VcapLoader<E>,
    filter: &ServiceFilter,
) -> Result<ServicesOutput> {
    let registry = loader.load_services().with_context(|| {
        format!(
            "Failed to load service bindings from {}",
            loader.services_key()
        )
    })?;

    tracing::debug!(instances = registry.len(), ?filter, "loaded service bindings");

    Ok(ServicesOutput {
        services: list_services(&registry, filter),
    })
}
