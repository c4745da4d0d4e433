//! Service registry built from `VCAP_SERVICES`.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::service::{render_credential, ServiceInstance};
use crate::domain::error::VcapError;

/// Bound services, keyed by binding name.
///
/// Order within a binding follows the source document. Order across
/// bindings is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ServiceRegistry {
    bindings: HashMap<String, Vec<ServiceInstance>>,
}

impl ServiceRegistry {
    /// Parse a registry from JSON text.
    ///
    /// `source_name` only labels the error.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self, VcapError> {
        serde_json::from_str(json).map_err(|e| VcapError::decode(source_name, e))
    }

    /// Instances bound under `binding_key`
    pub fn get(&self, binding_key: &str) -> Option<&[ServiceInstance]> {
        self.bindings.get(binding_key).map(Vec::as_slice)
    }

    /// Binding keys with their instances
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &[ServiceInstance])> {
        self.bindings
            .iter()
            .map(|(key, instances)| (key.as_str(), instances.as_slice()))
    }

    /// Every instance across all bindings
    pub fn instances(&self) -> impl Iterator<Item = &ServiceInstance> {
        self.bindings.values().flatten()
    }

    /// Total instance count across all bindings
    pub fn len(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Instances whose name equals `name` exactly
    pub fn find_by_name(&self, name: &str) -> Vec<&ServiceInstance> {
        self.instances().filter(|s| s.name == name).collect()
    }

    /// Instances whose label equals `label` exactly
    pub fn find_by_label(&self, label: &str) -> Vec<&ServiceInstance> {
        self.instances().filter(|s| s.label == label).collect()
    }

    /// Instances carrying `tag`
    pub fn find_by_tag(&self, tag: &str) -> Vec<&ServiceInstance> {
        self.instances().filter(|s| s.has_tag(tag)).collect()
    }

    /// Resolve `identifier` to a single instance.
    ///
    /// The first name match wins. Labels are only consulted when no instance
    /// has that name.
    pub fn find_instance(&self, identifier: &str) -> Option<&ServiceInstance> {
        self.find_by_name(identifier)
            .into_iter()
            .next()
            .or_else(|| self.find_by_label(identifier).into_iter().next())
    }

    /// Read one credential of the instance resolved by
    /// [`find_instance`](Self::find_instance) and render it as text.
    ///
    /// # Errors
    /// * [`VcapError::NotFound`] when no instance has that name or label
    /// * [`VcapError::CredentialRead`] when the key is absent or null
    pub fn get_credential(&self, identifier: &str, key: &str) -> Result<String, VcapError> {
        let service = self
            .find_instance(identifier)
            .ok_or_else(|| VcapError::NotFound {
                identifier: identifier.to_string(),
            })?;

        service
            .credential(key)
            .and_then(render_credential)
            .ok_or_else(|| VcapError::CredentialRead {
                identifier: identifier.to_string(),
                key: key.to_string(),
            })
    }
}

/// A `null` document, binding array, or array entry decodes as empty.
impl<'de> Deserialize<'de> for ServiceRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        type RawBindings = HashMap<String, Option<Vec<Option<ServiceInstance>>>>;

        let raw = Option::<RawBindings>::deserialize(deserializer)?.unwrap_or_default();
        let bindings = raw
            .into_iter()
            .map(|(key, instances)| {
                let instances = instances
                    .unwrap_or_default()
                    .into_iter()
                    .map(Option::unwrap_or_default)
                    .collect();
                (key, instances)
            })
            .collect();

        Ok(Self { bindings })
    }
}

impl FromStr for ServiceRegistry {
    type Err = VcapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json("service bindings", s)
    }
}

impl From<HashMap<String, Vec<ServiceInstance>>> for ServiceRegistry {
    fn from(bindings: HashMap<String, Vec<ServiceInstance>>) -> Self {
        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICES: &str = r#"{
        "postgres": [
            {
                "name": "my-postgres-name",
                "label": "postgres",
                "plan": "small",
                "tags": ["postgres", "relational"],
                "credentials": {
                    "username": "u1",
                    "nothing": null,
                    "empty": "",
                    "ssl": true,
                    "port": 12345,
                    "ratio": 50.000001,
                    "hosts": ["a", "b"]
                }
            },
            {
                "name": "other-postgres",
                "label": "postgres",
                "credentials": {"username": "u2"}
            }
        ],
        "user-provided": [
            {
                "name": "postgres",
                "label": "user-provided",
                "credentials": {"username": "from-name"}
            }
        ],
        "rabbitmq": [
            {
                "name": "queue",
                "label": "p-rabbitmq",
                "credentials": {}
            }
        ]
    }"#;

    fn registry() -> ServiceRegistry {
        SERVICES.parse().expect("valid bindings")
    }

    #[test]
    fn test_find_by_name() {
        let reg = registry();
        let found = reg.find_by_name("my-postgres-name");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].label, "postgres");
        assert_eq!(found[0].plan.as_deref(), Some("small"));
    }

    #[test]
    fn test_find_by_name_is_case_sensitive() {
        assert!(registry().find_by_name("My-Postgres-Name").is_empty());
    }

    #[test]
    fn test_find_by_label_preserves_binding_order() {
        let reg = registry();
        let names: Vec<_> = reg
            .find_by_label("postgres")
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["my-postgres-name", "other-postgres"]);
    }

    #[test]
    fn test_find_no_match_is_empty() {
        let reg = registry();
        assert!(reg.find_by_name("missing").is_empty());
        assert!(reg.find_by_label("missing").is_empty());
    }

    #[test]
    fn test_find_by_tag() {
        let reg = registry();
        let found = reg.find_by_tag("relational");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "my-postgres-name");
    }

    #[test]
    fn test_binding_accessors() {
        let reg = registry();
        assert_eq!(reg.len(), 4);
        assert!(!reg.is_empty());
        assert_eq!(reg.get("postgres").map(<[_]>::len), Some(2));
        assert!(reg.get("redis").is_none());
        assert_eq!(reg.bindings().count(), 3);
        assert_eq!(reg.instances().count(), 4);
    }

    #[test]
    fn test_get_credential_by_label() {
        let reg: ServiceRegistry = r#"{"postgres":[{"name":"my-postgres-name","label":"postgres","credentials":{"username":"u1","nothing":null}}]}"#
            .parse()
            .unwrap();
        assert_eq!(reg.get_credential("postgres", "username").unwrap(), "u1");

        let err = reg.get_credential("my-postgres-name", "nothing").unwrap_err();
        assert!(err.is_credential_read());
        assert_eq!(
            err.to_string(),
            "could not read credential my-postgres-name.nothing"
        );
    }

    #[test]
    fn test_name_beats_label() {
        // "postgres" is the label of two instances and the name of another
        let reg = registry();
        assert_eq!(
            reg.get_credential("postgres", "username").unwrap(),
            "from-name"
        );
        assert_eq!(reg.find_instance("postgres").unwrap().label, "user-provided");
    }

    #[test]
    fn test_get_credential_renders_types() {
        let reg = registry();
        assert_eq!(reg.get_credential("my-postgres-name", "ssl").unwrap(), "true");
        assert_eq!(reg.get_credential("my-postgres-name", "port").unwrap(), "12345");
        assert_eq!(
            reg.get_credential("my-postgres-name", "ratio").unwrap(),
            "50.000001"
        );
        assert_eq!(
            reg.get_credential("my-postgres-name", "hosts").unwrap(),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn test_empty_string_credential_is_valid() {
        assert_eq!(
            registry().get_credential("my-postgres-name", "empty").unwrap(),
            ""
        );
    }

    #[test]
    fn test_missing_credential_key() {
        let err = registry().get_credential("queue", "uri").unwrap_err();
        assert!(err.is_credential_read());
    }

    #[test]
    fn test_unknown_identifier() {
        let err = registry().get_credential("redis", "uri").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "could not find service with name or label redis"
        );
    }

    #[test]
    fn test_empty_registry() {
        let reg: ServiceRegistry = "{}".parse().unwrap();
        assert!(reg.is_empty());
        assert!(reg.get_credential("anything", "k").unwrap_err().is_not_found());
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServiceRegistry>();
    }

    #[test]
    fn test_null_label_keeps_other_lookups() {
        let reg: ServiceRegistry = r#"{
            "user-provided": [{"name": "x", "label": null, "credentials": {"k": "v"}}],
            "postgres": [{"name": "db", "label": "postgres", "credentials": {"username": "u1"}}]
        }"#
        .parse()
        .expect("null label should decode");

        assert_eq!(reg.get_credential("x", "k").unwrap(), "v");
        assert_eq!(reg.get_credential("postgres", "username").unwrap(), "u1");
        assert!(reg.find_by_name("x")[0].label.is_empty());
    }

    #[test]
    fn test_null_binding_array_is_empty() {
        let reg: ServiceRegistry = r#"{
            "postgres": null,
            "redis": [{"name": "cache", "label": "redis"}]
        }"#
        .parse()
        .unwrap();

        assert_eq!(reg.get("postgres").map(<[_]>::len), Some(0));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.find_instance("redis").unwrap().name, "cache");
    }

    #[test]
    fn test_null_entry_is_default_instance() {
        let reg: ServiceRegistry = r#"{"postgres": [null, {"name": "db"}]}"#.parse().unwrap();
        let instances = reg.get("postgres").unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0], ServiceInstance::default());
        assert_eq!(instances[1].name, "db");
    }

    #[test]
    fn test_null_document_is_empty_registry() {
        let reg: ServiceRegistry = "null".parse().expect("null document should decode");
        assert!(reg.is_empty());
        assert!(reg.get_credential("postgres", "k").unwrap_err().is_not_found());
    }

    #[test]
    fn test_decode_errors() {
        assert!("".parse::<ServiceRegistry>().unwrap_err().is_decode());
        assert!("not json".parse::<ServiceRegistry>().unwrap_err().is_decode());
        assert!(r#"{"postgres": {"name": "x"}}"#
            .parse::<ServiceRegistry>()
            .unwrap_err()
            .is_decode());
    }
}
