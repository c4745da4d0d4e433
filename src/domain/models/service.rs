//! Bound service instance model.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;
use crate::domain::error::VcapError;

/// Credential map of a bound instance. Schema is service dependent.
pub type Credentials = Map<String, Value>;

/// One bound instance of a service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInstance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub credentials: Credentials,

    /// Service type identifier, e.g. `postgres`
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,

    /// Instance name assigned at bind time
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl ServiceInstance {
    /// Raw credential value, `None` when the key is absent
    pub fn credential(&self, key: &str) -> Option<&Value> {
        self.credentials.get(key)
    }

    /// Whether the instance carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Decode the credential map into a typed view such as
    /// [`Postgres`](super::credentials::Postgres).
    pub fn credentials_as<T: DeserializeOwned>(&self) -> Result<T, VcapError> {
        serde_json::from_value(Value::Object(self.credentials.clone()))
            .map_err(|e| VcapError::decode(format!("{} credentials", self.name), e))
    }
}

/// Render a credential value as text.
///
/// Returns `None` for JSON null. Numbers use their shortest decimal form,
/// so `12345.0` renders as `12345`. Objects and arrays render as compact JSON.
pub fn render_credential(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| f.to_string())
            }
        }
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::credentials::Postgres;
    use serde_json::json;

    fn instance(value: Value) -> ServiceInstance {
        serde_json::from_value(value).expect("valid instance")
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render_credential(&json!("u1")).as_deref(), Some("u1"));
        assert_eq!(render_credential(&json!("")).as_deref(), Some(""));
        assert_eq!(render_credential(&json!(true)).as_deref(), Some("true"));
        assert_eq!(render_credential(&json!(false)).as_deref(), Some("false"));
        assert_eq!(render_credential(&json!(12345)).as_deref(), Some("12345"));
        assert_eq!(render_credential(&json!(-7)).as_deref(), Some("-7"));
        assert_eq!(
            render_credential(&json!(50.000_001)).as_deref(),
            Some("50.000001")
        );
        assert_eq!(render_credential(&json!(u64::MAX)), Some(u64::MAX.to_string()));
    }

    #[test]
    fn test_render_whole_float_has_no_fraction() {
        let value: Value = serde_json::from_str("12345.0").unwrap();
        assert_eq!(render_credential(&value).as_deref(), Some("12345"));
    }

    #[test]
    fn test_render_float_extremes_without_exponent() {
        assert_eq!(
            render_credential(&json!(1e21)).as_deref(),
            Some("1000000000000000000000")
        );
        assert_eq!(render_credential(&json!(1e-7)).as_deref(), Some("0.0000001"));
        assert_eq!(render_credential(&json!(-2.5)).as_deref(), Some("-2.5"));
    }

    #[test]
    fn test_render_null_fails() {
        assert_eq!(render_credential(&Value::Null), None);
    }

    #[test]
    fn test_render_compound_as_json() {
        assert_eq!(
            render_credential(&json!(["a", 1])).as_deref(),
            Some(r#"["a",1]"#)
        );
        assert_eq!(
            render_credential(&json!({"k": "v"})).as_deref(),
            Some(r#"{"k":"v"}"#)
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let svc = instance(json!({"name": "bare"}));
        assert_eq!(svc.name, "bare");
        assert!(svc.label.is_empty());
        assert!(svc.credentials.is_empty());
        assert!(svc.tags.is_empty());
        assert_eq!(svc.plan, None);
    }

    #[test]
    fn test_null_collections_default() {
        let svc = instance(json!({"name": "n", "credentials": null, "tags": null}));
        assert!(svc.credentials.is_empty());
        assert!(svc.tags.is_empty());
    }

    #[test]
    fn test_null_name_and_label_default() {
        let svc = instance(json!({"name": null, "label": null, "plan": null, "credentials": {"k": "v"}}));
        assert!(svc.name.is_empty());
        assert!(svc.label.is_empty());
        assert_eq!(svc.plan, None);
        assert_eq!(svc.credentials["k"], "v");
    }

    #[test]
    fn test_has_tag() {
        let svc = instance(json!({"name": "db", "tags": ["postgres", "relational"]}));
        assert!(svc.has_tag("relational"));
        assert!(!svc.has_tag("Relational"));
    }

    #[test]
    fn test_credentials_as_postgres() {
        let svc = instance(json!({
            "name": "my-db",
            "label": "postgres",
            "credentials": {
                "ID": 0,
                "binding_id": "b1",
                "database": "db1",
                "host": "10.0.0.1",
                "port": "5432",
                "username": "u1",
                "password": "p1"
            }
        }));

        let pg: Postgres = svc.credentials_as().expect("postgres view");
        assert_eq!(pg.database, "db1");
        assert_eq!(pg.port, "5432");
        assert_eq!(pg.username, "u1");
        assert!(pg.uri.is_empty());
    }

    #[test]
    fn test_credentials_as_mismatch_is_decode_error() {
        let svc = instance(json!({"name": "my-db", "credentials": {"port": 5432}}));
        let err = svc.credentials_as::<Postgres>().unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("my-db credentials"));
    }
}
