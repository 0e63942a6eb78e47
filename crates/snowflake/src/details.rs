//! Decomposed connection credentials, the alternative to a connection URL.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IssueCode, ValidationErrors, ValidationIssue};

/// Information needed to connect to a Snowflake database, field by field.
///
/// The external/serialized key for the schema is `schema`; the field itself
/// is named `schema_name` because `schema` collides with a reserved
/// identifier in downstream tooling. Persisted forms always use `schema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDetails {
    pub account: String,
    pub user: String,
    /// May itself be a `${SECRET}` template, resolved at engine-build time.
    pub password: String,
    pub database: String,
    #[serde(rename = "schema")]
    pub schema_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Driver-specific extra flags, passed through to engine construction.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Field names recognized at the top level of a datasource config and in a
/// details mapping. `schema` is the external spelling.
pub(crate) const DETAIL_FIELD_NAMES: [&str; 7] = [
    "account",
    "user",
    "password",
    "database",
    "schema",
    "warehouse",
    "role",
];

const REQUIRED_FIELDS: [&str; 5] = ["account", "user", "password", "database", "schema"];

impl ConnectionDetails {
    /// Build from a JSON mapping, collecting one issue per missing or
    /// malformed field instead of stopping at the first.
    pub fn from_value(value: Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let Value::Object(mut map) = value else {
            return Err(ValidationIssue::new(
                "connection_string",
                IssueCode::Required,
                "connection details must be a mapping",
            )
            .into());
        };

        let mut required = |map: &mut serde_json::Map<String, Value>, name: &str| -> String {
            match map.remove(name) {
                Some(Value::String(s)) if !s.is_empty() => s,
                Some(Value::String(_)) | None => {
                    errors.push(ValidationIssue::new(
                        format!("connection_string.{name}"),
                        IssueCode::Required,
                        "field required",
                    ));
                    String::new()
                }
                Some(_) => {
                    errors.push(ValidationIssue::new(
                        format!("connection_string.{name}"),
                        IssueCode::Required,
                        "must be a string",
                    ));
                    String::new()
                }
            }
        };

        let account = required(&mut map, "account");
        let user = required(&mut map, "user");
        let password = required(&mut map, "password");
        let database = required(&mut map, "database");
        let schema_name = required(&mut map, "schema");

        let mut optional = |map: &mut serde_json::Map<String, Value>, name: &str| -> Option<String> {
            match map.remove(name) {
                Some(Value::String(s)) if !s.is_empty() => Some(s),
                Some(Value::Null) | None => None,
                Some(Value::String(_)) => None,
                Some(_) => {
                    errors.push(ValidationIssue::new(
                        format!("connection_string.{name}"),
                        IssueCode::Required,
                        "must be a string",
                    ));
                    None
                }
            }
        };

        let warehouse = optional(&mut map, "warehouse");
        let role = optional(&mut map, "role");

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            account,
            user,
            password,
            database,
            schema_name,
            warehouse,
            role,
            extra: map.into_iter().collect(),
        })
    }

    /// Check the required fields of an already-typed value.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let values = [
            &self.account,
            &self.user,
            &self.password,
            &self.database,
            &self.schema_name,
        ];
        for (name, value) in REQUIRED_FIELDS.iter().zip(values) {
            if value.is_empty() {
                errors.push(ValidationIssue::new(
                    format!("connection_string.{name}"),
                    IssueCode::Required,
                    "field required",
                ));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_from_complete_mapping() {
        let details = ConnectionDetails::from_value(json!({
            "account": "a",
            "user": "u",
            "password": "p",
            "database": "d",
            "schema": "s",
        }))
        .unwrap();
        assert_eq!(details.database, "d");
        assert_eq!(details.schema_name, "s");
        assert!(details.warehouse.is_none());
        assert!(details.extra.is_empty());
    }

    #[test]
    fn each_missing_field_gets_its_own_issue() {
        let err = ConnectionDetails::from_value(json!({
            "account": "a",
            "user": "u",
            "schema": "s",
        }))
        .unwrap_err();
        // password and database are both reported.
        assert_eq!(err.len(), 2);
        let fields: Vec<&str> = err.issues().iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"connection_string.password"));
        assert!(fields.contains(&"connection_string.database"));
    }

    #[test]
    fn extra_flags_are_preserved() {
        let details = ConnectionDetails::from_value(json!({
            "account": "a",
            "user": "u",
            "password": "p",
            "database": "d",
            "schema": "s",
            "numpy": true,
        }))
        .unwrap();
        assert_eq!(details.extra.get("numpy"), Some(&json!(true)));
    }

    #[test]
    fn serializes_schema_under_external_name() {
        let details = ConnectionDetails::from_value(json!({
            "account": "a",
            "user": "u",
            "password": "p",
            "database": "d",
            "schema": "s",
            "warehouse": "wh",
        }))
        .unwrap();
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["schema"], "s");
        assert!(value.get("schema_name").is_none());

        let back: ConnectionDetails = serde_json::from_value(value).unwrap();
        assert_eq!(back, details);
    }

    #[test]
    fn non_string_required_field_is_reported() {
        let err = ConnectionDetails::from_value(json!({
            "account": 42,
            "user": "u",
            "password": "p",
            "database": "d",
            "schema": "s",
        }))
        .unwrap_err();
        assert_eq!(err.issues()[0].field, "connection_string.account");
        assert_eq!(err.issues()[0].message, "must be a string");
    }
}
