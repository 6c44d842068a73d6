//! Structured-output schema descriptors
//!
//! Describes the required shape of schema-constrained model output and
//! validates candidate payloads against it. Validation is presence and basic
//! type conformance only; values are never coerced or defaulted.

use crate::error::{AppError, Result};
use serde_json::{json, Value};

/// Kind of a required field
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// A JSON string
    String,
    /// A JSON object with its own required fields
    Object(Vec<SchemaField>),
    /// A JSON array whose elements are objects with the given required fields
    Array(Vec<SchemaField>),
}

/// One required field of a structured response
#[derive(Debug, Clone)]
pub struct SchemaField {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Hint passed to the model alongside the type, not used for validation
    pub description: Option<&'static str>,
}

impl SchemaField {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Required shape of a structured model response: a JSON object whose
/// top-level fields are all mandatory
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    pub fields: Vec<SchemaField>,
}

impl ResponseSchema {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self { fields }
    }

    /// Schema for transcript extraction: a summary string plus an array of
    /// action items, each carrying `text` and `owner` strings
    pub fn extraction() -> Self {
        Self::new(vec![
            SchemaField::new("summary", FieldKind::String).with_description(
                "A concise, professional core summary of the meeting's main conclusions.",
            ),
            SchemaField::new(
                "actionItems",
                FieldKind::Array(vec![
                    SchemaField::new("text", FieldKind::String)
                        .with_description("The specific task to be completed."),
                    SchemaField::new("owner", FieldKind::String)
                        .with_description("The person or department responsible for the task."),
                ]),
            ),
        ])
    }

    /// Verify that `value` is an object carrying every required field with a
    /// conforming type. Failures are retryable malformed-output errors.
    pub fn validate(&self, value: &Value) -> Result<()> {
        validate_fields(&self.fields, value, "response")
    }

    /// Encode the descriptor into the response-schema value the remote API
    /// expects (`OBJECT`/`STRING`/`ARRAY` type tags, `properties`, `required`)
    pub fn to_request_value(&self) -> Value {
        object_value(&self.fields)
    }
}

fn validate_fields(fields: &[SchemaField], value: &Value, path: &str) -> Result<()> {
    let object = value.as_object().ok_or_else(|| {
        AppError::MalformedOutput(format!("expected `{}` to be an object", path))
    })?;

    for field in fields {
        let child_path = format!("{}.{}", path, field.name);
        let child = object.get(field.name).ok_or_else(|| {
            AppError::MalformedOutput(format!("missing required field `{}`", child_path))
        })?;

        match &field.kind {
            FieldKind::String => {
                if !child.is_string() {
                    return Err(AppError::MalformedOutput(format!(
                        "expected `{}` to be a string",
                        child_path
                    )));
                }
            }
            FieldKind::Object(inner) => {
                validate_fields(inner, child, &child_path)?;
            }
            FieldKind::Array(element_fields) => {
                let items = child.as_array().ok_or_else(|| {
                    AppError::MalformedOutput(format!(
                        "expected `{}` to be an array",
                        child_path
                    ))
                })?;
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", child_path, index);
                    validate_fields(element_fields, item, &item_path)?;
                }
            }
        }
    }

    Ok(())
}

fn object_value(fields: &[SchemaField]) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for field in fields {
        let mut encoded = match &field.kind {
            FieldKind::String => json!({ "type": "STRING" }),
            FieldKind::Object(inner) => object_value(inner),
            FieldKind::Array(element_fields) => json!({
                "type": "ARRAY",
                "items": object_value(element_fields),
            }),
        };
        if let Some(description) = field.description {
            encoded["description"] = json!(description);
        }
        properties.insert(field.name.to_string(), encoded);
        required.push(field.name);
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conforming_payload_passes() {
        let schema = ResponseSchema::extraction();
        let value = serde_json::json!({
            "summary": "Team aligned on mobile beta launch timeline.",
            "actionItems": [
                { "text": "Deliver high-fidelity recording screen design", "owner": "Design" },
                { "text": "Submit local-cache technical proposal", "owner": "Engineering" }
            ]
        });
        assert!(schema.validate(&value).is_ok());
    }

    #[test]
    fn test_missing_top_level_field_fails() {
        let schema = ResponseSchema::extraction();
        let value = serde_json::json!({ "summary": "done" });
        let error = schema.validate(&value).unwrap_err();
        assert!(matches!(error, AppError::MalformedOutput(_)));
        assert!(error.to_string().contains("actionItems"));
    }

    #[test]
    fn test_wrong_type_fails() {
        let schema = ResponseSchema::extraction();
        let value = serde_json::json!({ "summary": 42, "actionItems": [] });
        let error = schema.validate(&value).unwrap_err();
        assert!(error.to_string().contains("summary"));
    }

    #[test]
    fn test_array_elements_are_checked() {
        let schema = ResponseSchema::extraction();
        let value = serde_json::json!({
            "summary": "ok",
            "actionItems": [
                { "text": "Deliver design", "owner": "Design" },
                { "text": "Submit proposal" }
            ]
        });
        let error = schema.validate(&value).unwrap_err();
        assert!(error.to_string().contains("actionItems[1].owner"));
    }

    #[test]
    fn test_empty_array_is_conforming() {
        let schema = ResponseSchema::extraction();
        let value = serde_json::json!({ "summary": "quiet meeting", "actionItems": [] });
        assert!(schema.validate(&value).is_ok());
    }

    #[test]
    fn test_non_object_payload_fails() {
        let schema = ResponseSchema::extraction();
        assert!(schema.validate(&serde_json::json!("just text")).is_err());
    }

    #[test]
    fn test_request_value_shape() {
        let value = ResponseSchema::extraction().to_request_value();
        assert_eq!(value["type"], "OBJECT");
        assert_eq!(value["properties"]["summary"]["type"], "STRING");
        assert_eq!(value["properties"]["actionItems"]["type"], "ARRAY");
        assert_eq!(
            value["properties"]["actionItems"]["items"]["properties"]["owner"]["type"],
            "STRING"
        );
        let required: Vec<&str> = value["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["summary", "actionItems"]);
    }
}
