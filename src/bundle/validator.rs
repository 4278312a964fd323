use serde_json::Value;

/// Schema validation collaborator.
///
/// Implementations check a single intelligence object against the object
/// schema and return every violation found (an empty list means valid).
pub trait SchemaValidator: Send + Sync {
    fn validate(&self, object: &Value) -> Vec<String>;
}

/// Default validator: structural checks only.
///
/// Requires each object to be a JSON object carrying non-empty string `id`
/// and `type` fields. Full schema validation lives outside this system.
pub struct StructuralValidator;

impl SchemaValidator for StructuralValidator {
    fn validate(&self, object: &Value) -> Vec<String> {
        let mut violations = Vec::new();

        let Some(fields) = object.as_object() else {
            violations.push(format!("object is not a json object: {object}"));
            return violations;
        };

        for field in ["id", "type"] {
            match fields.get(field).and_then(Value::as_str) {
                Some(value) if !value.is_empty() => {}
                _ => violations.push(format!("object is missing required field '{field}'")),
            }
        }

        violations
    }
}
