//! Opt-in payload validation. Construction of a [`Model`] never validates
//! anything; callers that want shape guarantees declare a `Schema` and run
//! it explicitly after construction.

use serde_json::Value;

use crate::domain::model::Model;
use crate::utils::error::{ModelError, Result};

/// Expected JSON shape for a declared payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Double,
    Boolean,
    Array,
    Object,
    Any,
}

impl FieldType {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            // Integer literals are acceptable doubles.
            FieldType::Double => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Array => value.is_array(),
            FieldType::Object => value.is_object(),
            FieldType::Any => true,
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Double => "double",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Any => "any",
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

/// Declared expectations for a variant's payload. Undeclared keys are left
/// alone; a stored null passes the type check since present-but-null is a
/// legal state for any field.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn validate(&self, model: &Model) -> Result<()> {
        for spec in self.fields {
            let value = match model.raw_value(spec.name) {
                Some(value) => value,
                None => {
                    if spec.required {
                        tracing::debug!(
                            "Validation failed on {}: {} is missing",
                            model.type_name(),
                            spec.name
                        );
                        return Err(ModelError::InvalidPayload {
                            model: model.type_name().to_string(),
                            field: spec.name.to_string(),
                            reason: "required field is missing".to_string(),
                        });
                    }
                    continue;
                }
            };

            if value.is_null() {
                continue;
            }

            if !spec.ty.matches(value) {
                return Err(ModelError::InvalidPayload {
                    model: model.type_name().to_string(),
                    field: spec.name.to_string(),
                    reason: format!("expected {}, got {}", spec.ty.name(), json_type_name(value)),
                });
            }
        }

        Ok(())
    }
}
