//! Immutable key-value model. A `Model` binds a payload mapping to a
//! variant [`Kind`] at construction and never changes afterwards; "changed"
//! versions are produced by [`Model::copy`].

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::kind::Kind;
use crate::domain::schema::json_type_name;
use crate::utils::error::{ModelError, MutationKind, Result};

#[derive(Debug, Clone, Serialize)]
pub struct Model {
    #[serde(skip)]
    kind: &'static Kind,
    #[serde(flatten)]
    data: HashMap<String, Value>,
}

impl Model {
    /// Binds `data` to the variant. Keys and value types are not inspected;
    /// construction never fails.
    pub fn new(kind: &'static Kind, data: HashMap<String, Value>) -> Self {
        Self { kind, data }
    }

    /// Builds a model from a JSON object. Anything other than an object is
    /// rejected with `InvalidPayload`.
    pub fn from_value(kind: &'static Kind, value: Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Ok(Self::new(kind, obj.into_iter().collect())),
            other => Err(ModelError::InvalidPayload {
                model: kind.name.to_string(),
                field: "payload".to_string(),
                reason: format!("expected a JSON object, got {}", json_type_name(&other)),
            }),
        }
    }

    pub fn kind(&self) -> &'static Kind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.name
    }

    /// Looks up a field. A stored payload key always wins; otherwise a
    /// derived computation registered under `name` is evaluated on the fly
    /// (results are never cached). Stored values are returned as clones, so
    /// nothing handed out can reach back into the model.
    pub fn get(&self, name: &str) -> Result<Value> {
        if let Some(value) = self.data.get(name) {
            return Ok(value.clone());
        }

        if let Some(derived) = self.kind.derived_for(name) {
            tracing::trace!("Evaluating derived field {} on {}", name, self.kind.name);
            return (derived.compute)(self);
        }

        Err(ModelError::FieldNotFound {
            field: name.to_string(),
            model: self.kind.name.to_string(),
        })
    }

    /// True iff `name` is a stored payload key, even when the stored value
    /// is null. Derived fields are not considered.
    pub fn has_field(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// True iff `name` is a stored payload key or a registered derived
    /// field. The derived computation is not evaluated.
    pub fn has(&self, name: &str) -> bool {
        self.has_field(name) || self.kind.has_derived(name)
    }

    /// True iff `name` is stored and its value is not null. Missing and
    /// present-but-null both answer false.
    pub fn is_set(&self, name: &str) -> bool {
        matches!(self.data.get(name), Some(value) if !value.is_null())
    }

    /// Rejected unconditionally; use [`Model::copy`] to obtain a changed
    /// version.
    pub fn set(&self, _name: &str, _value: Value) -> Result<()> {
        Err(ModelError::ImmutableViolation {
            model: self.kind.name.to_string(),
            operation: MutationKind::Set,
        })
    }

    /// Rejected unconditionally; use [`Model::copy`] to obtain a changed
    /// version.
    pub fn unset(&self, _name: &str) -> Result<()> {
        Err(ModelError::ImmutableViolation {
            model: self.kind.name.to_string(),
            operation: MutationKind::Unset,
        })
    }

    /// The raw payload as a plain mapping, derived fields excluded. The
    /// result is a deep clone (`serde_json::Value` clones recursively), so
    /// mutating it cannot leak back into the model.
    pub fn to_mapping(&self) -> HashMap<String, Value> {
        self.data.clone()
    }

    /// New model of the same variant with `overrides` merged on top of the
    /// current payload: overridden keys win, untouched keys carry over, new
    /// keys are added. The original is left as-is.
    pub fn copy(&self, overrides: HashMap<String, Value>) -> Self {
        tracing::debug!(
            "Copying {} with {} overridden fields",
            self.kind.name,
            overrides.len()
        );

        let mut data = self.data.clone();
        data.extend(overrides);
        Self {
            kind: self.kind,
            data,
        }
    }

    pub(crate) fn raw_value(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.kind, other.kind) && self.data == other.data
    }
}
