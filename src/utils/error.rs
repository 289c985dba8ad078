use std::fmt;

use thiserror::Error;

/// The mutation a caller attempted on an already-constructed model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Set,
    Unset,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::Set => write!(f, "modify"),
            MutationKind::Unset => write!(f, "unset"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Error getting data {field}: does not exist on {model}")]
    FieldNotFound { field: String, model: String },

    #[error("Cannot {operation} data properties on {model} after instantiation")]
    ImmutableViolation {
        model: String,
        operation: MutationKind,
    },

    #[error("Invalid payload on {model}: {field}: {reason}")]
    InvalidPayload {
        model: String,
        field: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
