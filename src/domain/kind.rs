use serde_json::Value;

use crate::domain::model::Model;
use crate::utils::error::Result;

/// A derived-field computation. Receives the model it is registered on and
/// typically reads other fields through [`Model::get`], so lookup failures
/// inside the computation propagate to the caller.
pub type DerivedFn = fn(&Model) -> Result<Value>;

/// One registered derived field on a [`Kind`].
#[derive(Debug, Clone, Copy)]
pub struct Derived {
    pub field: &'static str,
    pub compute: DerivedFn,
}

/// Identity of a concrete model variant: a name used in diagnostics and a
/// static table of derived-field computations. Variants are ordinary
/// `static` items; a [`Model`] holds a reference to its `Kind` instead of
/// subclassing anything.
#[derive(Debug)]
pub struct Kind {
    pub name: &'static str,
    pub derived: &'static [Derived],
}

impl Kind {
    pub const fn new(name: &'static str) -> Self {
        Self { name, derived: &[] }
    }

    pub const fn with_derived(name: &'static str, derived: &'static [Derived]) -> Self {
        Self { name, derived }
    }

    pub fn derived_for(&self, field: &str) -> Option<&Derived> {
        self.derived.iter().find(|d| d.field == field)
    }

    pub fn has_derived(&self, field: &str) -> bool {
        self.derived_for(field).is_some()
    }
}
