pub mod domain;
pub mod utils;

pub use domain::kind::{Derived, DerivedFn, Kind};
pub use domain::model::Model;
pub use domain::schema::{FieldSpec, FieldType, Schema};
pub use utils::error::{ModelError, MutationKind, Result};
