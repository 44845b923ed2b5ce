//! Domain layer: check targets, per-file results, project ID extraction, and
//! the settings schema.
//!
//! Everything here is pure.  Reading files and testing for their existence
//! belongs to `infrastructure`; deciding what to do with the results belongs
//! to `application`.

pub mod check;
pub mod project_id;
pub mod settings;
