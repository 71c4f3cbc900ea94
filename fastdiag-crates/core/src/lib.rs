pub(crate) mod basic_types;
pub(crate) mod engine;

#[doc(hidden)]
pub mod asserts;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use fastdiag_solver::Diagnoser;`
// vs.
// `use fastdiag_solver::api::Diagnoser;`
mod api;

pub use api::*;

pub use crate::basic_types::ConstraintId;
pub use crate::basic_types::ConstraintSet;
pub use crate::basic_types::DiagnosisError;
pub use crate::basic_types::OracleFailure;
pub use crate::engine::CheckLog;
pub use crate::engine::CheckRecord;
pub use crate::engine::ConsistencyOracle;
