mod constraint_set;
mod diagnosis_error;

pub use constraint_set::*;
pub use diagnosis_error::*;
