//! The diagnosis engines together with the infrastructure they share: the consistency oracle
//! contract and the log of submitted checks.
mod batched;
mod check_log;
mod oracle;
mod sequential;

pub(crate) use batched::BatchedDiagnosisEngine;
pub use check_log::CheckLog;
pub use check_log::CheckRecord;
pub use oracle::ConsistencyOracle;
pub(crate) use sequential::SequentialDiagnosisEngine;
