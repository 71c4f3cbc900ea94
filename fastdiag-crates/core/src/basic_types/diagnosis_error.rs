use thiserror::Error;

/// A fault raised by the external consistency oracle.
///
/// The recursion propagates it unchanged to the top-level computation; retries, if desired,
/// belong to the oracle implementation itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("consistency oracle failure: {0}")]
pub struct OracleFailure(pub String);

/// The errors which can abort a diagnosis computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisError {
    /// The recursion is undefined for an empty consideration set.
    #[error("cannot diagnose an empty consideration set")]
    EmptyConsiderationSet,
    /// The external consistency oracle failed; the whole computation is aborted.
    #[error(transparent)]
    Oracle(#[from] OracleFailure),
}
