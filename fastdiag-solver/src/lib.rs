//! # FastDiag
//! FastDiag computes a minimal diagnosis of an inconsistent set of constraints: the smallest set
//! of constraints to remove so that the remainder is consistent. Equivalently, it computes a
//! maximal satisfiable subset (MSS). The consistency question itself is answered by an external
//! oracle (typically a constraint or SAT solver), and the divide-and-conquer recursion is
//! arranged so that the number of oracle calls grows logarithmically in the size of the
//! consideration set per diagnosis element, rather than linearly.
//!
//! # Using FastDiag
//! A computation needs two things: the consideration set of possibly faulty constraints, and an
//! implementation of [`ConsistencyOracle`]. Infallible oracles can be plain closures:
//! ```rust
//! use fastdiag_solver::constraint_set;
//! use fastdiag_solver::ConstraintSet;
//! use fastdiag_solver::Diagnoser;
//!
//! // Every set containing "power_supply_250w" is deemed inconsistent.
//! let oracle = |set: &ConstraintSet| !set.contains(&"power_supply_250w".into());
//! let mut diagnoser = Diagnoser::new(oracle);
//!
//! let consideration_set = constraint_set![
//!     "cpu_ryzen",
//!     "gpu_rtx4080",
//!     "power_supply_250w",
//!     "case_mini_itx",
//! ];
//!
//! let result = diagnoser
//!     .diagnose(&consideration_set)
//!     .expect("the consideration set is not empty");
//!
//! // Removing the power supply constraint restores consistency.
//! assert_eq!(result.diagnosis(), &constraint_set!["power_supply_250w"]);
//! assert_eq!(
//!     result.mss(),
//!     &constraint_set!["cpu_ryzen", "gpu_rtx4080", "case_mini_itx"]
//! );
//! ```
//!
//! Every set submitted to the oracle is recorded in a [`CheckLog`], in submission order:
//! ```rust
//! # use fastdiag_solver::constraint_set;
//! # use fastdiag_solver::ConstraintSet;
//! # use fastdiag_solver::Diagnoser;
//! let mut diagnoser = Diagnoser::new(|_: &ConstraintSet| true);
//!
//! let result = diagnoser
//!     .diagnose(&constraint_set!["c1", "c2", "c3", "c4"])
//!     .expect("the consideration set is not empty");
//!
//! // An already-consistent set is confirmed by a single check of the full set.
//! assert_eq!(result.check_log().len(), 1);
//! assert_eq!(result.diagnosis(), &constraint_set!());
//! ```
//!
//! # The batched engine
//! [`Diagnoser::diagnose_batched`] runs the generalisation of the recursion which carries many
//! background contexts through one pass. All checks owed at a recursion step are submitted
//! together (so an oracle implementation may dispatch them concurrently), and the result is an
//! enumerated frontier of MSS candidates rather than a single resolved MSS:
//! ```rust
//! # use fastdiag_solver::constraint_set;
//! # use fastdiag_solver::ConstraintSet;
//! # use fastdiag_solver::Diagnoser;
//! let mut diagnoser = Diagnoser::new(|_: &ConstraintSet| true);
//!
//! let result = diagnoser
//!     .diagnose_batched(&constraint_set!["c1", "c2"])
//!     .expect("the consideration set is not empty");
//!
//! // The frontier enumerates every subset of the consideration set.
//! assert_eq!(result.candidates().len(), 4);
//! ```
//!
//! ## Feature Flags
//! - `debug-checks`: Enable the more expensive internal assertions. Turned off by default.
pub use fastdiag_core::*;
