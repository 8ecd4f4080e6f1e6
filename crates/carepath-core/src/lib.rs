//! carepath-core
//!
//! Shared vocabulary of the survey scoring engine: answer sets, item keys,
//! domain identifiers and the scoring output contract. No scoring logic lives
//! here; this is what the intake forms, the scoring engine and the dashboard
//! agree on.

pub mod error;
pub mod models;
