//! carepath-cli library root.
//!
//! Input handling and report assembly for the `carepath-score` binary, kept
//! here so integration tests can drive them without spawning a process.

pub mod input;
pub mod report;
