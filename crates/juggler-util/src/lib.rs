//! Shared utilities for Juggler.
//!
//! Cross-cutting concerns used by the other Juggler crates: the error
//! taxonomy, filesystem helpers, and terminal status output.

pub mod errors;
pub mod fs;
pub mod progress;
