//! pxt-migrate library interface
//!
//! Migrates rating and keyword data from darktable sidecars into their
//! Capture One counterparts. The library side exists so the decision and
//! patch logic can be integration tested without the binary.

pub mod classify;
pub mod patch;
pub mod processor;
pub mod report;

pub use classify::{classify, MigrationOutcome};
pub use patch::{patch, PatchError};
pub use processor::{run, MigrateError, RunOptions, RunSummary};
