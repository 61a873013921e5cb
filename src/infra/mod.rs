//! Infrastructure layer: adapters for config, logging, and snapshot files.

pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
pub mod snapshot_file;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
