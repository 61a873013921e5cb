//! Domain layer: the timeline presentation engine.
//!
//! Everything here is pure: no I/O, no logging, no state kept between calls.

pub mod calendar;
pub mod conversation;
pub mod delivery_status;
pub mod message;
pub mod spacing;
pub mod timeline;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
