//! UI layer: turns render directives into printable output.

pub mod directive_table;
pub mod timeline_text;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
