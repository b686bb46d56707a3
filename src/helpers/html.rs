//! HTML helper functions

/// Escape HTML special characters
///
/// View models are built from API-supplied text; everything interpolated
/// into a template goes through here first.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
