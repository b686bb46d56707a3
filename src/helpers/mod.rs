//! Helper functions for view-model construction

mod date;
mod html;

pub use date::*;
pub use html::*;
