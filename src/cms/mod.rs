//! Content API integration - client, errors, and rich-text handling

mod client;
mod error;
pub mod richtext;

pub use client::{CmsClient, PostSource};
pub use error::FetchError;
