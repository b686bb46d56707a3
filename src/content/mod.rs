//! Content module - post models, the listing accumulator, and derived values

mod feed;
mod post;
pub mod reading_time;

pub use feed::{Feed, FeedSession, LoadMore};
pub use post::{Banner, BodyBlock, Post, PostData, PostPage, PostSummary, Section, SummaryData};
