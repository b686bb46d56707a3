//! Post models as returned by the content API
//!
//! The field schema mirrors the API contract: a listing entry carries only
//! the projected summary fields, the detail document carries the banner and
//! the full section list. Identity is the slug; nothing here is mutated
//! after deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the article listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    /// Unique, URL-safe identifier assigned by the CMS
    pub uid: String,

    /// First publication timestamp; null for unpublished previews
    pub first_publication_date: Option<DateTime<Utc>>,

    /// Projected summary fields
    pub data: SummaryData,
}

/// Summary fields projected into listing responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
}

/// One page of the article listing
///
/// `next_page` is an opaque cursor URL; `None` signals the end of the
/// collection. `results` keeps the API's return order and is never
/// re-sorted on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    pub next_page: Option<String>,
    pub results: Vec<PostSummary>,
}

impl PostPage {
    /// An exhausted page with no entries
    pub fn empty() -> Self {
        Self {
            next_page: None,
            results: Vec::new(),
        }
    }
}

/// A full article document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub uid: String,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub data: PostData,
}

/// Detail fields of an article document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub banner: Banner,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: Vec<Section>,
}

/// Banner image reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default)]
    pub url: String,
}

/// One titled section of an article body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: Vec<BodyBlock>,
}

/// One rich-text paragraph, reduced to its plain text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyBlock {
    #[serde(default)]
    pub text: String,
}
