//! Paginated listing accumulator
//!
//! The listing shown to the reader grows one page at a time. `Feed` is the
//! accumulated value and `Feed::with_page` the pure transition; `FeedSession`
//! drives the transition against a `PostSource` and guards against
//! overlapping requests.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tokio::sync::Mutex;

use crate::cms::{FetchError, PostSource};
use crate::content::{PostPage, PostSummary};

/// Accumulated listing state
///
/// `results` holds every entry fetched so far in the API's return order;
/// pages are concatenated, never deduplicated or re-sorted. `next_page` is
/// the cursor of the page that has not been fetched yet; `None` means the
/// collection is exhausted.
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    pub next_page: Option<String>,
    pub results: Vec<PostSummary>,
}

impl Feed {
    /// An empty feed with nothing left to fetch
    pub fn empty() -> Self {
        Self {
            next_page: None,
            results: Vec::new(),
        }
    }

    /// Start a feed from the first fetched page
    pub fn from_page(page: PostPage) -> Self {
        Self {
            next_page: page.next_page,
            results: page.results,
        }
    }

    /// Append a fetched page: the new cursor is the page's cursor, the
    /// results are the previous results followed by the page's results.
    pub fn with_page(mut self, page: PostPage) -> Self {
        self.next_page = page.next_page;
        self.results.extend(page.results);
        self
    }

    /// Whether another page can be requested
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}

/// Outcome of a `load_more` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// A page was fetched and its entries appended
    Appended(usize),
    /// The cursor was null; no request was issued
    EndOfFeed,
    /// Another request is outstanding; this call did nothing
    InFlight,
}

/// One reader's view of the listing, able to grow itself
///
/// Shared behind an `Arc`, concurrent `load_more` calls serialize through
/// the in-flight flag: the second caller gets `InFlight` instead of racing
/// the first. A failed fetch leaves the feed untouched.
pub struct FeedSession<S> {
    source: S,
    feed: Mutex<Feed>,
    in_flight: AtomicBool,
}

impl<S: PostSource> FeedSession<S> {
    /// Create a session over an already-fetched first page
    pub fn new(source: S, initial: Feed) -> Self {
        Self {
            source,
            feed: Mutex::new(initial),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current feed
    pub async fn feed(&self) -> Feed {
        self.feed.lock().await.clone()
    }

    /// Fetch the next page and append it
    ///
    /// A no-op when the cursor is null or a request is already outstanding.
    /// On fetch failure the feed is left unchanged and the error propagates
    /// to the caller, which decides how to degrade.
    pub async fn load_more(&self) -> Result<LoadMore, FetchError> {
        let cursor = {
            let feed = self.feed.lock().await;
            match &feed.next_page {
                Some(cursor) => cursor.clone(),
                None => return Ok(LoadMore::EndOfFeed),
            }
        };

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Ok(LoadMore::InFlight);
        }

        let fetched = self.source.fetch_page(&cursor).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match fetched {
            Ok(page) => {
                let mut feed = self.feed.lock().await;
                // Discard a stale response if the cursor moved underneath us
                if feed.next_page.as_deref() != Some(cursor.as_str()) {
                    return Ok(LoadMore::InFlight);
                }
                let appended = page.results.len();
                let current = std::mem::replace(&mut *feed, Feed::empty());
                *feed = current.with_page(page);
                Ok(LoadMore::Appended(appended))
            }
            Err(err) => {
                tracing::warn!("load more failed, keeping current feed: {}", err);
                Err(err)
            }
        }
    }
}
