//! The paginator state machine
//!
//! `Idle → Fetching → HasPage → … → Exhausted | Failed`
//!
//! A paginator owns its state; nothing is shared across instances, so
//! independent paginators are safe to drive from separate tasks without
//! locking. Consuming a sequence partially and dropping it is safe: no
//! page beyond the current one has been fetched.

use super::fetcher::{PageFetcher, PageRequest};
use super::types::{Cursor, PaginationStrategy, PaginatorState, Phase};
use crate::error::Result;
use crate::http::{Throttle, Transport};
use crate::types::JsonValue;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use tracing::debug;

/// Per-page item normalizer, applied as each page arrives
pub type Normalizer = fn(JsonValue) -> JsonValue;

/// Lazy, forward-only, single-pass sequence of normalized items spanning
/// arbitrarily many pages.
///
/// Termination: the sequence is exhausted when the server-reported total
/// for the cursor-filtered query fits in one page, when a page comes back
/// empty, or when the optional page limit is reached. Errors are terminal
/// and surfaced, never swallowed.
pub struct Paginator<'a> {
    fetcher: PageFetcher<'a>,
    throttle: Throttle,
    state: PaginatorState,
    buffer: VecDeque<JsonValue>,
    normalizer: Option<Normalizer>,
    page_limit: Option<u32>,
}

impl<'a> Paginator<'a> {
    /// Create a paginator over a transport for one request
    pub fn new(transport: &'a dyn Transport, request: PageRequest) -> Self {
        Self {
            fetcher: PageFetcher::new(transport, request),
            throttle: Throttle::new(),
            state: PaginatorState::new(),
            buffer: VecDeque::new(),
            normalizer: None,
            page_limit: None,
        }
    }

    /// Normalize each item as its page arrives
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Stop after at most this many pages
    #[must_use]
    pub fn with_page_limit(mut self, pages: u32) -> Self {
        self.page_limit = Some(pages);
        self
    }

    /// Share a throttle with other paginators against the same host
    #[must_use]
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginatorState {
        &self.state
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Fetch and normalize the next page of items.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted. After an error
    /// the paginator is `Failed` and all further calls return `Ok(None)`.
    pub async fn next_page(&mut self) -> Result<Option<Vec<JsonValue>>> {
        if self.state.is_terminal() {
            return Ok(None);
        }

        // Skipped before the very first fetch; waits out the remainder of
        // the interval between any two consecutive fetches.
        self.throttle.wait().await;

        self.state.phase = Phase::Fetching;
        let page = match self.fetcher.fetch(&self.state.cursor).await {
            Ok(page) => page,
            Err(e) => {
                self.state.phase = Phase::Failed;
                return Err(e);
            }
        };

        self.state.pages_fetched += 1;
        self.state.total_fetched += page.returned as u64;
        self.advance_cursor(&page.last_id);

        if page.returned == 0 {
            debug!(pages = self.state.pages_fetched, "empty page, sequence exhausted");
            self.state.phase = Phase::Exhausted;
            return Ok(None);
        }

        let items: Vec<JsonValue> = match self.normalizer {
            Some(normalize) => page.results.into_iter().map(normalize).collect(),
            None => page.results,
        };

        // total_results is recomputed by the server against the cursor
        // filter, so "everything left fits in one page" means this page
        // was the last one.
        let request = self.fetcher.request();
        let limit_reached = self
            .page_limit
            .is_some_and(|limit| self.state.pages_fetched >= limit);
        if page.total_results <= u64::from(request.per_page) || limit_reached {
            self.state.phase = Phase::Exhausted;
        } else {
            self.state.phase = Phase::HasPage;
        }

        Ok(Some(items))
    }

    /// Produce the next normalized item, fetching a page only when the
    /// current one is drained.
    pub async fn next_item(&mut self) -> Option<Result<JsonValue>> {
        if self.buffer.is_empty() {
            match self.next_page().await {
                Ok(Some(items)) => self.buffer.extend(items),
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
        self.buffer.pop_front().map(Ok)
    }

    /// Turn the paginator into an item stream.
    ///
    /// An error ends the stream after it is yielded.
    pub fn into_stream(self) -> impl Stream<Item = Result<JsonValue>> + 'a {
        stream::unfold(self, |mut paginator| async move {
            paginator.next_item().await.map(|item| (item, paginator))
        })
    }

    /// Drain the full sequence into one combined list
    pub async fn collect_all(mut self) -> Result<Vec<JsonValue>> {
        let mut all = Vec::new();
        while let Some(items) = self.next_page().await? {
            all.extend(items);
        }
        Ok(all)
    }

    fn advance_cursor(&mut self, last_id: &Option<u64>) {
        let strategy = self.fetcher.request().strategy;
        self.state.cursor = match (strategy, &self.state.cursor) {
            (PaginationStrategy::PageNumber, Cursor::Start) => Cursor::Page(2),
            (PaginationStrategy::PageNumber, Cursor::Page(n)) => Cursor::Page(n + 1),
            (PaginationStrategy::IdAbove | PaginationStrategy::IdBelow, _) => match last_id {
                Some(id) => Cursor::Id(*id),
                // Empty page; the cursor no longer matters
                None => self.state.cursor,
            },
            (PaginationStrategy::PageNumber, Cursor::Id(_)) => self.state.cursor,
        };
    }
}
