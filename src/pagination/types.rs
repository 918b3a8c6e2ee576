//! Pagination types
//!
//! The cursor, strategy, and per-call state shared by the fetcher and the
//! paginator.

/// How the next page of a result set is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStrategy {
    /// Offset pagination: next cursor = previous page number + 1
    PageNumber,
    /// Keyset pagination, ascending: next cursor = id of the last item
    IdAbove,
    /// Keyset pagination, descending: next cursor = id of the last item
    IdBelow,
}

impl PaginationStrategy {
    /// The query parameter the cursor is sent under
    pub fn cursor_param(&self) -> &'static str {
        match self {
            Self::PageNumber => "page",
            Self::IdAbove => "id_above",
            Self::IdBelow => "id_below",
        }
    }

    /// Server-side sort forced by keyset strategies, as query pairs.
    ///
    /// Keyset correctness depends on a monotonic id order; page-number
    /// pagination leaves the caller's ordering alone.
    pub fn sort_params(&self) -> Option<[(&'static str, &'static str); 2]> {
        match self {
            Self::PageNumber => None,
            Self::IdAbove => Some([("order_by", "id"), ("order", "asc")]),
            Self::IdBelow => Some([("order_by", "id"), ("order", "desc")]),
        }
    }

    /// Whether the next cursor is derived from the last item's id
    pub fn is_keyset(&self) -> bool {
        matches!(self, Self::IdAbove | Self::IdBelow)
    }
}

/// The value used to request the next page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// No cursor yet; the first fetch sends no cursor parameter
    #[default]
    Start,
    /// Page number for [`PaginationStrategy::PageNumber`]
    Page(u32),
    /// Last-seen item id for keyset strategies
    Id(u64),
}

/// Paginator lifecycle phase.
///
/// `Exhausted` and `Failed` are terminal; a paginator never leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Constructed, no fetch yet
    #[default]
    Idle,
    /// A page request is outstanding
    Fetching,
    /// A page has been received and normalized
    HasPage,
    /// No further pages
    Exhausted,
    /// An unrecoverable error occurred; it was surfaced to the caller
    Failed,
}

/// Per-call pagination state.
///
/// Created when the paginator starts, mutated once per page fetched, and
/// discarded with the paginator. Never shared across paginator instances.
#[derive(Debug, Clone, Default)]
pub struct PaginatorState {
    /// Cursor for the next fetch
    pub cursor: Cursor,
    /// Lifecycle phase
    pub phase: Phase,
    /// Items fetched so far across all pages
    pub total_fetched: u64,
    /// Pages fetched so far
    pub pages_fetched: u32,
}

impl PaginatorState {
    /// Create a fresh state at the start of a sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the sequence has reached a terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Exhausted | Phase::Failed)
    }
}
