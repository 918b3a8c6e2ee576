//! Pagination engine
//!
//! Supports: page-number (offset) and id-based keyset cursoring
//!
//! # Overview
//!
//! The paginator turns the API's bounded page endpoints into a lazy,
//! forward-only, single-pass sequence of normalized items. Each page is one
//! round trip; the next cursor is derived client-side from the
//! page just received (the server supplies no next-page token), a fixed
//! minimum delay is enforced between consecutive fetches, and no page
//! beyond the current one is ever fetched speculatively.
//!
//! Strategy choice is per endpoint and must not be mixed mid-sequence:
//!
//! - [`PaginationStrategy::IdAbove`] / [`PaginationStrategy::IdBelow`] —
//!   keyset pagination by item id with a forced server-side id sort.
//!   Required for the primary observation search endpoint, whose index
//!   cannot support arbitrary page-number jumps at scale. No duplicates or
//!   skips under concurrent inserts, except items inserted retroactively
//!   below the current cursor, which are never observed mid-pagination
//!   (accepted limitation).
//! - [`PaginationStrategy::PageNumber`] — offset pagination for endpoints
//!   with small bounded result sets. Susceptible to duplicates/skips when
//!   the result set mutates between fetches (accepted limitation of the
//!   strategy, not a defect).

mod fetcher;
mod paginator;
mod types;

pub use fetcher::{PageFetcher, PageRequest, PageResult};
pub use paginator::{Normalizer, Paginator};
pub use types::{Cursor, PaginationStrategy, PaginatorState, Phase};
