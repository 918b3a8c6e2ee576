//! HTTP transport boundary
//!
//! The pagination engine consumes HTTP through the [`Transport`] trait: one
//! bounded request in, one raw status-plus-JSON response out. The concrete
//! [`HttpTransport`] is a thin reqwest wrapper; it performs no retries and
//! imposes no policy beyond headers and the configured timeout. Retry-on-5xx,
//! if wanted, belongs in a wrapping transport, not here.

mod throttle;
mod transport;

pub use throttle::Throttle;
pub use transport::{HttpTransport, Method, RawResponse, Transport};

#[cfg(test)]
mod tests;
