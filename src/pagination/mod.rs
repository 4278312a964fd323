//! Item-Range Pagination Module
//!
//! Implements the textual item-range protocol shared by every list endpoint.
//! Clients request a window with `Range: items <first>-<last>`; the server
//! echoes the materialized window plus the total count back via
//! `Content-Range: items <first>-<last>/<total>`.

pub mod range;

pub use range::{Range, RangeParseError};
