use std::fmt;

use regex::Regex;
use thiserror::Error;

/// Raised when a range header is present but does not match the grammar.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid range {header:?}: expected \"items <first>-<last>\"")]
pub struct RangeParseError {
    header: String,
}

impl RangeParseError {
    fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
        }
    }
}

/// An inclusive item window `[first, last]` over an ordered result set.
///
/// `total` is output-only: it stays 0 until the storage collaborator fills it
/// in during a listing query, and is rendered as the `/<total>` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub first: i64,
    pub last: i64,
    pub total: i64,
}

impl Range {
    /// Sentinel meaning "no window requested". Not a valid range itself.
    pub const UNSET: Range = Range {
        first: -1,
        last: -1,
        total: 0,
    };

    pub fn new(first: i64, last: i64) -> Self {
        Self {
            first,
            last,
            total: 0,
        }
    }

    /// Parses a range header value.
    ///
    /// An empty input means no pagination was requested and yields the sentinel
    /// without an error. Anything else must match `items <first>-<last>` with
    /// non-negative decimal integers; ordering of the pair is not checked here,
    /// only by [`Range::valid`].
    pub fn parse(header: &str) -> Result<Range, RangeParseError> {
        if header.is_empty() {
            return Ok(Range::UNSET);
        }

        let re = Regex::new(r"^items (\d+)-(\d+)$").unwrap();
        let caps = re
            .captures(header)
            .ok_or_else(|| RangeParseError::new(header))?;

        let first = caps[1]
            .parse()
            .map_err(|_| RangeParseError::new(header))?;
        let last = caps[2]
            .parse()
            .map_err(|_| RangeParseError::new(header))?;

        Ok(Range::new(first, last))
    }

    pub fn valid(&self) -> bool {
        self.first >= 0 && self.last >= self.first
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "items {}-{}", self.first, self.last)?;
        if self.total != 0 {
            write!(f, "/{}", self.total)?;
        }
        Ok(())
    }
}
