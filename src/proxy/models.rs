//! Proxy data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Proxy scheme enumeration
///
/// The scheme is decided solely by the prefix of an input line. `http://`
/// and `https://` lines both map to [`ProxyScheme::Http`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProxyScheme {
    Http,
    Socks4,
    Socks5,
}

impl ProxyScheme {
    /// All schemes, in the fixed classification priority order
    pub const ALL: [ProxyScheme; 3] = [ProxyScheme::Http, ProxyScheme::Socks4, ProxyScheme::Socks5];
}

impl fmt::Display for ProxyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyScheme::Http => write!(f, "http"),
            ProxyScheme::Socks4 => write!(f, "socks4"),
            ProxyScheme::Socks5 => write!(f, "socks5"),
        }
    }
}

/// A single cleaned proxy address with all scheme prefixes removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRecord {
    pub address: String,
}

impl ProxyRecord {
    pub fn new(address: String) -> Self {
        Self { address }
    }
}

impl fmt::Display for ProxyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// The grouped result of classifying one block of text
///
/// Holds one ordered sequence of records per scheme, preserving input order
/// within each, plus the number of non-blank lines that matched no scheme.
/// Created fresh per input and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedBundle {
    pub http: Vec<ProxyRecord>,
    pub socks4: Vec<ProxyRecord>,
    pub socks5: Vec<ProxyRecord>,
    /// Non-blank lines with no recognized scheme prefix (not retained)
    pub dropped: usize,
}

impl ClassifiedBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its scheme's sequence
    pub fn push(&mut self, scheme: ProxyScheme, record: ProxyRecord) {
        match scheme {
            ProxyScheme::Http => self.http.push(record),
            ProxyScheme::Socks4 => self.socks4.push(record),
            ProxyScheme::Socks5 => self.socks5.push(record),
        }
    }

    /// Records for one scheme, in input order
    pub fn records(&self, scheme: ProxyScheme) -> &[ProxyRecord] {
        match scheme {
            ProxyScheme::Http => &self.http,
            ProxyScheme::Socks4 => &self.socks4,
            ProxyScheme::Socks5 => &self.socks5,
        }
    }

    /// Number of records for one scheme
    pub fn count(&self, scheme: ProxyScheme) -> usize {
        self.records(scheme).len()
    }

    /// Total classified records across all schemes (excludes dropped lines)
    pub fn total(&self) -> usize {
        self.http.len() + self.socks4.len() + self.socks5.len()
    }

    /// True when no line classified into any scheme
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Per-scheme counts plus dropped, for reporting
    pub fn counts(&self) -> SplitCounts {
        SplitCounts {
            http: self.http.len(),
            socks4: self.socks4.len(),
            socks5: self.socks5.len(),
            dropped: self.dropped,
        }
    }
}

/// Per-scheme record counts, serialized for the `--json` summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCounts {
    pub http: usize,
    pub socks4: usize,
    pub socks5: usize,
    pub dropped: usize,
}
