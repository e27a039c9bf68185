//! Proxy Split - Proxy List Splitter
//!
//! This is a proxy list splitter for mixed proxy files.
//! It buckets lines into HTTP, SOCKS4, and SOCKS5 groups by scheme prefix
//! and exports each non-empty group as a plain-text file.

pub mod proxy;
pub mod tui;

pub use proxy::*;

/// Application result type
pub type Result<T> = anyhow::Result<T>;
