//! Proxy module for classifying and exporting proxy lists
//!
//! This module provides functionality for:
//! - Classifying mixed proxy lines into HTTP/SOCKS4/SOCKS5 buckets by prefix
//! - Cleaning scheme substrings out of matched lines
//! - Exporting each non-empty bucket as a newline-joined text file

pub mod classifier;
pub mod export;
pub mod models;

pub use classifier::{DecodePolicy, ProxyClassifier};
pub use export::BundleExporter;
pub use models::{ClassifiedBundle, ProxyRecord, ProxyScheme, SplitCounts};
