//! Proxy classifier module for bucketing proxy lines by scheme prefix

use crate::proxy::models::{ClassifiedBundle, ProxyRecord, ProxyScheme};
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Scheme substrings removed from matched lines when cleaning
const SCHEME_SUBSTRINGS: [&str; 4] = ["http://", "https://", "socks4://", "socks5://"];

/// How byte input is decoded before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Replace invalid UTF-8 sequences and keep going
    #[default]
    Lossy,
    /// Fail on the first invalid UTF-8 sequence
    Strict,
}

/// Proxy classifier for splitting mixed proxy lists by declared scheme
pub struct ProxyClassifier;

impl ProxyClassifier {
    /// Classify a single line by its scheme prefix
    ///
    /// Matches case-sensitively, in fixed priority order: `http://` or
    /// `https://`, then `socks4://`, then `socks5://`. Returns `None` for
    /// blank lines and lines with no recognized prefix.
    pub fn classify_line(line: &str) -> Option<(ProxyScheme, ProxyRecord)> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let scheme = if line.starts_with("http://") || line.starts_with("https://") {
            ProxyScheme::Http
        } else if line.starts_with("socks4://") {
            ProxyScheme::Socks4
        } else if line.starts_with("socks5://") {
            ProxyScheme::Socks5
        } else {
            return None;
        };

        Some((scheme, ProxyRecord::new(Self::clean_address(line))))
    }

    /// Strip every scheme substring from a line and trim the remainder
    ///
    /// Removal is not limited to the leading prefix: an occurrence embedded
    /// in credentials or a path is stripped too. Deliberately kept that way
    /// to match the behavior downstream consumers already rely on.
    pub fn clean_address(line: &str) -> String {
        let mut cleaned = line.to_string();
        for scheme in SCHEME_SUBSTRINGS {
            cleaned = cleaned.replace(scheme, "");
        }
        cleaned.trim().to_string()
    }

    /// Classify a block of newline-separated text into a bundle
    ///
    /// Pure transform: blank lines are skipped, unrecognized lines are
    /// counted as dropped, and input order is preserved within each scheme.
    pub fn classify(content: &str) -> ClassifiedBundle {
        let mut bundle = ClassifiedBundle::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Self::classify_line(trimmed) {
                Some((scheme, record)) => bundle.push(scheme, record),
                None => bundle.dropped += 1,
            }
        }

        bundle
    }

    /// Decode bytes under the given policy, then classify
    pub fn classify_bytes(bytes: &[u8], policy: DecodePolicy) -> Result<ClassifiedBundle> {
        let content = match policy {
            DecodePolicy::Lossy => String::from_utf8_lossy(bytes).into_owned(),
            DecodePolicy::Strict => std::str::from_utf8(bytes)
                .context("input is not valid UTF-8")?
                .to_string(),
        };
        Ok(Self::classify(&content))
    }

    /// Classify the contents of a file
    pub fn classify_file<P: AsRef<Path>>(path: P, policy: DecodePolicy) -> Result<ClassifiedBundle> {
        let bytes = fs::read(&path)
            .with_context(|| format!("failed to read {:?}", path.as_ref()))?;
        Self::classify_bytes(&bytes, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_http_line() {
        let (scheme, record) = ProxyClassifier::classify_line("http://1.2.3.4:8080").unwrap();
        assert_eq!(scheme, ProxyScheme::Http);
        assert_eq!(record.address, "1.2.3.4:8080");
    }

    #[test]
    fn test_classify_https_line_lands_in_http() {
        let (scheme, record) = ProxyClassifier::classify_line("https://1.2.3.4:443").unwrap();
        assert_eq!(scheme, ProxyScheme::Http);
        assert_eq!(record.address, "1.2.3.4:443");
    }

    #[test]
    fn test_classify_socks_lines() {
        let (scheme, _) = ProxyClassifier::classify_line("socks4://9.9.9.9:1081").unwrap();
        assert_eq!(scheme, ProxyScheme::Socks4);

        let (scheme, _) = ProxyClassifier::classify_line("socks5://5.6.7.8:1080").unwrap();
        assert_eq!(scheme, ProxyScheme::Socks5);
    }

    #[test]
    fn test_classify_line_case_sensitive() {
        assert!(ProxyClassifier::classify_line("HTTP://1.2.3.4:8080").is_none());
        assert!(ProxyClassifier::classify_line("Socks5://5.6.7.8:1080").is_none());
    }

    #[test]
    fn test_classify_line_no_prefix() {
        assert!(ProxyClassifier::classify_line("1.2.3.4:8080").is_none());
        assert!(ProxyClassifier::classify_line("garbage-line").is_none());
        assert!(ProxyClassifier::classify_line("").is_none());
        assert!(ProxyClassifier::classify_line("   ").is_none());
    }

    #[test]
    fn test_classify_line_trims_whitespace() {
        let (_, record) = ProxyClassifier::classify_line("  http://1.2.3.4:8080  ").unwrap();
        assert_eq!(record.address, "1.2.3.4:8080");
    }

    #[test]
    fn test_strips_embedded_scheme_substrings() {
        // Stripping applies anywhere in the line, not only the prefix.
        let (scheme, record) =
            ProxyClassifier::classify_line("https://user:http://pass@host:80").unwrap();
        assert_eq!(scheme, ProxyScheme::Http);
        assert_eq!(record.address, "user:pass@host:80");
    }

    #[test]
    fn test_cleaned_address_has_no_scheme_substrings() {
        let (_, record) = ProxyClassifier::classify_line("socks5://socks4://1.2.3.4:1080").unwrap();
        for scheme in ["http://", "https://", "socks4://", "socks5://"] {
            assert!(!record.address.contains(scheme));
        }
    }

    #[test]
    fn test_classify_mixed_input() {
        let content = "http://1.2.3.4:8080\nsocks5://5.6.7.8:1080\ngarbage-line\nsocks4://9.9.9.9:1081\n";
        let bundle = ProxyClassifier::classify(content);

        assert_eq!(bundle.http, vec![ProxyRecord::new("1.2.3.4:8080".to_string())]);
        assert_eq!(bundle.socks4, vec![ProxyRecord::new("9.9.9.9:1081".to_string())]);
        assert_eq!(bundle.socks5, vec![ProxyRecord::new("5.6.7.8:1080".to_string())]);
        assert_eq!(bundle.dropped, 1);
    }

    #[test]
    fn test_classify_preserves_relative_order() {
        let content = "http://a:1\nsocks5://x:9\nhttp://b:2\nhttp://c:3\n";
        let bundle = ProxyClassifier::classify(content);

        let addrs: Vec<_> = bundle.http.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addrs, vec!["a:1", "b:2", "c:3"]);
    }

    #[test]
    fn test_classify_empty_input() {
        let bundle = ProxyClassifier::classify("");
        assert!(bundle.is_empty());
        assert_eq!(bundle.dropped, 0);

        let bundle = ProxyClassifier::classify("\n\n   \n");
        assert!(bundle.is_empty());
        assert_eq!(bundle.dropped, 0);
    }

    #[test]
    fn test_count_conservation() {
        let content = "http://a:1\n\nnope\nsocks4://b:2\nalso nope\n  \nsocks5://c:3\n";
        let bundle = ProxyClassifier::classify(content);

        let non_blank = content.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(bundle.total() + bundle.dropped, non_blank);
    }

    #[test]
    fn test_classify_is_idempotent_on_cleaned_output() {
        let content = "http://1.2.3.4:8080\nsocks5://5.6.7.8:1080\n";
        let bundle = ProxyClassifier::classify(content);

        // Re-classifying cleaned addresses finds no prefixes to match.
        let cleaned: Vec<String> = bundle
            .http
            .iter()
            .chain(&bundle.socks5)
            .map(|r| r.address.clone())
            .collect();
        let again = ProxyClassifier::classify(&cleaned.join("\n"));
        assert!(again.is_empty());
        assert_eq!(again.dropped, cleaned.len());
    }

    #[test]
    fn test_classify_bytes_lossy() {
        let bytes = b"http://1.2.3.4:8080\n\xff\xfegarbage\nsocks5://5.6.7.8:1080\n";
        let bundle = ProxyClassifier::classify_bytes(bytes, DecodePolicy::Lossy).unwrap();
        assert_eq!(bundle.count(ProxyScheme::Http), 1);
        assert_eq!(bundle.count(ProxyScheme::Socks5), 1);
        assert_eq!(bundle.dropped, 1);
    }

    #[test]
    fn test_classify_bytes_strict_rejects_invalid_utf8() {
        let bytes = b"http://1.2.3.4:8080\n\xff\xfe\n";
        assert!(ProxyClassifier::classify_bytes(bytes, DecodePolicy::Strict).is_err());
        assert!(ProxyClassifier::classify_bytes(bytes, DecodePolicy::Lossy).is_ok());
    }

    #[test]
    fn test_classify_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proxies.txt");
        std::fs::write(&path, "http://1.2.3.4:8080\nsocks4://9.9.9.9:1081\n").unwrap();

        let bundle = ProxyClassifier::classify_file(&path, DecodePolicy::default()).unwrap();
        assert_eq!(bundle.count(ProxyScheme::Http), 1);
        assert_eq!(bundle.count(ProxyScheme::Socks4), 1);
    }

    #[test]
    fn test_classify_file_missing() {
        let result = ProxyClassifier::classify_file("/no/such/file.txt", DecodePolicy::default());
        assert!(result.is_err());
    }
}
