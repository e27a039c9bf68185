//! Export module for writing classified proxy lists to per-scheme files

use crate::proxy::models::{ClassifiedBundle, ProxyScheme};
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Exporter for turning a bundle into per-scheme text files
pub struct BundleExporter;

impl BundleExporter {
    /// Fixed output file name for a scheme
    pub fn file_name(scheme: ProxyScheme) -> &'static str {
        match scheme {
            ProxyScheme::Http => "http.txt",
            ProxyScheme::Socks4 => "socks4.txt",
            ProxyScheme::Socks5 => "socks5.txt",
        }
    }

    /// Newline-joined export blob for one scheme, `None` when empty
    pub fn blob(bundle: &ClassifiedBundle, scheme: ProxyScheme) -> Option<String> {
        let records = bundle.records(scheme);
        if records.is_empty() {
            return None;
        }
        Some(
            records
                .iter()
                .map(|r| r.address.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Write one scheme's blob into `dir`, returning the written path
    ///
    /// Empty schemes produce no file and return `None`.
    pub fn write_scheme<P: AsRef<Path>>(
        bundle: &ClassifiedBundle,
        scheme: ProxyScheme,
        dir: P,
    ) -> Result<Option<PathBuf>> {
        let Some(blob) = Self::blob(bundle, scheme) else {
            return Ok(None);
        };

        let path = dir.as_ref().join(Self::file_name(scheme));
        fs::write(&path, blob).with_context(|| format!("failed to write {:?}", path))?;
        Ok(Some(path))
    }

    /// Write all non-empty schemes into `dir`, creating it if needed
    ///
    /// Returns the paths written, in scheme priority order.
    pub fn write_all<P: AsRef<Path>>(bundle: &ClassifiedBundle, dir: P) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {:?}", dir))?;

        let mut written = Vec::new();
        for scheme in ProxyScheme::ALL {
            if let Some(path) = Self::write_scheme(bundle, scheme, dir)? {
                written.push(path);
            }
        }
        Ok(written)
    }
}
