use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use url::Url;

use marketscout_common::ScoutResult;

/// File-backed set of already-checked listing URLs.
///
/// URLs are normalized before lookup so that tracking parameters and
/// fragments do not defeat deduplication. The backing file holds one
/// normalized URL per line and is appended to on every new mark.
pub struct DedupStore {
    path: PathBuf,
    cache: HashSet<String>,
}

/// Keep scheme, host (and port) and path only; query and fragment are
/// stripped and trailing slashes trimmed, except for a bare "/".
fn normalize_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let mut authority = parsed.host_str().unwrap_or("").to_string();
            if let Some(port) = parsed.port() {
                authority = format!("{authority}:{port}");
            }
            let path = if parsed.path() == "/" {
                "/"
            } else {
                parsed.path().trim_end_matches('/')
            };
            format!("{}://{}{}", parsed.scheme(), authority, path)
        }
        // Unparseable input is deduplicated verbatim rather than dropped.
        Err(_) => url.trim().to_string(),
    }
}

impl DedupStore {
    pub fn open(path: impl Into<PathBuf>) -> ScoutResult<Self> {
        let path = path.into();
        let mut cache = HashSet::new();

        if path.exists() {
            for line in fs::read_to_string(&path)?.lines() {
                let url = line.trim();
                if !url.is_empty() {
                    cache.insert(url.to_string());
                }
            }
        }

        Ok(Self { path, cache })
    }

    pub fn is_new(&self, url: &str) -> bool {
        !self.cache.contains(&normalize_url(url))
    }

    /// Record a URL as checked and persist it. Idempotent.
    pub fn mark_checked(&mut self, url: &str) -> ScoutResult<()> {
        let normalized = normalize_url(url);
        if self.cache.insert(normalized.clone()) {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            writeln!(file, "{normalized}")?;
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) -> ScoutResult<()> {
        self.cache.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
