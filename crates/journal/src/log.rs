use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use marketscout_common::ScoutResult;
use marketscout_scoring::{Confidence, ScoredListing};

fn default_status() -> String {
    "new".to_string()
}

/// One line of `search_log.json`: a scored listing at the moment it was
/// seen, plus review bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub url: String,
    pub source: String,
    pub title: String,
    pub price: Option<String>,
    pub confidence_score: i32,
    pub confidence: Confidence,
    pub matched_factors: Vec<String>,
    #[serde(default)]
    pub snapshot: Option<String>,
    /// 'new', 'reviewed' or 'dismissed'; only ever written as 'new' here.
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct SearchStats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub sources: Vec<String>,
}

/// Append-style result log: keeps the current session's results in memory
/// for the daily summary, and mirrors every entry into `search_log.json`.
pub struct SearchLog {
    pub(crate) logs_dir: PathBuf,
    log_path: PathBuf,
    pub(crate) daily_results: Vec<LogEntry>,
}

impl SearchLog {
    pub fn open(logs_dir: impl Into<PathBuf>) -> ScoutResult<Self> {
        let logs_dir = logs_dir.into();
        fs::create_dir_all(&logs_dir)?;
        let log_path = logs_dir.join("search_log.json");
        Ok(Self {
            logs_dir,
            log_path,
            daily_results: Vec::new(),
        })
    }

    pub fn log_result(
        &mut self,
        listing: &ScoredListing,
        snapshot: Option<&Path>,
    ) -> ScoutResult<LogEntry> {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            url: listing.url.clone(),
            source: listing.source.clone(),
            title: listing.title.clone(),
            price: listing.price.clone(),
            confidence_score: listing.score,
            confidence: listing.confidence,
            matched_factors: listing.matched_factors.clone(),
            snapshot: snapshot.map(|p| p.display().to_string()),
            status: default_status(),
        };

        self.daily_results.push(entry.clone());
        self.append_to_json(&entry)?;

        Ok(entry)
    }

    /// Read-modify-write of the JSON array. A corrupt or missing file is
    /// treated as empty rather than aborting the run.
    fn append_to_json(&self, entry: &LogEntry) -> ScoutResult<()> {
        let mut entries = self.entries();
        entries.push(entry.clone());
        let rendered = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.log_path, rendered)?;
        Ok(())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        match fs::read_to_string(&self.log_path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("search_log.json unreadable, starting over: {e}");
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }

    pub fn daily_results(&self) -> &[LogEntry] {
        &self.daily_results
    }

    pub fn clear_daily_results(&mut self) {
        self.daily_results.clear();
    }

    pub fn stats(&self) -> SearchStats {
        let count = |c: Confidence| {
            self.daily_results
                .iter()
                .filter(|r| r.confidence == c)
                .count()
        };

        let mut sources: Vec<String> = self
            .daily_results
            .iter()
            .map(|r| r.source.clone())
            .collect();
        sources.sort();
        sources.dedup();

        SearchStats {
            total: self.daily_results.len(),
            high: count(Confidence::High),
            medium: count(Confidence::Medium),
            low: count(Confidence::Low),
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(url: &str, source: &str, score: i32) -> ScoredListing {
        ScoredListing {
            url: url.to_string(),
            source: source.to_string(),
            title: format!("Listing at {url}"),
            price: Some("$100".to_string()),
            score,
            confidence: marketscout_scoring::classify(score),
            matched_factors: vec!["gold".to_string()],
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn log_result_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = SearchLog::open(dir.path()).unwrap();
        log.log_result(&scored("https://a.test/1", "ebay", 80), None)
            .unwrap();
        log.log_result(&scored("https://a.test/2", "etsy", 10), None)
            .unwrap();

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "https://a.test/1");
        assert_eq!(entries[0].status, "new");
        assert_eq!(entries[1].confidence, Confidence::Low);
    }

    #[test]
    fn corrupt_log_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("search_log.json"), "{not json").unwrap();
        let mut log = SearchLog::open(dir.path()).unwrap();
        log.log_result(&scored("https://a.test/1", "ebay", 50), None)
            .unwrap();
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn snapshot_path_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = SearchLog::open(dir.path()).unwrap();
        let entry = log
            .log_result(
                &scored("https://a.test/1", "ebay", 80),
                Some(Path::new("snapshots/2026-08-29/high_ebay_120000.json")),
            )
            .unwrap();
        assert_eq!(
            entry.snapshot.as_deref(),
            Some("snapshots/2026-08-29/high_ebay_120000.json")
        );
    }

    #[test]
    fn stats_count_by_tier() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = SearchLog::open(dir.path()).unwrap();
        log.log_result(&scored("https://a.test/1", "ebay", 85), None)
            .unwrap();
        log.log_result(&scored("https://a.test/2", "ebay", 55), None)
            .unwrap();
        log.log_result(&scored("https://a.test/3", "etsy", 5), None)
            .unwrap();

        let stats = log.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.high, 1);
        assert_eq!(stats.medium, 1);
        assert_eq!(stats.low, 1);
        assert_eq!(stats.sources, vec!["ebay".to_string(), "etsy".to_string()]);
    }

    #[test]
    fn clear_daily_results_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = SearchLog::open(dir.path()).unwrap();
        log.log_result(&scored("https://a.test/1", "ebay", 85), None)
            .unwrap();
        log.clear_daily_results();
        assert_eq!(log.daily_results().len(), 0);
        assert_eq!(log.entries().len(), 1);
    }
}
