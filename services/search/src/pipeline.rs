use marketscout_common::ScoutResult;
use marketscout_config::Settings;
use marketscout_journal::{DedupStore, LogEntry, SearchLog, SearchStats, SnapshotStore};
use marketscout_scoring::{Confidence, Listing, RelevanceScorer};

/// Per-listing processing: dedup check, score, snapshot on promising
/// results, journal entry. The scorer itself is pure; everything stateful
/// lives in the journal stores.
pub struct SearchPipeline {
    scorer: RelevanceScorer,
    dedup: DedupStore,
    log: SearchLog,
    snapshots: SnapshotStore,
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

impl SearchPipeline {
    pub fn from_settings(settings: &Settings) -> ScoutResult<Self> {
        let logs_dir = settings.output.logs_path();
        Ok(Self {
            scorer: settings.scorer()?,
            dedup: DedupStore::open(logs_dir.join("checked_links.txt"))?,
            log: SearchLog::open(&logs_dir)?,
            snapshots: SnapshotStore::new(&settings.output.base_dir),
        })
    }

    /// Returns `None` when the listing's URL was already checked.
    pub fn process(&mut self, listing: &Listing) -> ScoutResult<Option<LogEntry>> {
        if !self.dedup.is_new(&listing.url) {
            tracing::debug!("already checked: {}", listing.url);
            return Ok(None);
        }

        let scored = self.scorer.score(listing);
        tracing::info!(
            "[{}] {}/100 - {}",
            scored.confidence.as_str().to_uppercase(),
            scored.score,
            truncate(&scored.title, 50)
        );

        let snapshot = match scored.confidence {
            Confidence::High | Confidence::Medium => Some(self.snapshots.save(&scored)?),
            Confidence::Low => None,
        };

        if scored.confidence == Confidence::High {
            if let Some(path) = &snapshot {
                self.snapshots.copy_to_high_confidence(path)?;
            }
        }

        let entry = self.log.log_result(&scored, snapshot.as_deref())?;
        self.dedup.mark_checked(&listing.url)?;

        Ok(Some(entry))
    }

    /// Write the daily summary and report session stats.
    pub fn finish(&mut self) -> ScoutResult<SearchStats> {
        self.log.write_daily_summary()?;
        Ok(self.log.stats())
    }
}
