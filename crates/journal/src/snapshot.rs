use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use marketscout_common::ScoutResult;
use marketscout_scoring::ScoredListing;

/// Stores JSON snapshots of promising listings for human review, organized
/// by capture date. High-confidence snapshots additionally get copied into
/// `potential_matches/high_confidence/` so they are impossible to miss.
pub struct SnapshotStore {
    output_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn date_folder(&self) -> ScoutResult<PathBuf> {
        let date = Local::now().format("%Y-%m-%d").to_string();
        let folder = self.output_dir.join("snapshots").join(date);
        fs::create_dir_all(&folder)?;
        Ok(folder)
    }

    /// `{confidence}_{source}_{HHMMSS}.json`, with path-hostile characters
    /// stripped from the source tag.
    fn filename(listing: &ScoredListing) -> String {
        let source = listing.source.replace('/', "_").replace(':', "");
        let time = Local::now().format("%H%M%S");
        format!("{}_{}_{}.json", listing.confidence.as_str(), source, time)
    }

    pub fn save(&self, listing: &ScoredListing) -> ScoutResult<PathBuf> {
        let folder = self.date_folder()?;
        let path = folder.join(Self::filename(listing));

        let rendered = serde_json::to_string_pretty(listing)?;
        fs::write(&path, rendered)?;

        tracing::info!("snapshot saved: {}", path.display());
        Ok(path)
    }

    pub fn copy_to_high_confidence(&self, snapshot_path: &Path) -> ScoutResult<PathBuf> {
        let high_conf_dir = self
            .output_dir
            .join("potential_matches")
            .join("high_confidence");
        fs::create_dir_all(&high_conf_dir)?;

        let file_name = snapshot_path
            .file_name()
            .ok_or_else(|| marketscout_common::ScoutError::NotFound(
                format!("snapshot file name in {}", snapshot_path.display()),
            ))?;
        let dest = high_conf_dir.join(file_name);
        fs::copy(snapshot_path, &dest)?;

        tracing::info!("copied to high confidence: {}", dest.display());
        Ok(dest)
    }

    /// All snapshots captured on the given date (today if `None`), sorted.
    pub fn snapshots_for_date(&self, date: Option<&str>) -> Vec<PathBuf> {
        let date = date
            .map(|d| d.to_string())
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
        let folder = self.output_dir.join("snapshots").join(date);

        let Ok(dir) = fs::read_dir(&folder) else {
            return Vec::new();
        };

        let mut paths: Vec<PathBuf> = dir
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketscout_scoring::Confidence;

    fn scored(source: &str, score: i32) -> ScoredListing {
        ScoredListing {
            url: "https://a.test/1".to_string(),
            source: source.to_string(),
            title: "Gold Ring".to_string(),
            price: Some("$450".to_string()),
            score,
            confidence: marketscout_scoring::classify(score),
            matched_factors: vec!["gold".to_string()],
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn save_writes_dated_json_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let path = store.save(&scored("ebay", 85)).unwrap();

        assert!(path.exists());
        let date = Local::now().format("%Y-%m-%d").to_string();
        assert!(path.starts_with(dir.path().join("snapshots").join(date)));

        let restored: ScoredListing =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored.confidence, Confidence::High);
        assert_eq!(restored.url, "https://a.test/1");
    }

    #[test]
    fn filename_carries_confidence_and_sanitized_source() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let path = store.save(&scored("craigslist/sfbay:1", 85)).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("high_craigslist_sfbay1_"), "name={name}");
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn copy_to_high_confidence_duplicates_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let snapshot = store.save(&scored("ebay", 85)).unwrap();
        let copy = store.copy_to_high_confidence(&snapshot).unwrap();

        assert!(copy.exists());
        assert!(snapshot.exists());
        assert!(copy.starts_with(
            dir.path().join("potential_matches").join("high_confidence")
        ));
    }

    #[test]
    fn snapshots_for_date_lists_today() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        store.save(&scored("ebay", 85)).unwrap();
        store.save(&scored("etsy", 45)).unwrap();

        assert_eq!(store.snapshots_for_date(None).len(), 2);
        assert!(store.snapshots_for_date(Some("1999-01-01")).is_empty());
    }
}
