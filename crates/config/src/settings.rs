use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use marketscout_common::{ScoutError, ScoutResult};
use marketscout_scoring::{BikeWeights, RelevanceScorer, RingWeights};

/// Which target-item profile this search is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Ring,
    Bike,
}

/// Top-level YAML configuration. Every section is optional; compiled-in
/// defaults apply to anything unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: Profile,
    pub output: OutputSettings,
    pub scoring: ScoringSettings,
    pub known_leads: Vec<KnownLead>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub base_dir: PathBuf,
    pub logs_dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("output"),
            logs_dir: "logs".to_string(),
        }
    }
}

impl OutputSettings {
    pub fn logs_path(&self) -> PathBuf {
        self.base_dir.join(&self.logs_dir)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    /// Raw `scoring.weights` mapping; interpreted against the profile's
    /// typed weight struct when the scorer is built. Unset keys fall back
    /// to the compiled-in defaults.
    pub weights: Option<serde_yaml::Value>,
}

/// A hand-curated URL worth checking on every run.
#[derive(Debug, Clone, Deserialize)]
pub struct KnownLead {
    pub url: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> ScoutResult<Self> {
        if !path.exists() {
            return Err(ScoutError::NotFound(format!(
                "config file {}",
                path.display()
            )));
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Build the scorer for the configured profile. A malformed weights
    /// mapping fails here, at startup, never per listing.
    pub fn scorer(&self) -> ScoutResult<RelevanceScorer> {
        match self.profile {
            Profile::Ring => {
                let weights: RingWeights = match &self.scoring.weights {
                    Some(v) => serde_yaml::from_value(v.clone())?,
                    None => RingWeights::default(),
                };
                Ok(RelevanceScorer::ring(weights))
            }
            Profile::Bike => {
                let weights: BikeWeights = match &self.scoring.weights {
                    Some(v) => serde_yaml::from_value(v.clone())?,
                    None => BikeWeights::default(),
                };
                Ok(RelevanceScorer::bike(weights))
            }
        }
    }
}
