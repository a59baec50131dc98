use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use chrono::Local;

use marketscout_common::ScoutResult;
use marketscout_scoring::Confidence;

use crate::log::{LogEntry, SearchLog};

impl SearchLog {
    /// Render and write `daily_summary_YYYY-MM-DD.md` for the current
    /// session's results.
    pub fn write_daily_summary(&self) -> ScoutResult<PathBuf> {
        let date = Local::now().format("%Y-%m-%d").to_string();
        let path = self.logs_dir.join(format!("daily_summary_{date}.md"));

        let content = render(&date, &self.daily_results);
        fs::write(&path, content)?;

        tracing::info!("daily summary written: {}", path.display());
        Ok(path)
    }
}

fn render(date: &str, results: &[LogEntry]) -> String {
    let tier = |c: Confidence| -> Vec<&LogEntry> {
        results.iter().filter(|r| r.confidence == c).collect()
    };
    let high = tier(Confidence::High);
    let medium = tier(Confidence::Medium);
    let low = tier(Confidence::Low);

    let mut lines = vec![
        format!("# Daily Search Summary - {date}"),
        String::new(),
        "## Overview".to_string(),
        String::new(),
        format!("- **Total Listings Checked:** {}", results.len()),
        format!("- **High Confidence:** {}", high.len()),
        format!("- **Medium Confidence:** {}", medium.len()),
        format!("- **Low Confidence:** {}", low.len()),
        String::new(),
    ];

    if !high.is_empty() {
        lines.push("## High Confidence Matches (Score >= 70)".to_string());
        lines.push(String::new());
        lines.push("**Action Required:** Review these listings immediately!".to_string());
        lines.push(String::new());
        for entry in &high {
            lines.extend(format_entry(entry));
        }
    }

    if !medium.is_empty() {
        lines.push("## Medium Confidence Matches (Score 40-69)".to_string());
        lines.push(String::new());
        lines.push("Worth reviewing when time permits.".to_string());
        lines.push(String::new());
        for entry in &medium {
            lines.extend(format_entry(entry));
        }
    }

    if !low.is_empty() {
        lines.push("## Low Confidence Matches (Score <40)".to_string());
        lines.push(String::new());
        lines.push(format!(
            "*{} listings checked but unlikely to match.*",
            low.len()
        ));
        lines.push(String::new());
    }

    // Group sub-regioned sources (e.g. craigslist_sfbay) under their prefix.
    let mut sources: BTreeMap<String, usize> = BTreeMap::new();
    for entry in results {
        let group = entry
            .source
            .split('_')
            .next()
            .unwrap_or(&entry.source)
            .to_string();
        *sources.entry(group).or_insert(0) += 1;
    }
    let mut sources: Vec<(String, usize)> = sources.into_iter().collect();
    sources.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    lines.push("## Sources Breakdown".to_string());
    lines.push(String::new());
    for (source, count) in sources {
        lines.push(format!("- **{source}:** {count} listings"));
    }

    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(format!(
        "*Generated at {}*",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    lines.join("\n")
}

fn format_entry(entry: &LogEntry) -> Vec<String> {
    let title: String = if entry.title.chars().count() > 60 {
        format!("{}...", entry.title.chars().take(60).collect::<String>())
    } else {
        entry.title.clone()
    };

    let mut lines = vec![
        format!("### [{title}]({})", entry.url),
        String::new(),
        format!("- **Source:** {}", entry.source),
        format!("- **Price:** {}", entry.price.as_deref().unwrap_or("N/A")),
        format!("- **Score:** {}/100", entry.confidence_score),
        format!("- **Factors:** {}", entry.matched_factors.join(", ")),
    ];

    if let Some(snapshot) = &entry.snapshot {
        lines.push(format!("- **Snapshot:** `{snapshot}`"));
    }

    lines.push(String::new());
    lines
}
