use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use marketscout_config::Settings;
use marketscout_journal::SearchStats;
use marketscout_scoring::Listing;

use crate::pipeline::SearchPipeline;
use crate::sources;

/// Score a feed of scraped listings (a JSON array of `Listing` records)
/// through the full pipeline. Known leads from the config are checked first.
pub fn run_score(config: &Path, listings_path: &Path) -> Result<()> {
    let settings = Settings::load(config)?;
    let mut pipeline = SearchPipeline::from_settings(&settings)?;

    for lead in &settings.known_leads {
        let listing = Listing {
            url: lead.url.clone(),
            source: "known_lead".to_string(),
            title: lead
                .note
                .clone()
                .unwrap_or_else(|| "Known Lead".to_string()),
            price: None,
            description: None,
            image_url: None,
        };
        pipeline.process(&listing)?;
    }

    let raw = fs::read_to_string(listings_path)
        .with_context(|| format!("reading listings file {}", listings_path.display()))?;
    let listings: Vec<Listing> =
        serde_json::from_str(&raw).context("listings file must be a JSON array of listings")?;

    tracing::info!("processing {} listings", listings.len());
    for listing in &listings {
        pipeline.process(listing)?;
    }

    let stats = pipeline.finish()?;
    print_stats("Search Complete!", &stats);

    if stats.high > 0 {
        println!(
            "\nHIGH CONFIDENCE MATCHES FOUND! Check {}/potential_matches/high_confidence/",
            settings.output.base_dir.display()
        );
    }

    Ok(())
}

/// Score bare URLs: one per line, blank lines and `#` comments skipped.
/// Without scraped content only the URL itself is scoreable, but dedup,
/// journaling and source tagging all still apply.
pub fn run_check_urls(config: &Path, urls_file: &Path) -> Result<()> {
    let settings = Settings::load(config)?;

    let raw = fs::read_to_string(urls_file)
        .with_context(|| format!("reading URLs file {}", urls_file.display()))?;
    let urls = parse_url_lines(&raw);

    if urls.is_empty() {
        bail!("no URLs found in {}", urls_file.display());
    }

    let invalid: Vec<&String> = urls
        .iter()
        .filter(|u| !u.starts_with("http://") && !u.starts_with("https://"))
        .collect();
    if !invalid.is_empty() {
        eprintln!("Warning: {} URLs don't start with http(s)://", invalid.len());
        for url in invalid.iter().take(3) {
            eprintln!("  - {url}");
        }
        if invalid.len() > 3 {
            eprintln!("  ... and {} more", invalid.len() - 3);
        }
    }

    println!("Checking {} URLs...", urls.len());

    let mut pipeline = SearchPipeline::from_settings(&settings)?;
    for url in &urls {
        let listing = Listing {
            url: url.clone(),
            source: sources::detect_source(url).unwrap_or("unknown").to_string(),
            title: url.clone(),
            price: None,
            description: None,
            image_url: None,
        };
        pipeline.process(&listing)?;
    }

    let stats = pipeline.finish()?;
    print_stats("URL Check Complete!", &stats);

    Ok(())
}

/// Print the daily summary for a given date, or the newest one on disk.
pub fn run_report(config: &Path, date: Option<&str>) -> Result<()> {
    let settings = Settings::load(config)?;
    let logs_dir = settings.output.logs_path();

    let summary_path = match date {
        Some(date) => logs_dir.join(format!("daily_summary_{date}.md")),
        None => {
            let mut summaries: Vec<_> = fs::read_dir(&logs_dir)
                .with_context(|| format!("reading logs directory {}", logs_dir.display()))?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .map(|n| {
                            let n = n.to_string_lossy();
                            n.starts_with("daily_summary_") && n.ends_with(".md")
                        })
                        .unwrap_or(false)
                })
                .collect();
            summaries.sort();
            match summaries.pop() {
                Some(path) => path,
                None => bail!("no summary files found in {}", logs_dir.display()),
            }
        }
    };

    if !summary_path.exists() {
        bail!("summary not found: {}", summary_path.display());
    }

    print!("{}", fs::read_to_string(&summary_path)?);
    Ok(())
}

fn parse_url_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect()
}

fn print_stats(title: &str, stats: &SearchStats) {
    println!("\n{}", "=".repeat(50));
    println!("{title}");
    println!("{}", "=".repeat(50));
    println!("Total listings checked: {}", stats.total);
    println!("  High confidence:   {}", stats.high);
    println!("  Medium confidence: {}", stats.medium);
    println!("  Low confidence:    {}", stats.low);
    if !stats.sources.is_empty() {
        println!("Sources searched: {}", stats.sources.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_lines_skip_blanks_and_comments() {
        let raw = "# leads\nhttps://ebay.com/itm/1\n\n  https://etsy.com/listing/2  \n# done\n";
        let urls = parse_url_lines(raw);
        assert_eq!(
            urls,
            vec![
                "https://ebay.com/itm/1".to_string(),
                "https://etsy.com/listing/2".to_string(),
            ]
        );
    }

    #[test]
    fn url_lines_keep_invalid_urls_for_warning() {
        let raw = "ebay.com/itm/1\nhttps://etsy.com/listing/2\n";
        let urls = parse_url_lines(raw);
        assert_eq!(urls.len(), 2);
    }
}
