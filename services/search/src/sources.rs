//! Marketplace detection for bare URLs: maps a URL to the marketplace it
//! belongs to and decides whether it looks like a product listing page.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

pub struct Marketplace {
    pub name: &'static str,
    domains: Vec<Regex>,
    listing_paths: Vec<Regex>,
    pub priority: u8,
}

impl Marketplace {
    fn new(name: &'static str, domains: &[&str], listing_paths: &[&str], priority: u8) -> Self {
        let compile = |raw: &[&str]| -> Vec<Regex> {
            raw.iter()
                .map(|p| Regex::new(p).expect("compiled-in marketplace pattern"))
                .collect()
        };
        Self {
            name,
            domains: compile(domains),
            listing_paths: compile(listing_paths),
            priority,
        }
    }

    /// A URL with no listing patterns configured is assumed to be a listing.
    pub fn looks_like_listing(&self, url: &str) -> bool {
        let lower = url.to_lowercase();
        self.listing_paths.is_empty() || self.listing_paths.iter().any(|r| r.is_match(&lower))
    }
}

static MARKETPLACES: Lazy<Vec<Marketplace>> = Lazy::new(|| {
    vec![
        Marketplace::new("ebay", &[r"ebay\.(com|co\.uk|de|fr|ca|au)"], &[r"/itm/", r"/p/"], 2),
        Marketplace::new("etsy", &[r"etsy\.com"], &[r"/listing/"], 2),
        Marketplace::new("shopgoodwill", &[r"shopgoodwill\.com"], &[r"/item/"], 2),
        Marketplace::new("poshmark", &[r"poshmark\.com"], &[r"/listing/"], 2),
        Marketplace::new("mercari", &[r"mercari\.com"], &[r"/item/", r"/product/"], 2),
        Marketplace::new("rubylane", &[r"rubylane\.com"], &[r"/item/"], 2),
        Marketplace::new("craigslist", &[r"craigslist\.org"], &[r"\.html$"], 1),
        Marketplace::new("facebook", &[r"facebook\.com/marketplace"], &[r"/item/"], 2),
        Marketplace::new("offerup", &[r"offerup\.com"], &[r"/item/"], 1),
        Marketplace::new("depop", &[r"depop\.com"], &[r"/products/"], 1),
        Marketplace::new("1stdibs", &[r"1stdibs\.com"], &[r"/jewelry/", r"/id-"], 2),
        Marketplace::new("chairish", &[r"chairish\.com"], &[r"/product/"], 1),
        Marketplace::new("liveauctioneers", &[r"liveauctioneers\.com"], &[r"/item/"], 2),
        Marketplace::new("pinkbike", &[r"pinkbike\.com"], &[r"/buysell/"], 2),
    ]
});

/// First marketplace whose domain pattern matches either the URL's host or
/// the full URL.
pub fn detect(url: &str) -> Option<&'static Marketplace> {
    let lower = url.to_lowercase();
    let host = Url::parse(&lower)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_default();

    MARKETPLACES
        .iter()
        .find(|mp| mp.domains.iter().any(|r| r.is_match(&host) || r.is_match(&lower)))
}

pub fn detect_source(url: &str) -> Option<&'static str> {
    detect(url).map(|mp| mp.name)
}
