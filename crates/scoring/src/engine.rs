use regex::Regex;

use crate::models::{Confidence, Listing, ScoredListing};
use crate::rules;
use crate::weights::{BikeWeights, RingWeights};

/// What makes a single rule fire against the lowercased analysis text.
///
/// Most rules are plain substring or regex alternations; the two checks the
/// regex crate cannot express directly (gold-but-not-white/rose, and
/// "Allant+ 7" not followed by "s") are function predicates.
pub(crate) enum Trigger {
    AnyOf(&'static [&'static str]),
    Patterns(Vec<Regex>),
    Predicate(fn(&str) -> bool),
}

impl Trigger {
    pub(crate) fn patterns(raw: &[&str]) -> Self {
        let compiled = raw
            .iter()
            .map(|p| Regex::new(p).expect("compiled-in rule pattern"))
            .collect();
        Trigger::Patterns(compiled)
    }

    fn matches(&self, text: &str) -> bool {
        match self {
            Trigger::AnyOf(needles) => needles.iter().any(|n| text.contains(n)),
            Trigger::Patterns(regexes) => regexes.iter().any(|r| r.is_match(text)),
            Trigger::Predicate(f) => f(text),
        }
    }
}

pub(crate) struct Rule {
    pub trigger: Trigger,
    pub points: i32,
    pub factor: &'static str,
}

/// Mutually exclusive rules in decreasing specificity: the first match wins,
/// contributes its points and exactly one factor, and ends the family.
pub(crate) struct Family {
    pub rules: Vec<Rule>,
}

pub const HIGH_THRESHOLD: i32 = 70;
pub const MEDIUM_THRESHOLD: i32 = 40;

pub fn classify(score: i32) -> Confidence {
    if score >= HIGH_THRESHOLD {
        Confidence::High
    } else if score >= MEDIUM_THRESHOLD {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Keyword-rule evaluator over free-text listing content.
///
/// One engine, parameterized by an ordered rule table; the ring and bike
/// profiles are just different tables over their own weight structs. Pure and
/// deterministic: no I/O, no shared mutable state, safe to share across a
/// whole pipeline run.
pub struct RelevanceScorer {
    families: Vec<Family>,
}

impl RelevanceScorer {
    /// Scorer for the antique-ring profile.
    pub fn ring(weights: RingWeights) -> Self {
        Self {
            families: rules::ring::families(&weights),
        }
    }

    /// Scorer for the Trek Allant+ 7S profile.
    pub fn bike(weights: BikeWeights) -> Self {
        Self {
            families: rules::bike::families(&weights),
        }
    }

    pub fn score(&self, listing: &Listing) -> ScoredListing {
        // Title and description are analyzed as one lowercased string; all
        // rule patterns assume lowercase input.
        let text = format!(
            "{} {}",
            listing.title,
            listing.description.as_deref().unwrap_or("")
        )
        .to_lowercase();

        let mut score = 0i32;
        let mut factors: Vec<String> = Vec::new();

        for family in &self.families {
            for rule in &family.rules {
                if rule.trigger.matches(&text) {
                    score += rule.points;
                    factors.push(rule.factor.to_string());
                    break;
                }
            }
        }

        let score = score.clamp(0, 100);

        ScoredListing {
            url: listing.url.clone(),
            source: listing.source.clone(),
            title: listing.title.clone(),
            price: listing.price.clone(),
            score,
            confidence: classify(score),
            matched_factors: factors,
            description: listing.description.clone(),
            image_url: listing.image_url.clone(),
        }
    }
}
