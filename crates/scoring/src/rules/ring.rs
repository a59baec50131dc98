//! Rule table for the antique-ring profile: a yellow gold amethyst and seed
//! pearl ring with a swirl design, Victorian era, size 7.

use crate::engine::{Family, Rule, Trigger};
use crate::weights::RingWeights;

fn gold_but_not_white_or_rose(text: &str) -> bool {
    text.contains("yellow gold")
        || (text.contains("gold") && !text.contains("white") && !text.contains("rose"))
}

pub(crate) fn families(w: &RingWeights) -> Vec<Family> {
    vec![
        // Metal color and karat are independent families, both evaluated
        // unconditionally.
        Family {
            rules: vec![Rule {
                trigger: Trigger::Predicate(gold_but_not_white_or_rose),
                points: w.metal_yellow_gold,
                factor: "gold",
            }],
        },
        Family {
            rules: vec![
                Rule {
                    trigger: Trigger::AnyOf(&["10k", "10 karat", "10kt"]),
                    points: w.metal_10k,
                    factor: "10k",
                },
                // Acceptable alternative karats get half credit.
                Rule {
                    trigger: Trigger::AnyOf(&["14k", "9k"]),
                    points: w.metal_10k / 2,
                    factor: "gold karat",
                },
            ],
        },
        Family {
            rules: vec![
                Rule {
                    trigger: Trigger::AnyOf(&["amethyst"]),
                    points: w.stone_amethyst,
                    factor: "amethyst",
                },
                Rule {
                    trigger: Trigger::AnyOf(&["purple", "magenta", "raspberry"]),
                    points: w.stone_purple,
                    factor: "purple stone",
                },
            ],
        },
        Family {
            rules: vec![
                Rule {
                    trigger: Trigger::AnyOf(&["seed pearl"]),
                    points: w.pearl_seed,
                    factor: "seed pearl",
                },
                Rule {
                    trigger: Trigger::AnyOf(&["pearl"]),
                    points: w.pearl_any,
                    factor: "pearl",
                },
            ],
        },
        Family {
            rules: vec![
                Rule {
                    trigger: Trigger::AnyOf(&[
                        "swirl", "infinity", "figure-8", "figure 8", "flowing", "cluster",
                    ]),
                    points: w.design_swirl,
                    factor: "swirl design",
                },
                Rule {
                    trigger: Trigger::AnyOf(&["floral", "flower"]),
                    points: w.design_floral,
                    factor: "floral design",
                },
            ],
        },
        Family {
            rules: vec![Rule {
                trigger: Trigger::AnyOf(&[
                    "victorian",
                    "edwardian",
                    "antique",
                    "vintage",
                    "art nouveau",
                    "estate",
                ]),
                points: w.era_victorian,
                factor: "vintage era",
            }],
        },
        Family {
            rules: vec![
                Rule {
                    trigger: Trigger::AnyOf(&["size 7", "size: 7", "sz 7"]),
                    points: w.size_exact,
                    factor: "size 7",
                },
                Rule {
                    trigger: Trigger::AnyOf(&[
                        "size 6", "sz 6", "size 6.5", "sz 6.5", "size 7.5", "sz 7.5", "size 8",
                        "sz 8",
                    ]),
                    points: w.size_close,
                    factor: "size close",
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use crate::engine::RelevanceScorer;
    use crate::models::{Confidence, Listing};
    use crate::weights::RingWeights;

    fn score(title: &str, description: Option<&str>) -> crate::models::ScoredListing {
        let scorer = RelevanceScorer::ring(RingWeights::default());
        scorer.score(&Listing {
            url: "https://example.test/ring".to_string(),
            source: "etsy".to_string(),
            title: title.to_string(),
            price: None,
            description: description.map(|s| s.to_string()),
            image_url: None,
        })
    }

    #[test]
    fn high_confidence_match() {
        let result = score(
            "10K Yellow Gold Amethyst Seed Pearl Victorian Ring Size 7",
            Some("Beautiful antique swirl design ring"),
        );
        assert_eq!(result.confidence, Confidence::High);
        assert!(result.score >= 70);
        for factor in ["gold", "10k", "amethyst", "seed pearl", "swirl design", "vintage era", "size 7"] {
            assert!(
                result.matched_factors.iter().any(|f| f == factor),
                "missing factor {factor:?} in {:?}",
                result.matched_factors
            );
        }
    }

    #[test]
    fn medium_confidence_match() {
        let result = score("Vintage Gold Amethyst Ring", None);
        assert_eq!(result.confidence, Confidence::Medium);
        assert!((40..70).contains(&result.score), "score={}", result.score);
    }

    #[test]
    fn low_confidence_match() {
        let result = score("Silver Ring with Blue Stone", Some("Modern design"));
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.score < 40);
    }

    #[test]
    fn yellow_gold_detected() {
        let result = score("Yellow Gold Ring", None);
        assert!(result.matched_factors.iter().any(|f| f == "gold"));
    }

    #[test]
    fn white_gold_not_scored_as_gold() {
        let result = score("White Gold Ring", None);
        assert!(!result.matched_factors.iter().any(|f| f == "gold"));
    }

    #[test]
    fn rose_gold_not_scored_as_gold() {
        let result = score("Rose Gold Ring", None);
        assert!(!result.matched_factors.iter().any(|f| f == "gold"));
    }

    #[test]
    fn karat_14k_gets_partial_credit() {
        let result = score("14K Ring", None);
        assert!(result.matched_factors.iter().any(|f| f == "gold karat"));
        // Half of metal_10k, integer division
        assert_eq!(result.score, 5);
    }

    #[test]
    fn karat_10k_beats_14k_fallback() {
        let result = score("10K and 14K mixed gold ring", None);
        assert!(result.matched_factors.iter().any(|f| f == "10k"));
        assert!(!result.matched_factors.iter().any(|f| f == "gold karat"));
    }

    #[test]
    fn amethyst_excludes_purple_stone() {
        let result = score("Purple Amethyst Ring", None);
        assert!(result.matched_factors.iter().any(|f| f == "amethyst"));
        assert!(!result.matched_factors.iter().any(|f| f == "purple stone"));
        // Stone family contributes only the amethyst points: 25 stone + 0 else
        assert_eq!(result.score, 25);
    }

    #[test]
    fn purple_alternative_when_no_amethyst() {
        let result = score("Ring with purple stone", None);
        assert!(result.matched_factors.iter().any(|f| f == "purple stone"));
    }

    #[test]
    fn seed_pearl_excludes_plain_pearl() {
        let result = score("Seed Pearl Ring", None);
        assert!(result.matched_factors.iter().any(|f| f == "seed pearl"));
        assert!(!result.matched_factors.iter().any(|f| f == "pearl"));
    }

    #[test]
    fn plain_pearl_when_no_seed_pearl() {
        let result = score("Pearl Ring", None);
        assert!(result.matched_factors.iter().any(|f| f == "pearl"));
    }

    #[test]
    fn swirl_family_beats_floral() {
        let result = score("Swirl flower ring", None);
        assert!(result.matched_factors.iter().any(|f| f == "swirl design"));
        assert!(!result.matched_factors.iter().any(|f| f == "floral design"));
    }

    #[test]
    fn era_keywords_detected() {
        for title in ["Victorian ring", "Edwardian band", "Estate jewelry ring", "Art Nouveau ring"] {
            let result = score(title, None);
            assert!(
                result.matched_factors.iter().any(|f| f == "vintage era"),
                "era not detected in {title:?}"
            );
        }
    }

    #[test]
    fn size_exact_detected() {
        let result = score("Gold ring sz 7", None);
        assert!(result.matched_factors.iter().any(|f| f == "size 7"));
    }

    #[test]
    fn size_close_detected() {
        let result = score("Gold ring size 6.5", None);
        assert!(result.matched_factors.iter().any(|f| f == "size close"));
        assert!(!result.matched_factors.iter().any(|f| f == "size 7"));
    }

    #[test]
    fn factors_follow_family_order() {
        let result = score(
            "10K Yellow Gold Amethyst Seed Pearl Victorian Swirl Ring Size 7",
            None,
        );
        assert_eq!(
            result.matched_factors,
            vec!["gold", "10k", "amethyst", "seed pearl", "swirl design", "vintage era", "size 7"]
        );
    }
}
