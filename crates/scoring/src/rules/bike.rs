//! Rule table for the Trek Allant+ 7S profile: Class 3 (28 mph), 625Wh
//! battery, large frame, ideally with a range extender. The Allant+ 7
//! (no S) is the Class 1 model and is penalized, as are Class 1 and 500Wh
//! mentions generally.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::{Family, Rule, Trigger};
use crate::weights::BikeWeights;

static ALLANT_7: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"allant\+?\s*7|allant\s+plus\s+7").expect("compiled-in rule pattern"));

/// True when the text mentions "Allant+ 7" where the 7 is not followed by an
/// "s". The regex crate has no lookarounds, so the `7(?!\s*s)` check is done
/// by inspecting the text after each match position.
fn allant_7_without_s(text: &str) -> bool {
    ALLANT_7.find_iter(text).any(|m| {
        let rest = text[m.end()..].trim_start();
        !rest.starts_with('s')
    })
}

pub(crate) fn families(w: &BikeWeights) -> Vec<Family> {
    vec![
        // Model identification, in strict precedence: exact 7S, then the
        // wrong-model penalty, then a generic Allant+ mention.
        Family {
            rules: vec![
                Rule {
                    trigger: Trigger::patterns(&[
                        r"allant\+?\s*7s",
                        r"allant\s+plus\s+7s",
                        r"allant\+\s*7\s*s",
                    ]),
                    points: w.model_allant_7s,
                    factor: "model: Allant+ 7S",
                },
                Rule {
                    trigger: Trigger::Predicate(allant_7_without_s),
                    points: w.model_allant_7_penalty,
                    factor: "model: Allant+ 7 (WRONG - Class 1)",
                },
                Rule {
                    trigger: Trigger::AnyOf(&["allant+", "allant plus", "allant +"]),
                    points: w.model_allant_plus,
                    factor: "model: Allant+ (generic)",
                },
            ],
        },
        Family {
            rules: vec![
                Rule {
                    trigger: Trigger::patterns(&[
                        r"class\s*3",
                        r"28\s*mph",
                        r"28mph",
                        r"speed\s+pedelec",
                    ]),
                    points: w.class_3,
                    factor: "class: 3 (28 mph)",
                },
                Rule {
                    trigger: Trigger::patterns(&[r"class\s*1", r"20\s*mph", r"20mph"]),
                    points: w.class_1_penalty,
                    factor: "class: 1 (20 mph) - REJECT",
                },
            ],
        },
        Family {
            rules: vec![
                Rule {
                    trigger: Trigger::AnyOf(&["625wh", "625 wh"]),
                    points: w.battery_625wh,
                    factor: "battery: 625Wh",
                },
                Rule {
                    trigger: Trigger::AnyOf(&["500wh", "500 wh"]),
                    points: w.battery_500wh_penalty,
                    factor: "battery: 500Wh (insufficient)",
                },
            ],
        },
        Family {
            rules: vec![Rule {
                trigger: Trigger::patterns(&[
                    r"range\s*extender",
                    r"second\s*battery",
                    r"dual\s*battery",
                    r"2\s*batteries",
                    r"two\s*batteries",
                    r"extra\s*battery",
                    r"additional\s*battery",
                ]),
                points: w.range_extender,
                factor: "range extender",
            }],
        },
        Family {
            rules: vec![Rule {
                trigger: Trigger::patterns(&[
                    r"\blarge\b",
                    r"size[:\s]+l(?:\b|\s|$|,)",
                    r"frame[:\s]+l(?:\b|\s|$|,)",
                    r"size[:\s]+large",
                    r"\(l\)",
                    r"5[5-8]\s*cm",
                ]),
                points: w.frame_large,
                factor: "frame: Large",
            }],
        },
    ]
}
