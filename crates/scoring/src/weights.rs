use serde::{Deserialize, Serialize};

/// Point values for the antique-ring match profile. All positive; out-of-range
/// totals are handled by the engine's clamp step, not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingWeights {
    pub metal_yellow_gold: i32,
    pub metal_10k: i32,
    pub stone_amethyst: i32,
    pub stone_purple: i32,
    pub pearl_seed: i32,
    pub pearl_any: i32,
    pub design_swirl: i32,
    pub design_floral: i32,
    pub era_victorian: i32,
    pub size_exact: i32,
    pub size_close: i32,
}

impl Default for RingWeights {
    fn default() -> Self {
        Self {
            metal_yellow_gold: 20,
            metal_10k: 10,
            stone_amethyst: 25,
            stone_purple: 15,
            pearl_seed: 20,
            pearl_any: 10,
            design_swirl: 15,
            design_floral: 5,
            era_victorian: 10,
            size_exact: 10,
            size_close: 5,
        }
    }
}

/// Point values for the Trek Allant+ 7S match profile. Includes negative
/// penalties for the wrong model, wrong class and undersized battery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BikeWeights {
    pub model_allant_7s: i32,
    pub model_allant_plus: i32,
    pub class_3: i32,
    pub battery_625wh: i32,
    pub range_extender: i32,
    pub frame_large: i32,
    pub class_1_penalty: i32,
    pub battery_500wh_penalty: i32,
    pub model_allant_7_penalty: i32,
}

impl Default for BikeWeights {
    fn default() -> Self {
        Self {
            model_allant_7s: 40,
            model_allant_plus: 20,
            class_3: 20,
            battery_625wh: 20,
            range_extender: 15,
            frame_large: 5,
            class_1_penalty: -50,
            battery_500wh_penalty: -20,
            model_allant_7_penalty: -40,
        }
    }
}
