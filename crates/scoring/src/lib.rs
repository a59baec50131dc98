pub mod engine;
pub mod models;
mod rules;
pub mod weights;

pub use engine::{classify, RelevanceScorer};
pub use models::{Confidence, Listing, ScoredListing};
pub use weights::{BikeWeights, RingWeights};
