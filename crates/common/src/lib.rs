pub mod error;

pub use error::{ScoutError, ScoutResult};
