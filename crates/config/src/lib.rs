pub mod settings;
pub mod tracing_init;

pub use settings::{Profile, Settings};
pub use tracing_init::init_tracing;
