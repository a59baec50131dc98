pub mod dedup;
pub mod log;
pub mod snapshot;
pub mod summary;

pub use dedup::DedupStore;
pub use log::{LogEntry, SearchLog, SearchStats};
pub use snapshot::SnapshotStore;
