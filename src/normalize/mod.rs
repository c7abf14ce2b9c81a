pub mod probability;
pub mod snapshot;

pub use snapshot::{normalize_snapshot, summarize_sports};
