pub mod query;
pub mod snapshot;
pub mod upstream;

pub use query::{EventsParams, OddsQuery, SnapshotParams};
pub use snapshot::{
    BookmakerSnapshot, EventSnapshot, MarketSnapshot, OutcomeSnapshot, Snapshot, SportSummary,
};
pub use upstream::{UpstreamBody, UpstreamMeta, UpstreamResult};
