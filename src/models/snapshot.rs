use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized odds payload: one entry per upstream event, or the
/// upstream value untouched when it was not an event list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Snapshot {
    Events(Vec<EventSnapshot>),
    Passthrough(Value),
}

/// A single event with every bookmaker's markets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSnapshot {
    /// Upstream event id, passed through
    pub id: Value,
    pub commence_time: Value,
    pub home_team: Value,
    pub away_team: Value,
    pub bookmakers: Vec<BookmakerSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmakerSnapshot {
    pub key: Value,
    pub title: Value,
    pub last_update: Value,
    pub markets: Vec<MarketSnapshot>,
}

/// A market such as `h2h` (moneyline) or `totals`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSnapshot {
    pub key: Value,
    pub outcomes: Vec<OutcomeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeSnapshot {
    pub name: Value,

    /// Price as quoted upstream
    pub price: Value,

    /// Break-even probability of `price`, not de-vigged
    #[serde(rename = "impliedProb")]
    pub implied_prob: Option<f64>,

    /// Line for totals/spreads; null for moneyline
    pub point: Value,
}

/// Entry of the `/sports` listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SportSummary {
    pub key: Value,
    pub title: Value,
    pub group: Value,
    pub active: Value,
}
