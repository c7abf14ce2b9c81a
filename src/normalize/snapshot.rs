use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::probability::american_to_implied_prob;
use crate::models::{
    BookmakerSnapshot, EventSnapshot, MarketSnapshot, OutcomeSnapshot, Snapshot, SportSummary,
};

/// Event as returned by the odds endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OddsEvent {
    id: Value,
    commence_time: Value,
    home_team: Value,
    away_team: Value,
    #[serde(deserialize_with = "lenient_list")]
    bookmakers: Vec<OddsBookmaker>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OddsBookmaker {
    key: Value,
    title: Value,
    last_update: Value,
    #[serde(deserialize_with = "lenient_list")]
    markets: Vec<OddsMarket>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OddsMarket {
    key: Value,
    #[serde(deserialize_with = "lenient_list")]
    outcomes: Vec<OddsOutcome>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OddsOutcome {
    name: Value,
    price: Value,
    point: Value,
}

/// Reshape an upstream odds payload into snapshots.
///
/// Anything other than a JSON array (error payloads, single objects) is
/// returned unchanged.
pub fn normalize_snapshot(raw: Value) -> Snapshot {
    match raw {
        Value::Array(events) => Snapshot::Events(
            events
                .into_iter()
                .map(|event| normalize_event(from_object(event)))
                .collect(),
        ),
        other => Snapshot::Passthrough(other),
    }
}

fn normalize_event(event: OddsEvent) -> EventSnapshot {
    EventSnapshot {
        id: event.id,
        commence_time: event.commence_time,
        home_team: event.home_team,
        away_team: event.away_team,
        bookmakers: event
            .bookmakers
            .into_iter()
            .map(|bookmaker| BookmakerSnapshot {
                key: bookmaker.key,
                title: bookmaker.title,
                last_update: bookmaker.last_update,
                markets: bookmaker.markets.into_iter().map(normalize_market).collect(),
            })
            .collect(),
    }
}

fn normalize_market(market: OddsMarket) -> MarketSnapshot {
    MarketSnapshot {
        key: market.key,
        outcomes: market
            .outcomes
            .into_iter()
            .map(|outcome| OutcomeSnapshot {
                implied_prob: american_to_implied_prob(&outcome.price),
                name: outcome.name,
                price: outcome.price,
                point: outcome.point,
            })
            .collect(),
    }
}

/// Project the `/sports` listing down to key, title, group and active
pub fn summarize_sports(raw: &Value) -> Vec<SportSummary> {
    match raw {
        Value::Array(sports) => sports
            .iter()
            .map(|sport| from_object(sport.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Decode a JSON object, yielding all-null fields for anything else
fn from_object<T: DeserializeOwned + Default>(value: Value) -> T {
    if value.is_object() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        T::default()
    }
}

/// A list field that may be missing, null, or not a list at all
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(from_object).collect(),
        _ => Vec::new(),
    })
}
