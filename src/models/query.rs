use serde::Serialize;

const DEFAULT_REGIONS: &str = "us";
const DEFAULT_MARKETS: &str = "h2h,totals";
const DEFAULT_ODDS_FORMAT: &str = "american";

/// Query string accepted by `/snapshot`, exactly as the client sent it
#[derive(Debug, Default)]
pub struct SnapshotParams {
    pub sport: Option<String>,
    pub regions: Option<String>,
    pub markets: Option<String>,
    pub odds_format: Option<String>,
    pub bookmakers: Option<String>,
    pub event_id: Option<String>,
    pub event_ids: Option<String>,
}

/// Query string accepted by `/events`
#[derive(Debug, Default)]
pub struct EventsParams {
    pub sport: Option<String>,
}

impl SnapshotParams {
    /// Collect known keys from decoded query pairs; the first occurrence of a key wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "sport" => &mut params.sport,
                "regions" => &mut params.regions,
                "markets" => &mut params.markets,
                "oddsFormat" => &mut params.odds_format,
                "bookmakers" => &mut params.bookmakers,
                "eventId" => &mut params.event_id,
                "eventIds" => &mut params.event_ids,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl EventsParams {
    /// Collect known keys from decoded query pairs; the first occurrence of a key wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            sport: pairs
                .into_iter()
                .find(|(name, _)| name == "sport")
                .map(|(_, value)| value),
        }
    }

    /// Sport to list events for
    pub fn sport_or(self, default_sport: &str) -> String {
        present(self.sport).unwrap_or_else(|| default_sport.to_string())
    }
}

/// Odds request with defaults applied, echoed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsQuery {
    pub sport: String,
    pub regions: String,
    /// Comma-separated market keys (e.g. "h2h,totals")
    pub markets: String,
    pub odds_format: String,
    /// Comma-separated bookmaker keys
    pub bookmakers: Option<String>,
    /// Selects the per-event endpoint when set
    pub event_id: Option<String>,
    /// Comma-separated event ids, forwarded to the sport-wide endpoint only
    pub event_ids: Option<String>,
}

impl OddsQuery {
    /// Resolve raw params, falling back to defaults for absent or empty values
    pub fn resolve(params: SnapshotParams, default_sport: &str) -> Self {
        Self {
            sport: present(params.sport).unwrap_or_else(|| default_sport.to_string()),
            regions: present(params.regions).unwrap_or_else(|| DEFAULT_REGIONS.to_string()),
            markets: present(params.markets).unwrap_or_else(|| DEFAULT_MARKETS.to_string()),
            odds_format: present(params.odds_format)
                .unwrap_or_else(|| DEFAULT_ODDS_FORMAT.to_string()),
            bookmakers: present(params.bookmakers),
            event_id: present(params.event_id),
            event_ids: present(params.event_ids),
        }
    }

    /// Upstream endpoint path: per-event odds when `event_id` is set, else sport-wide odds
    pub fn endpoint(&self) -> String {
        match &self.event_id {
            Some(event_id) => format!(
                "/sports/{}/events/{}/odds",
                urlencoding::encode(&self.sport),
                urlencoding::encode(event_id)
            ),
            None => format!("/sports/{}/odds", urlencoding::encode(&self.sport)),
        }
    }

    /// Query parameters forwarded upstream, in wire order
    pub fn upstream_params(&self) -> Vec<(&'static str, Option<&str>)> {
        let event_ids = match self.event_id {
            Some(_) => None,
            None => self.event_ids.as_deref(),
        };

        vec![
            ("regions", Some(self.regions.as_str())),
            ("markets", Some(self.markets.as_str())),
            ("oddsFormat", Some(self.odds_format.as_str())),
            ("bookmakers", self.bookmakers.as_deref()),
            ("eventIds", event_ids),
        ]
    }
}

/// Treat an empty value as absent
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
