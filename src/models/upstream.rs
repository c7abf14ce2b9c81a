use serde::Serialize;
use serde_json::Value;

/// Outcome of a single upstream call
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamResult {
    /// True when the upstream status is outside the 2xx range
    pub error: bool,

    pub meta: UpstreamMeta,

    pub data: UpstreamBody,
}

/// Status and rate-limit counters reported by the upstream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpstreamMeta {
    /// Raw upstream HTTP status
    pub status: u16,

    /// `x-requests-remaining` header
    pub remaining: Option<String>,

    /// `x-requests-used` header
    pub used: Option<String>,
}

/// Upstream body: parsed JSON, or the raw text when it is not JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpstreamBody {
    Json(Value),
    Raw { raw: String },
}

impl UpstreamBody {
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => UpstreamBody::Json(value),
            Err(_) => UpstreamBody::Raw { raw: text },
        }
    }

    /// JSON view of the body as it appears on the wire
    pub fn into_value(self) -> Value {
        match self {
            UpstreamBody::Json(value) => value,
            UpstreamBody::Raw { raw } => serde_json::json!({ "raw": raw }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_json_wrapped_as_raw() {
        let body = UpstreamBody::from_text("rate limited".to_string());
        assert_eq!(
            body,
            UpstreamBody::Raw {
                raw: "rate limited".to_string()
            }
        );
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "raw": "rate limited" }));
    }

    #[test]
    fn test_empty_body_is_raw() {
        let body = UpstreamBody::from_text(String::new());
        assert_eq!(body.into_value(), json!({ "raw": "" }));
    }

    #[test]
    fn test_result_serializes_envelope() {
        let result = UpstreamResult {
            error: true,
            meta: UpstreamMeta {
                status: 401,
                remaining: Some("0".to_string()),
                used: None,
            },
            data: UpstreamBody::from_text(r#"{"message":"bad key"}"#.to_string()),
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "error": true,
                "meta": { "status": 401, "remaining": "0", "used": null },
                "data": { "message": "bad key" }
            })
        );
    }
}
