use serde_json::Value;

/// Convert an American odds price to its implied probability.
///
/// Positive prices are underdogs: `100 / (price + 100)`.
/// Negative prices are favorites: `|price| / (|price| + 100)`.
/// Zero and non-finite prices have no implied probability.
///
/// The result still carries the bookmaker margin; probabilities across
/// the outcomes of one market will usually sum to more than 1.
pub fn implied_probability(price: f64) -> Option<f64> {
    if !price.is_finite() || price == 0.0 {
        return None;
    }

    if price > 0.0 {
        Some(100.0 / (price + 100.0))
    } else {
        let stake = price.abs();
        Some(stake / (stake + 100.0))
    }
}

/// Implied probability of a price taken straight from an upstream payload
pub fn american_to_implied_prob(price: &Value) -> Option<f64> {
    to_number(price).and_then(implied_probability)
}

/// Numeric coercion: numbers as-is, trimmed numeric strings, booleans as
/// 1/0, null and blank strings as 0. Arrays and objects are not numbers.
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_underdog_price() {
        assert_eq!(american_to_implied_prob(&json!(150)), Some(0.4));
        assert_eq!(implied_probability(100.0), Some(0.5));
    }

    #[test]
    fn test_favorite_price() {
        let p = american_to_implied_prob(&json!(-200)).unwrap();
        assert!((p - 0.6667).abs() < 0.0001);
        assert_eq!(implied_probability(-100.0), Some(0.5));
    }

    #[test]
    fn test_invalid_prices() {
        assert_eq!(american_to_implied_prob(&json!("abc")), None);
        assert_eq!(american_to_implied_prob(&json!(0)), None);
        assert_eq!(american_to_implied_prob(&json!(null)), None);
        assert_eq!(american_to_implied_prob(&json!("")), None);
        assert_eq!(american_to_implied_prob(&json!([150])), None);
        assert_eq!(american_to_implied_prob(&json!({ "price": 150 })), None);
        assert_eq!(implied_probability(f64::NAN), None);
        assert_eq!(implied_probability(f64::INFINITY), None);
    }

    #[test]
    fn test_numeric_strings_coerced() {
        assert_eq!(american_to_implied_prob(&json!(" 150 ")), Some(0.4));
        assert_eq!(american_to_implied_prob(&json!("+150")), Some(0.4));
        assert_eq!(american_to_implied_prob(&json!("-100")), Some(0.5));
        assert_eq!(american_to_implied_prob(&json!("Infinity")), None);
    }

    #[test]
    fn test_matches_formula() {
        for price in [101.0, 125.0, 250.0, 1000.0, 37.5] {
            assert_eq!(implied_probability(price), Some(100.0 / (price + 100.0)));
            assert_eq!(implied_probability(-price), Some(price / (price + 100.0)));
        }
    }

    #[test]
    fn test_monotonic() {
        let underdogs: Vec<f64> = [100.0, 150.0, 300.0, 1200.0]
            .iter()
            .map(|p| implied_probability(*p).unwrap())
            .collect();
        assert!(underdogs.windows(2).all(|w| w[0] > w[1]));

        // More negative favorite prices mean a likelier outcome
        let favorites: Vec<f64> = [-100.0, -150.0, -300.0, -1200.0]
            .iter()
            .map(|p| implied_probability(*p).unwrap())
            .collect();
        assert!(favorites.windows(2).all(|w| w[0] < w[1]));
    }
}
