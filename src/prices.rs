//! USD price extraction from Scryfall printings

use crate::scryfall::Printing;
use serde::Serialize;
use std::collections::BTreeMap;

/// USD-denominated prices of a single printing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoints {
    pub id: String,
    pub name: String,
    pub set: Option<String>,
    pub collector_number: Option<String>,
    pub prices: BTreeMap<String, Option<String>>,
}

impl PricePoints {
    /// Parsed price for a key. Missing, null and unparseable all give `None`.
    pub fn price(&self, key: &str) -> Option<f64> {
        self.prices
            .get(key)?
            .as_deref()?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

/// Keep only the price keys containing "usd" (usd, usd_foil, usd_etched, ...)
pub fn extract(printing: &Printing) -> PricePoints {
    let prices = printing
        .prices
        .iter()
        .filter(|(key, _)| key.contains("usd"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    PricePoints {
        id: printing.id.clone(),
        name: printing.name.clone(),
        set: printing.set.clone(),
        collector_number: printing.collector_number.clone(),
        prices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printing(prices: serde_json::Value) -> Printing {
        serde_json::from_value(serde_json::json!({
            "id": "abc",
            "name": "Sol Ring",
            "set": "c21",
            "collector_number": "263",
            "prices": prices
        }))
        .unwrap()
    }

    #[test]
    fn extract_keeps_only_usd_keys() {
        let p = printing(serde_json::json!({
            "usd": "1.50",
            "usd_foil": null,
            "usd_etched": "7.00",
            "eur": "1.20",
            "eur_foil": "2.00",
            "tix": "0.05"
        }));

        let points = extract(&p);
        let keys: Vec<&str> = points.prices.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["usd", "usd_etched", "usd_foil"]);
        assert_eq!(points.id, "abc");
        assert_eq!(points.name, "Sol Ring");
    }

    #[test]
    fn extract_tolerates_new_usd_keys() {
        let p = printing(serde_json::json!({ "usd_glossy": "3.00", "eur": "1.00" }));
        let points = extract(&p);
        assert_eq!(points.price("usd_glossy"), Some(3.0));
        assert!(!points.prices.contains_key("eur"));
    }

    #[test]
    fn extract_is_idempotent() {
        let p = printing(serde_json::json!({ "usd": "1.00", "usd_foil": "2.00" }));
        assert_eq!(extract(&p), extract(&p));
    }

    #[test]
    fn price_handles_null_missing_and_garbage() {
        let p = printing(serde_json::json!({ "usd": null, "usd_foil": "n/a" }));
        let points = extract(&p);
        assert_eq!(points.price("usd"), None);
        assert_eq!(points.price("usd_foil"), None);
        assert_eq!(points.price("usd_etched"), None);
    }

    #[test]
    fn price_rejects_non_finite_values() {
        let p = printing(serde_json::json!({ "usd": "inf", "usd_foil": "NaN", "usd_etched": "2.00" }));
        let points = extract(&p);
        assert_eq!(points.price("usd"), None);
        assert_eq!(points.price("usd_foil"), None);
        assert_eq!(points.price("usd_etched"), Some(2.0));
    }
}
