//! Report buckets and the JSON file they end up in

use crate::error::Result;
use crate::valuation::Outcome;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A card compared against the market
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub name: String,
    pub bought_price: f64,
    pub lowest_price: f64,
    pub owned_price: f64,
    /// bought - lowest, two decimals
    pub difference: String,
    /// difference relative to lowest, two decimals with trailing '%'
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEntry {
    pub name: String,
    pub message: String,
}

impl ErrorEntry {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub above_market: Vec<Valuation>,
    pub below_market: Vec<Valuation>,
    pub errors: Vec<ErrorEntry>,
}

impl Report {
    /// Append an outcome to its bucket, keeping arrival order
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::AboveMarket(v) => self.above_market.push(v),
            Outcome::BelowMarket(v) => self.below_market.push(v),
            Outcome::Error(e) => self.errors.push(e),
        }
    }

    pub fn len(&self) -> usize {
        self.above_market.len() + self.below_market.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// File name for a run finished at `timestamp_ms`
    pub fn file_name(timestamp_ms: i64) -> String {
        format!("card_prices_{}.json", timestamp_ms)
    }

    /// Write the report as pretty JSON into `dir`, named after the current time.
    /// Creates `dir` if needed and returns the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let timestamp_ms = chrono::Utc::now().timestamp_millis();
        self.write_as(dir, &Self::file_name(timestamp_ms))
    }

    fn write_as(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let path = dir.join(file_name);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        log::debug!("Wrote report with {} entries to {}", self.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valuation(name: &str) -> Valuation {
        Valuation {
            name: name.to_string(),
            bought_price: 5.0,
            lowest_price: 2.0,
            owned_price: 2.5,
            difference: "3.00".to_string(),
            percentage: "150.00%".to_string(),
        }
    }

    #[test]
    fn record_sorts_into_buckets_in_order() {
        let mut report = Report::default();
        report.record(Outcome::BelowMarket(valuation("b1")));
        report.record(Outcome::AboveMarket(valuation("a1")));
        report.record(Outcome::Error(ErrorEntry::new("e1", "boom")));
        report.record(Outcome::BelowMarket(valuation("b2")));

        assert_eq!(report.len(), 4);
        assert_eq!(report.above_market.len(), 1);
        let below: Vec<&str> = report.below_market.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(below, vec!["b1", "b2"]);
        assert_eq!(report.errors[0].message, "boom");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut report = Report::default();
        report.record(Outcome::AboveMarket(valuation("Lightning Bolt")));

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("aboveMarket").is_some());
        assert!(json.get("belowMarket").is_some());
        assert!(json.get("errors").is_some());

        let entry = &json["aboveMarket"][0];
        assert_eq!(entry["name"], "Lightning Bolt");
        assert_eq!(entry["boughtPrice"], 5.0);
        assert_eq!(entry["lowestPrice"], 2.0);
        assert_eq!(entry["difference"], "3.00");
        assert_eq!(entry["percentage"], "150.00%");
    }

    #[test]
    fn file_name_embeds_timestamp() {
        assert_eq!(Report::file_name(1700000000123), "card_prices_1700000000123.json");
    }

    #[test]
    fn write_to_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("output");

        let mut report = Report::default();
        report.record(Outcome::Error(ErrorEntry::new("Sol Ring", "Owned Price not found")));

        let path = report.write_to(&out_dir).unwrap();
        assert!(path.starts_with(&out_dir));
        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("card_prices_"));
        assert!(file_name.ends_with(".json"));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["errors"][0]["name"], "Sol Ring");
        assert_eq!(written["aboveMarket"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn write_to_fails_when_dir_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let report = Report::default();
        assert!(report.write_to(file.path()).is_err());
    }
}
