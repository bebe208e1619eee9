//! Scryfall API client for name resolution and print listings
//!
//! Uses async reqwest. The base URL is configurable so tests can point the
//! client at a mock server.

use crate::error::{ReconcileError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";
pub const DEFAULT_USER_AGENT: &str = "D2D-Automations-CardReconciler/1.0";
/// Upper bound on pages followed for one card's printings
pub const MAX_PRINT_PAGES: usize = 50;

/// Canonical card returned by a fuzzy name search
#[derive(Debug, Deserialize, Clone)]
pub struct CardIdentity {
    pub id: String,
    pub name: String,
    pub prints_search_uri: String,
    #[serde(default)]
    pub set: Option<String>,
    #[serde(default)]
    pub collector_number: Option<String>,
}

/// One specific edition of a card
#[derive(Debug, Deserialize, Clone)]
pub struct Printing {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub set: Option<String>,
    #[serde(default)]
    pub collector_number: Option<String>,
    /// Every price Scryfall lists (usd, usd_foil, eur, tix, ...)
    #[serde(default)]
    pub prices: BTreeMap<String, Option<String>>,
}

/// One page of a Scryfall list response
#[derive(Debug, Deserialize)]
struct PrintsPage {
    data: Vec<Printing>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_page: Option<String>,
}

/// Returns true if the body is a Scryfall error object
fn is_error_payload(body: &serde_json::Value) -> bool {
    body.get("error").is_some() || body.get("object").and_then(|o| o.as_str()) == Some("error")
}

pub struct ScryfallClient {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl ScryfallClient {
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    async fn get_json(&self, url: &str) -> Result<(reqwest::StatusCode, serde_json::Value)> {
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text)?;
        Ok((status, body))
    }

    /// Resolve a free-text name to a card (fuzzy search).
    ///
    /// Returns `Ok(None)` when Scryfall reports no match. Scryfall may answer
    /// with a 404 or with a 200 carrying an error object; both mean not found.
    pub async fn resolve_by_name(&self, name: &str) -> Result<Option<CardIdentity>> {
        let url = format!(
            "{}/cards/named?fuzzy={}",
            self.base_url,
            urlencoding::encode(name)
        );

        let (status, body) = self.get_json(&url).await?;

        if is_error_payload(&body) {
            log::debug!(
                "No match for '{}': {}",
                name,
                body.get("details").and_then(|d| d.as_str()).unwrap_or("no details")
            );
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ReconcileError::HttpStatus(status));
        }

        Ok(Some(serde_json::from_value(body)?))
    }

    /// Fetch every printing behind a `prints_search_uri`, following pagination.
    /// Order is whatever Scryfall returns. A page link seen twice, or more than
    /// `MAX_PRINT_PAGES` pages, is an error.
    pub async fn list_printings(&self, prints_uri: &str) -> Result<Vec<Printing>> {
        let mut printings = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(prints_uri.to_string());

        while let Some(url) = next.take() {
            if visited.len() >= MAX_PRINT_PAGES || !visited.insert(url.clone()) {
                return Err(ReconcileError::Pagination(url));
            }

            let (status, body) = self.get_json(&url).await?;
            if !status.is_success() {
                return Err(ReconcileError::HttpStatus(status));
            }

            let page: PrintsPage = serde_json::from_value(body)?;
            printings.extend(page.data);

            if page.has_more {
                next = page.next_page;
            }
        }

        Ok(printings)
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
