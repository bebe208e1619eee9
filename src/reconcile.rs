//! Batch driver: one card at a time, failures contained per card

use crate::config::Config;
use crate::error::Result;
use crate::models::OwnedCard;
use crate::prices::{extract, PricePoints};
use crate::rate_limit::RateLimiter;
use crate::report::Report;
use crate::scryfall::ScryfallClient;
use crate::valuation::{appraise, Outcome};

pub struct Reconciler {
    client: ScryfallClient,
    config: Config,
}

impl Reconciler {
    pub fn new(config: Config) -> Self {
        let client = ScryfallClient::new(&config.api_base_url, &config.user_agent);
        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve, fetch and classify a single card.
    /// `Ok(None)` means Scryfall doesn't know the name.
    pub async fn appraise_card(&self, card: &OwnedCard) -> Result<Option<Outcome>> {
        let Some(identity) = self.client.resolve_by_name(&card.name).await? else {
            log::warn!("Card not found: {}", card.name);
            return Ok(None);
        };

        log::info!("Card: {}, Scryfall ID: {}", card.name, identity.id);

        let printings = self
            .client
            .list_printings(&identity.prints_search_uri)
            .await?;
        let points: Vec<PricePoints> = printings.iter().map(extract).collect();

        let outcome = appraise(
            card,
            &identity.id,
            &points,
            self.config.match_strategy,
            self.config.markup,
        );

        if let Outcome::Error(entry) = &outcome {
            log::warn!("{} ({}): {}", card.name, card.finish.as_str(), entry.message);
        }

        Ok(Some(outcome))
    }

    /// Run every card in order and collect the outcomes.
    /// Errors for one card are logged and never stop the batch.
    pub async fn run(&self, cards: &[OwnedCard]) -> Report {
        let mut limiter = RateLimiter::new(self.config.delay);
        let mut report = Report::default();

        for card in cards {
            limiter.ready().await;

            match self.appraise_card(card).await {
                Ok(Some(outcome)) => report.record(outcome),
                Ok(None) => {}
                Err(e) => log::error!("Error fetching data for card: {}: {}", card.name, e),
            }
        }

        log::info!(
            "Processed {} cards: {} above market, {} below market, {} errors",
            cards.len(),
            report.above_market.len(),
            report.below_market.len(),
            report.errors.len()
        );

        report
    }
}
