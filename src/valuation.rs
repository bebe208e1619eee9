//! Market minimum, owned-finish price and above/below classification

use crate::models::{Finish, OwnedCard};
use crate::prices::PricePoints;
use crate::report::{ErrorEntry, Valuation};

/// Stand-in for a missing price so it never wins a minimum
pub const NO_PRICE: f64 = 10_000_000.0;

/// Keys considered when looking for the cheapest printing
const MARKET_KEYS: [&str; 3] = ["usd", "usd_foil", "usd_etched"];

pub const OWNED_PRICE_MISSING: &str = "Owned Price not found";
pub const NO_MARKET_PRICE: &str = "No market price found";

/// How to pick the printing the purchaser actually owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MatchStrategy {
    /// The printing whose id equals the fuzzy-search result's id
    #[default]
    CatalogId,
    /// Set code + collector number from the input row, else catalog id
    SetAndCollector,
}

/// Where a card ends up in the report
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    AboveMarket(Valuation),
    BelowMarket(Valuation),
    Error(ErrorEntry),
}

/// Lowest usd/usd_foil/usd_etched over all printings. `NO_PRICE` if none has one.
pub fn market_min(printings: &[PricePoints]) -> f64 {
    printings
        .iter()
        .flat_map(|p| MARKET_KEYS.iter().map(move |key| p.price(key).unwrap_or(NO_PRICE)))
        .fold(NO_PRICE, f64::min)
}

/// Price for the declared finish, walking the fallback chain. 0 when nothing matches.
pub fn owned_price(printing: &PricePoints, finish: &Finish) -> f64 {
    finish
        .price_keys()
        .iter()
        .find_map(|key| printing.price(key))
        .unwrap_or(0.0)
}

/// Locate the owned printing among all printings
pub fn find_owned<'a>(
    printings: &'a [PricePoints],
    card: &OwnedCard,
    catalog_id: &str,
    strategy: MatchStrategy,
) -> Option<&'a PricePoints> {
    if strategy == MatchStrategy::SetAndCollector {
        if let Some((set, cn)) = card.printing_key() {
            let found = printings.iter().find(|p| {
                p.set.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(set))
                    && p.collector_number.as_deref() == Some(cn)
            });
            if found.is_some() {
                return found;
            }
            log::debug!(
                "No printing {}/{} for {}, matching by catalog id",
                set,
                cn,
                card.name
            );
        }
    }

    printings.iter().find(|p| p.id == catalog_id)
}

fn round2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Classify one card against its printings
pub fn appraise(
    card: &OwnedCard,
    catalog_id: &str,
    printings: &[PricePoints],
    strategy: MatchStrategy,
    markup: f64,
) -> Outcome {
    let lowest = market_min(printings);
    let owned = find_owned(printings, card, catalog_id, strategy)
        .map(|p| owned_price(p, &card.finish))
        .unwrap_or(0.0);

    if owned == 0.0 {
        return Outcome::Error(ErrorEntry::new(&card.name, OWNED_PRICE_MISSING));
    }
    if lowest >= NO_PRICE || lowest <= 0.0 {
        return Outcome::Error(ErrorEntry::new(&card.name, NO_MARKET_PRICE));
    }

    let paid = card.purchase_price;
    let difference = paid - lowest;
    let valuation = Valuation {
        name: card.name.clone(),
        bought_price: paid,
        lowest_price: lowest,
        owned_price: owned,
        difference: round2(difference),
        percentage: format!("{}%", round2(difference / lowest * 100.0)),
    };

    if paid > lowest * markup {
        Outcome::AboveMarket(valuation)
    } else {
        Outcome::BelowMarket(valuation)
    }
}

#[cfg(test)]
#[path = "valuation_tests.rs"]
mod tests;
