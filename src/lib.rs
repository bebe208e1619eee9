//! Card Reconciler - MTG collection vs. market prices
//!
//! Reads a CSV of purchased cards, looks each one up on Scryfall, and sorts the
//! collection into cards bought above and below the cheapest market printing.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod prices;
pub mod rate_limit;
pub mod reconcile;
pub mod report;
pub mod scryfall;
pub mod valuation;

pub use config::Config;
pub use error::{ReconcileError, Result};
pub use io::read_cards;
pub use models::{Finish, OwnedCard};
pub use prices::{extract, PricePoints};
pub use rate_limit::RateLimiter;
pub use reconcile::Reconciler;
pub use report::{ErrorEntry, Report, Valuation};
pub use scryfall::{CardIdentity, Printing, ScryfallClient};
pub use valuation::{appraise, market_min, owned_price, MatchStrategy, Outcome, NO_PRICE};
