//! Run configuration handed to the reconciler

use crate::scryfall::{DEFAULT_USER_AGENT, SCRYFALL_API_URL};
use crate::valuation::MatchStrategy;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_INPUT: &str = "cards.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// 20% over the cheapest printing counts as above market
pub const DEFAULT_MARKUP: f64 = 1.2;
pub const DEFAULT_DELAY_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub markup: f64,
    /// Minimum spacing between cards
    pub delay: Duration,
    pub api_base_url: String,
    pub user_agent: String,
    pub match_strategy: MatchStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            markup: DEFAULT_MARKUP,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            api_base_url: SCRYFALL_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            match_strategy: MatchStrategy::default(),
        }
    }
}
