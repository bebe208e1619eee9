//! Card Reconciler - compares what a collection cost against Scryfall prices
//!
//! Reads the purchase CSV, classifies every card as above or below market and
//! writes a timestamped JSON report.

use card_reconciler::config::{
    Config, DEFAULT_DELAY_MS, DEFAULT_INPUT, DEFAULT_MARKUP, DEFAULT_OUTPUT_DIR,
};
use card_reconciler::scryfall::{DEFAULT_USER_AGENT, SCRYFALL_API_URL};
use card_reconciler::{read_cards, MatchStrategy, Reconciler};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Compare purchase prices of an MTG collection against the cheapest market printing
#[derive(Parser, Debug)]
#[command(name = "card_reconciler")]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV with Name, Purchase price and Foil columns
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory the JSON report is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Multiplier over the market minimum that counts as above market
    #[arg(long, default_value_t = DEFAULT_MARKUP)]
    markup: f64,

    /// Pause between cards in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// How to find the owned printing among all printings
    #[arg(long, value_enum, default_value_t = MatchStrategy::CatalogId)]
    match_strategy: MatchStrategy,

    /// Scryfall API base URL
    #[arg(long, default_value = SCRYFALL_API_URL)]
    api_url: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            input: args.input,
            output_dir: args.output_dir,
            markup: args.markup,
            delay: Duration::from_millis(args.delay_ms),
            api_base_url: args.api_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            match_strategy: args.match_strategy,
        }
    }
}

#[tokio::main]
async fn main() {
    // Set RUST_LOG to control verbosity, e.g. RUST_LOG=card_reconciler=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    log::info!("Starting card_reconciler...");
    log::info!("Input: {}", config.input.display());

    let cards = match read_cards(&config.input) {
        Ok(cards) => cards,
        Err(e) => {
            log::error!("Failed to read {}: {}", config.input.display(), e);
            std::process::exit(1);
        }
    };

    let reconciler = Reconciler::new(config);
    let report = reconciler.run(&cards).await;

    match report.write_to(&reconciler.config().output_dir) {
        Ok(path) => log::info!("Report written to {}", path.display()),
        Err(e) => log::error!("Failed to write report: {}", e),
    }
}
