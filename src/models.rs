use serde::Deserialize;

/// Physical treatment of a printing, each priced independently
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Finish {
    #[default]
    Normal,
    Foil,
    Etched,
    /// Anything we don't recognise; never matches a price
    Other(String),
}

impl Finish {
    /// Returns the lowercase name as written in the input file
    pub fn as_str(&self) -> &str {
        match self {
            Finish::Normal => "normal",
            Finish::Foil => "foil",
            Finish::Etched => "etched",
            Finish::Other(s) => s.as_str(),
        }
    }

    /// Parse the `Foil` column. Empty means a regular (non-foil) card.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "normal" => Finish::Normal,
            "foil" => Finish::Foil,
            "etched" => Finish::Etched,
            _ => Finish::Other(s.trim().to_string()),
        }
    }

    /// Scryfall price keys to try for this finish, most specific first
    pub fn price_keys(&self) -> &'static [&'static str] {
        match self {
            Finish::Normal => &["usd"],
            Finish::Foil => &["usd_foil", "usd"],
            Finish::Etched => &["usd_etched", "usd_foil", "usd"],
            Finish::Other(_) => &[],
        }
    }
}

/// One row of the purchase CSV, exactly as written
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CardRow {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Purchase price", default)]
    pub purchase_price: Option<String>,
    #[serde(rename = "Foil", default)]
    pub foil: Option<String>,
    #[serde(rename = "Set", default)]
    pub set: Option<String>,
    #[serde(rename = "Collector number", default)]
    pub collector_number: Option<String>,
}

/// A purchased card, validated and typed
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedCard {
    pub name: String,
    pub purchase_price: f64,
    pub finish: Finish,
    pub set: Option<String>,
    pub collector_number: Option<String>,
}

impl OwnedCard {
    /// Set code and collector number, when both were given
    pub fn printing_key(&self) -> Option<(&str, &str)> {
        match (self.set.as_deref(), self.collector_number.as_deref()) {
            (Some(set), Some(cn)) => Some((set, cn)),
            _ => None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl CardRow {
    /// Convert into an `OwnedCard`. Returns `None` when the name is missing,
    /// since such a row can never be resolved.
    pub fn into_owned_card(self) -> Option<OwnedCard> {
        let name = non_empty(self.name)?;

        let purchase_price = match non_empty(self.purchase_price) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(price) if price.is_finite() => price,
                _ => {
                    log::warn!("Unparseable purchase price '{}' for {}, using 0", raw, name);
                    0.0
                }
            },
            None => 0.0,
        };

        let finish = self
            .foil
            .as_deref()
            .map(Finish::parse)
            .unwrap_or_default();

        Some(OwnedCard {
            name,
            purchase_price,
            finish,
            set: non_empty(self.set),
            collector_number: non_empty(self.collector_number),
        })
    }
}
