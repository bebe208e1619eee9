use crate::error::Result;
use crate::models::{CardRow, OwnedCard};
use std::path::Path;

/// Read the purchase CSV into typed records, in file order.
///
/// Failing to open the file is an error. Rows that can't be used (no name,
/// undecodable) are logged and skipped so one bad line doesn't sink the run.
pub fn read_cards<P: AsRef<Path>>(path: P) -> Result<Vec<OwnedCard>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut cards = Vec::new();

    for (index, result) in rdr.deserialize::<CardRow>().enumerate() {
        // header is line 1
        let row = index + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping unreadable row {}: {}", row, e);
                continue;
            }
        };

        match record.into_owned_card() {
            Some(card) => cards.push(card),
            None => log::warn!("Skipping row {}: no card name", row),
        }
    }

    log::info!(
        "Read {} cards from {}",
        cards.len(),
        path.as_ref().display()
    );

    Ok(cards)
}
