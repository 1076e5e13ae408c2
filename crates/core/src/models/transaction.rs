use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::assetable::{AssetKind, Assetable};
use super::Instant;

/// A single executed trade as reported by the server.
///
/// `amount` is taken from the server as-is; it is not recomputed from
/// `price * quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub assetable: Assetable,
    pub date: Instant,
    pub price: f64,
    pub quantity: f64,
    pub amount: f64,
}

impl Transaction {
    /// Calendar year of the trade date (UTC).
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn kind(&self) -> AssetKind {
        self.assetable.kind()
    }
}
