use serde::{Deserialize, Serialize};

use super::assetable::Assetable;

/// Current holding of a single asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPosition {
    pub assetable: Assetable,
    pub quantity: f64,
    pub amount: f64,
    pub price: f64,
}

/// All current holdings plus the portfolio total, as computed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPosition {
    pub assets: Vec<AssetPosition>,
    pub amount: f64,
}
