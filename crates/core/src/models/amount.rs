use serde::{Deserialize, Serialize};

use super::Instant;

/// One point of the portfolio valuation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAmount {
    pub date: Instant,
    /// Cumulative amount put into the portfolio up to `date`
    pub invested: f64,
    /// Market value of all holdings on `date`
    pub gross_total: f64,
}
