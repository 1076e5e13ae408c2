pub mod amount;
pub mod assetable;
pub mod position;
pub mod session;
pub mod settings;
pub mod trade_file;
pub mod transaction;

/// Canonical point in time used for every date field.
pub type Instant = chrono::DateTime<chrono::Utc>;
