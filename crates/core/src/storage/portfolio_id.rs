use super::kv::KeyValueStore;

pub const PORTFOLIO_ID_KEY: &str = "portfolio-id";

/// Remember which portfolio this client last worked with.
pub fn store_portfolio_id(store: &mut dyn KeyValueStore, id: i64) {
    store.set(PORTFOLIO_ID_KEY, id.to_string());
}

/// The remembered portfolio id. Missing or unparseable values read as `None`.
pub fn stored_portfolio_id(store: &dyn KeyValueStore) -> Option<i64> {
    store.get(PORTFOLIO_ID_KEY)?.trim().parse().ok()
}
