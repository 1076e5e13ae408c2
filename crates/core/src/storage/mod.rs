pub mod kv;
pub mod portfolio_id;
