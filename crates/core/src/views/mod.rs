//! Pure state machines and helpers behind the client's pages.

pub mod format;
pub mod import;
pub mod navigation;
pub mod transactions;
