//! Process-local stores backed by `DashMap`.

pub mod entities;
pub mod ledger;

pub use entities::InMemoryEntityStore;
pub use ledger::InMemoryLedger;
