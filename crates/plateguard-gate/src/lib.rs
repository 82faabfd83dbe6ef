//! # plateguard-gate
//!
//! Decides whether a user may message, evaluate, or send a solidarity alert
//! about a plate, and records the matching ledger entry.
//!
//! The rules live in [`policy`] as pure functions over a pair's ledger
//! records. [`InteractionGate`] reads the ledger and applies them; its
//! `try_*` operations run the rule inside the ledger's atomic
//! check-and-append so concurrent callers cannot both pass.

pub mod gate;
pub mod policy;

pub use gate::InteractionGate;
