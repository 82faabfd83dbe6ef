//! Seams between the engine and its collaborators.

pub mod code_generator;
pub mod decay_policy;
pub mod entity_store;
pub mod ledger_store;

pub use code_generator::ICodeGenerator;
pub use decay_policy::IScoreDecayPolicy;
pub use entity_store::{IEntityStore, UserMutation, VehicleMutation};
pub use ledger_store::{AdmissionCheck, ILedgerStore};
