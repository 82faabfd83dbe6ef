//! Domain models shared by every component.

pub mod category;
pub mod decision;
pub mod entity;
pub mod identity;
pub mod interaction;
pub mod score_history;
pub mod seal;
pub mod stolen_alert;
pub mod verification;

pub use category::{Category, IccCategory, PlateCategory, ScoreAxis, Tier};
pub use decision::{DenyReason, GateDecision};
pub use entity::{UserRecord, VehicleRecord};
pub use identity::{Plate, Timestamp, UserId};
pub use interaction::{InteractionKind, InteractionRecord, LedgerFilter};
pub use score_history::{ArchiveReason, ScoreHistoryEntry};
pub use seal::{BenefitKind, SealBenefitState, SealTier};
pub use stolen_alert::StolenAlertInfo;
pub use verification::VerificationCode;
