//! # plateguard
//!
//! The policy engine as one object. [`PolicyEngine`] wires configuration,
//! the ledger and entity stores, and every component, and exposes one
//! method per user action.
//!
//! ```
//! use plateguard::{EngineOptions, PolicyEngine};
//! use plateguard::core::models::{Plate, UserId};
//! use chrono::Utc;
//!
//! let engine = PolicyEngine::new(EngineOptions::default()).unwrap();
//! let plate = Plate::parse("ABC-1234").unwrap();
//! let user = UserId::from("alice");
//! let now = Utc::now();
//!
//! assert!(engine.send_solidary(&plate, &user, now).is_allowed());
//! assert!(!engine.send_solidary(&plate, &user, now).is_allowed());
//! ```

pub mod engine;
pub mod options;

pub use engine::PolicyEngine;
pub use options::EngineOptions;

pub use plateguard_alerts as alerts;
pub use plateguard_benefits as benefits;
pub use plateguard_classify as classify;
pub use plateguard_core as core;
pub use plateguard_decay as decay;
pub use plateguard_gate as gate;
pub use plateguard_storage as storage;
pub use plateguard_verification as verification;
