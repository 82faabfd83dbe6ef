//! # plateguard-verification
//!
//! Issues and checks the numeric codes that gate the solidarity-alert flow
//! for first-time senders. Delivery of the code is the caller's concern.

pub mod check;
pub mod generator;
pub mod service;

pub use check::check_code;
pub use generator::RandomDigits;
pub use service::VerificationCodeService;
