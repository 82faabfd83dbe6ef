//! Built-in decay policies.

pub mod monthly_step;
pub mod none;

pub use monthly_step::MonthlyStepDecay;
pub use none::NoDecay;
