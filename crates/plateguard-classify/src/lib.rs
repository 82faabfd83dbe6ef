//! # plateguard-classify
//!
//! Maps raw Plate Score and ICC integers onto the seven-tier category
//! ladder. Both axes share one threshold table; only the labels differ.
//!
//! ```
//! use plateguard_classify::CategoryClassifier;
//! use plateguard_core::models::{PlateCategory, Category, ScoreAxis};
//!
//! let classifier = CategoryClassifier::default();
//! assert_eq!(classifier.classify(200, ScoreAxis::Plate), Category::Plate(PlateCategory::Conhecida));
//! assert_eq!(classifier.classify(199, ScoreAxis::Plate), Category::Plate(PlateCategory::Neutra));
//! ```

pub mod classifier;
pub mod history;
pub mod progress;

pub use classifier::CategoryClassifier;
pub use progress::TierProgress;
