//! Core data models for cardpane
//!
//! Value objects supplied by the host: cards, their outputs, and the
//! per-category type filters used to decide which cards are shown.

pub mod card;
pub mod card_output;
pub mod type_filters;

// Re-exports for convenience
pub use card::{Card, CardKey};
pub use card_output::{CardOutput, OutputCategory};
pub use type_filters::TypeFilters;
