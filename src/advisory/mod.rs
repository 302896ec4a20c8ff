//! Advisory selection
//!
//! - `tier`: household-size bands
//! - `selector`: per-person and large-household flags
//! - `tips`: advice text attached to each outcome

pub mod tier;
pub mod selector;
pub mod tips;

pub use tier::HouseholdTier;
pub use selector::{classify, Advisory, AdvisorySelector};
