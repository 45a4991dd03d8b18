//! # fr-core — Shared types for FortuneReel
//!
//! Data model and error types shared by the catalog store and the spin
//! engine:
//!
//! - **Prize**: a catalog entry (display value, selection weight, rarity tier)
//! - **Rarity**: three-tier classification driving strip presentation
//! - **FrError / FrResult**: common error type

pub mod error;
pub mod prize;

pub use error::*;
pub use prize::*;
