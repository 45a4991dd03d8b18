//! # fr-engine — Spin engine for FortuneReel
//!
//! Pure, display-free prize wheel logic: weighted outcome selection, scroll
//! strip construction, and the frame-driven deceleration that brings the
//! strip to rest on the winning tile.
//!
//! ## Features
//!
//! - **Weighted Selector**: probability proportional to prize weight
//! - **Sequence Builder**: long repeated strip with one landing tile and a
//!   rarity-biased teaser window for suspense
//! - **Deceleration Profile**: cubic ease-out, exact terminal position
//! - **Timing Profiles**: Normal, Turbo, Studio (near-instant) pacing
//!
//! ## Architecture
//!
//! ```text
//! SpinEngine
//!     │
//!     ├── select_weighted     (outcome draw)
//!     ├── build_sequence      (strip with one landing tile)
//!     ├── TrackLayout         (viewport centering)
//!     └── DecelerationProfile (frame → offset, cubic ease-out)
//!           │
//!           v
//!     tick() → SpinUpdate::Finished(Prize)
//! ```

pub mod easing;
pub mod layout;
pub mod selector;
pub mod sequence;
pub mod spinner;
pub mod timing;

pub use easing::*;
pub use layout::*;
pub use selector::*;
pub use sequence::*;
pub use spinner::*;
pub use timing::*;
