//! Frame-driven spin engine
//!
//! Single-threaded and cooperative: the presenter calls [`SpinEngine::tick`]
//! once per display-refresh frame and renders the returned offset. Only one
//! spin is active at a time; completion is reported as a value from `tick`
//! rather than through a callback, so the engine stays testable without a
//! display environment.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use fr_core::{FrError, FrResult, Prize, Rarity};

use crate::easing::DecelerationProfile;
use crate::layout::TrackLayout;
use crate::selector::select_weighted;
use crate::sequence::{DisplaySequence, SequenceConfig, build_sequence};
use crate::timing::{SpinProfile, SpinTiming};

/// Spin lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    /// No spin active
    Idle,
    /// Constant-velocity scroll, waiting for a stop request
    Spinning,
    /// Easing toward the rest position
    Stopping,
    /// At rest, holding before the winner is reported
    Settling,
    /// Spin finished, winner available
    Complete,
}

/// Per-frame update returned by [`SpinEngine::tick`]
#[derive(Debug, Clone, PartialEq)]
pub enum SpinUpdate {
    /// Nothing to animate
    Idle,
    /// Track moved to (or is holding at) the given offset
    Moving(f64),
    /// Spin completed on this frame, with the winning prize
    Finished(Prize),
}

/// Session statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpinStats {
    pub total_spins: u64,
    pub completed: u64,
    pub common_wins: u64,
    pub uncommon_wins: u64,
    pub rare_wins: u64,
}

impl SpinStats {
    fn record(&mut self, prize: &Prize) {
        self.completed += 1;
        match prize.rarity {
            Rarity::Common => self.common_wins += 1,
            Rarity::Uncommon => self.uncommon_wins += 1,
            Rarity::Rare => self.rare_wins += 1,
        }
    }
}

/// Engine configuration snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub timing: SpinTiming,
    pub layout: TrackLayout,
    pub sequence: SequenceConfig,
}

/// Frame-driven prize wheel engine
///
/// Selects a weighted outcome up front, builds the scroll strip around it,
/// and drives the track offset frame by frame until the landing tile rests
/// at the viewport center.
pub struct SpinEngine {
    /// Timing configuration
    timing: SpinTiming,
    /// Track geometry
    layout: TrackLayout,
    /// Strip configuration
    sequence_config: SequenceConfig,
    /// Random number generator
    rng: StdRng,
    /// Current lifecycle phase
    phase: SpinPhase,
    /// Current track offset (px)
    position: f64,
    /// Strip for the active spin
    sequence: Option<DisplaySequence>,
    /// Outcome selected at spin start
    selected: Option<Prize>,
    /// Active deceleration profile
    profile: Option<DecelerationProfile>,
    /// Settle frames left before the winner is reported
    settle_remaining: u32,
    /// Winner of the last completed spin
    winner: Option<Prize>,
    /// Lifetime spin counter
    spin_count: u64,
    /// Session stats
    stats: SpinStats,
}

impl SpinEngine {
    /// Create an engine with default timing and layout
    pub fn new() -> Self {
        Self::with_timing(SpinTiming::normal())
    }

    /// Create with specific timing
    pub fn with_timing(timing: SpinTiming) -> Self {
        Self {
            timing,
            layout: TrackLayout::default(),
            sequence_config: SequenceConfig::default(),
            rng: StdRng::from_os_rng(),
            phase: SpinPhase::Idle,
            position: 0.0,
            sequence: None,
            selected: None,
            profile: None,
            settle_remaining: 0,
            winner: None,
            spin_count: 0,
            stats: SpinStats::default(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Set timing profile
    pub fn set_timing(&mut self, profile: SpinProfile) {
        self.timing = SpinTiming::from_profile(profile);
    }

    /// Set detailed timing configuration
    pub fn set_timing_config(&mut self, timing: SpinTiming) {
        self.timing = timing;
    }

    /// Set track geometry (viewport and tile width)
    pub fn set_layout(&mut self, layout: TrackLayout) {
        self.layout = layout;
    }

    /// Set strip configuration
    pub fn set_sequence_config(&mut self, config: SequenceConfig) {
        self.sequence_config = config;
    }

    /// Seed RNG for reproducible spins
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Current track offset (px)
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Strip for the active spin, for the presenter to render
    pub fn sequence(&self) -> Option<&DisplaySequence> {
        self.sequence.as_ref()
    }

    /// Winner of the last completed spin
    pub fn winner(&self) -> Option<&Prize> {
        self.winner.as_ref()
    }

    /// Lifetime spin counter
    pub fn spin_count(&self) -> u64 {
        self.spin_count
    }

    /// Session stats
    pub fn stats(&self) -> &SpinStats {
        &self.stats
    }

    /// Reset session stats
    pub fn reset_stats(&mut self) {
        self.stats = SpinStats::default();
    }

    /// Current timing configuration
    pub fn timing(&self) -> &SpinTiming {
        &self.timing
    }

    /// Export configuration as JSON
    pub fn export_config(&self) -> String {
        let config = EngineConfig {
            timing: self.timing.clone(),
            layout: self.layout,
            sequence: self.sequence_config.clone(),
        };
        serde_json::to_string_pretty(&config).unwrap_or_default()
    }

    /// Import configuration from JSON
    pub fn import_config(&mut self, json: &str) -> FrResult<()> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| FrError::Serialization(e.to_string()))?;
        self.timing = config.timing;
        self.layout = config.layout;
        self.sequence_config = config.sequence;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SPIN LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Start a spin over the given catalog
    ///
    /// No-op while a spin is already in progress. The strip to render is
    /// available from [`sequence`](Self::sequence) afterwards; the outcome
    /// is reported by [`tick`](Self::tick) once the strip comes to rest.
    pub fn start(&mut self, catalog: &[Prize]) -> FrResult<()> {
        if !matches!(self.phase, SpinPhase::Idle | SpinPhase::Complete) {
            return Ok(());
        }
        if catalog.is_empty() {
            return Err(FrError::EmptyCatalog);
        }

        let selected = select_weighted(catalog, &mut self.rng)?.clone();
        let sequence = build_sequence(catalog, &selected, &self.sequence_config, &mut self.rng)?;

        self.spin_count += 1;
        self.stats.total_spins += 1;
        log::debug!(
            "Spin {} started, landing on {}",
            self.spin_count,
            selected.display_value
        );

        self.sequence = Some(sequence);
        self.selected = Some(selected);
        self.position = 0.0;
        self.profile = None;
        self.winner = None;
        self.settle_remaining = 0;
        self.phase = SpinPhase::Spinning;
        Ok(())
    }

    /// Request a stop
    ///
    /// Eases from the current position to the offset that centers the
    /// landing tile, never an instantaneous snap. No-op unless the engine
    /// is in the constant-velocity phase.
    pub fn stop(&mut self) {
        if self.phase != SpinPhase::Spinning {
            return;
        }
        let Some(sequence) = self.sequence.as_ref() else {
            return;
        };

        let target = self.layout.center_offset(sequence.landing_index);
        self.profile = Some(DecelerationProfile::new(
            self.position,
            target,
            self.timing.decel_frames,
        ));
        self.phase = SpinPhase::Stopping;
        log::debug!(
            "Stop requested at offset {:.1}, easing to {:.1} over {} frames",
            self.position,
            target,
            self.timing.decel_frames
        );
    }

    /// Advance one display frame
    pub fn tick(&mut self) -> SpinUpdate {
        match self.phase {
            SpinPhase::Idle | SpinPhase::Complete => SpinUpdate::Idle,
            SpinPhase::Spinning => {
                self.position -= self.timing.idle_velocity;
                SpinUpdate::Moving(self.position)
            }
            SpinPhase::Stopping => {
                match self.profile.as_mut().and_then(|p| p.next()) {
                    Some(offset) => {
                        self.position = offset;
                        SpinUpdate::Moving(offset)
                    }
                    None => {
                        // Profile exhausted: position already equals the target
                        self.settle_remaining = self.timing.settle_frames;
                        self.phase = SpinPhase::Settling;
                        self.finish_if_settled()
                    }
                }
            }
            SpinPhase::Settling => self.finish_if_settled(),
        }
    }

    /// Reset to idle, discarding any in-flight spin
    pub fn reset(&mut self) {
        self.phase = SpinPhase::Idle;
        self.position = 0.0;
        self.sequence = None;
        self.selected = None;
        self.profile = None;
        self.settle_remaining = 0;
        self.winner = None;
    }

    fn finish_if_settled(&mut self) -> SpinUpdate {
        if self.settle_remaining > 0 {
            self.settle_remaining -= 1;
            return SpinUpdate::Moving(self.position);
        }

        self.phase = SpinPhase::Complete;
        let winner = self.resolve_centered().or_else(|| self.selected.clone());
        match winner {
            Some(prize) => {
                self.stats.record(&prize);
                self.winner = Some(prize.clone());
                log::debug!(
                    "Spin {} complete: {}",
                    self.spin_count,
                    prize.display_value
                );
                SpinUpdate::Finished(prize)
            }
            // Unreachable in practice: start() always sets the selection
            None => SpinUpdate::Idle,
        }
    }

    /// The tile actually resting at the viewport center
    fn resolve_centered(&self) -> Option<Prize> {
        let sequence = self.sequence.as_ref()?;
        let idx = self.layout.index_at_center(self.position);
        sequence.entries.get(idx).map(|e| e.prize.clone())
    }
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new()
    }
}
