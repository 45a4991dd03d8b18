//! Display sequence construction for the scrolling strip

use rand::Rng;
use serde::{Deserialize, Serialize};

use fr_core::{FrError, FrResult, Prize};

use crate::selector::select_weighted;

/// Strip layout configuration
///
/// The strip holds `cycles × items_per_cycle` entries. The landing entry
/// sits at `landing_fraction` within the middle cycle; the teaser window
/// immediately before it prefers non-common prizes. Both fractions are
/// tuning knobs, not contracts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Number of repetition blocks
    pub cycles: usize,
    /// Entries per repetition block
    pub items_per_cycle: usize,
    /// Fractional slot of the landing entry within the middle cycle
    pub landing_fraction: f64,
    /// Fractional start of the teaser window within the middle cycle
    pub teaser_fraction: f64,
}

impl SequenceConfig {
    /// Standard strip: long and smooth (25 × 50)
    pub fn standard() -> Self {
        Self {
            cycles: 25,
            items_per_cycle: 50,
            landing_fraction: 0.75,
            teaser_fraction: 0.60,
        }
    }

    /// Short strip for fast sessions (15 × 40)
    pub fn short() -> Self {
        Self {
            cycles: 15,
            items_per_cycle: 40,
            landing_fraction: 0.75,
            teaser_fraction: 0.60,
        }
    }

    /// Total number of strip entries
    pub fn total_entries(&self) -> usize {
        self.cycles * self.items_per_cycle
    }

    /// Middle repetition block
    pub fn middle_cycle(&self) -> usize {
        self.cycles / 2
    }

    /// Landing slot within the middle cycle
    pub fn landing_slot(&self) -> usize {
        (self.items_per_cycle as f64 * self.landing_fraction) as usize
    }

    /// First teaser slot within the middle cycle
    pub fn teaser_slot(&self) -> usize {
        (self.items_per_cycle as f64 * self.teaser_fraction) as usize
    }

    /// Index of the landing entry in the full strip
    pub fn landing_index(&self) -> usize {
        self.middle_cycle() * self.items_per_cycle + self.landing_slot()
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// One tile on the strip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceEntry {
    /// The prize shown on this tile
    pub prize: Prize,
    /// True for the single entry the animation lands on
    pub is_landing: bool,
}

/// The full scrollable strip for one spin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySequence {
    /// All tiles in scroll order
    pub entries: Vec<SequenceEntry>,
    /// Index of the landing entry
    pub landing_index: usize,
}

impl DisplaySequence {
    /// Number of tiles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the strip has no tiles
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The prize the spin lands on
    pub fn landing(&self) -> &Prize {
        &self.entries[self.landing_index].prize
    }
}

/// Build the strip for one spin, ending on `landing`
///
/// Every entry except the landing tile is an independent weighted draw,
/// except the teaser window of the middle cycle which draws uniformly from
/// non-common prizes when the catalog has any.
pub fn build_sequence<R: Rng + ?Sized>(
    catalog: &[Prize],
    landing: &Prize,
    config: &SequenceConfig,
    rng: &mut R,
) -> FrResult<DisplaySequence> {
    if catalog.is_empty() {
        return Err(FrError::EmptyCatalog);
    }

    let middle = config.middle_cycle();
    let landing_slot = config.landing_slot();
    let teaser_slot = config.teaser_slot();
    let specials: Vec<&Prize> = catalog.iter().filter(|p| p.rarity.is_special()).collect();

    let mut entries = Vec::with_capacity(config.total_entries());
    for cycle in 0..config.cycles {
        for slot in 0..config.items_per_cycle {
            if cycle == middle && slot == landing_slot {
                entries.push(SequenceEntry {
                    prize: landing.clone(),
                    is_landing: true,
                });
                continue;
            }

            let in_teaser = cycle == middle && slot >= teaser_slot && slot < landing_slot;
            let prize = if in_teaser && !specials.is_empty() {
                specials[rng.random_range(0..specials.len())]
            } else {
                select_weighted(catalog, rng)?
            };
            entries.push(SequenceEntry {
                prize: prize.clone(),
                is_landing: false,
            });
        }
    }

    Ok(DisplaySequence {
        entries,
        landing_index: config.landing_index(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_core::Rarity;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_catalog() -> Vec<Prize> {
        vec![
            Prize::new("p20", "₱20", 65, Rarity::Common),
            Prize::new("p50", "₱50", 54, Rarity::Common),
            Prize::new("p100", "₱100", 43, Rarity::Uncommon),
            Prize::new("p200", "₱200", 32, Rarity::Uncommon),
            Prize::new("p500", "₱500", 3, Rarity::Rare),
            Prize::new("p1000", "₱1,000", 3, Rarity::Rare),
        ]
    }

    #[test]
    fn test_standard_geometry() {
        let config = SequenceConfig::standard();
        assert_eq!(config.total_entries(), 1250);
        assert_eq!(config.middle_cycle(), 12);
        assert_eq!(config.landing_slot(), 37);
        assert_eq!(config.landing_index(), 12 * 50 + 37);
    }

    #[test]
    fn test_exactly_one_landing_entry() {
        let catalog = test_catalog();
        let landing = catalog[4].clone(); // ₱500
        let config = SequenceConfig::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let sequence = build_sequence(&catalog, &landing, &config, &mut rng).unwrap();

        assert_eq!(sequence.len(), config.total_entries());
        let landings: Vec<usize> = sequence
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_landing)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(landings, vec![config.landing_index()]);
        assert_eq!(sequence.landing().id, landing.id);
        assert_eq!(sequence.landing_index, config.landing_index());
    }

    #[test]
    fn test_teaser_window_is_non_common() {
        let catalog = test_catalog();
        let landing = catalog[0].clone();
        let config = SequenceConfig::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let sequence = build_sequence(&catalog, &landing, &config, &mut rng).unwrap();

        let base = config.middle_cycle() * config.items_per_cycle;
        for slot in config.teaser_slot()..config.landing_slot() {
            let entry = &sequence.entries[base + slot];
            assert!(
                entry.prize.rarity.is_special(),
                "teaser slot {} holds a common prize",
                slot
            );
        }
    }

    #[test]
    fn test_all_common_catalog_falls_back_to_weighted() {
        let catalog = vec![
            Prize::new("a", "₱10", 50, Rarity::Common),
            Prize::new("b", "₱20", 50, Rarity::Common),
        ];
        let landing = catalog[1].clone();
        let config = SequenceConfig::short();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let sequence = build_sequence(&catalog, &landing, &config, &mut rng).unwrap();
        assert_eq!(sequence.len(), config.total_entries());
        assert_eq!(sequence.landing().id, "b");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let landing = Prize::new("x", "₱1", 1, Rarity::Common);
        let config = SequenceConfig::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert!(matches!(
            build_sequence(&[], &landing, &config, &mut rng),
            Err(FrError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_deterministic_given_seed() {
        let catalog = test_catalog();
        let landing = catalog[2].clone();
        let config = SequenceConfig::short();

        let mut rng_a = ChaCha8Rng::seed_from_u64(77);
        let mut rng_b = ChaCha8Rng::seed_from_u64(77);
        let a = build_sequence(&catalog, &landing, &config, &mut rng_a).unwrap();
        let b = build_sequence(&catalog, &landing, &config, &mut rng_b).unwrap();

        let ids_a: Vec<&str> = a.entries.iter().map(|e| e.prize.id.as_str()).collect();
        let ids_b: Vec<&str> = b.entries.iter().map(|e| e.prize.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }
}
