//! Prize catalog data model

use serde::{Deserialize, Serialize};

use crate::error::{FrError, FrResult};

/// Minimum allowed prize weight
pub const MIN_WEIGHT: u32 = 1;

/// Maximum allowed prize weight
pub const MAX_WEIGHT: u32 = 100;

/// Rarity tier classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Bulk of the catalog
    #[default]
    Common,
    /// Mid tier
    Uncommon,
    /// Top tier, shown in the teaser window before the landing tile
    Rare,
}

impl Rarity {
    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
        }
    }

    /// Anything above common counts as teaser material
    pub fn is_special(&self) -> bool {
        !matches!(self, Rarity::Common)
    }
}

/// A prize catalog entry
///
/// Serialized with the persisted field names (`displayValue`, `rarityTier`)
/// so stored catalogs stay readable across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    /// Unique ID
    pub id: String,
    /// Value shown on the tile (e.g. "₱100")
    pub display_value: String,
    /// Selection weight (1-100)
    pub weight: u32,
    /// Rarity tier
    #[serde(rename = "rarityTier")]
    pub rarity: Rarity,
}

impl Prize {
    /// Create a new prize
    pub fn new(
        id: impl Into<String>,
        display_value: impl Into<String>,
        weight: u32,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.into(),
            display_value: display_value.into(),
            weight,
            rarity,
        }
    }

    /// Validate display value and weight range
    pub fn validate(&self) -> FrResult<()> {
        if self.display_value.trim().is_empty() {
            return Err(FrError::EmptyDisplayValue);
        }
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&self.weight) {
            return Err(FrError::InvalidWeight(self.weight));
        }
        Ok(())
    }
}

/// Sum of weights across a catalog
pub fn total_weight(catalog: &[Prize]) -> u32 {
    catalog.iter().map(|p| p.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let prize = Prize::new("a", "₱100", 43, Rarity::Uncommon);
        assert!(prize.validate().is_ok());
    }

    #[test]
    fn test_validate_weight_range() {
        let low = Prize::new("a", "₱100", 0, Rarity::Common);
        assert!(matches!(low.validate(), Err(FrError::InvalidWeight(0))));

        let high = Prize::new("a", "₱100", 101, Rarity::Common);
        assert!(matches!(high.validate(), Err(FrError::InvalidWeight(101))));

        let min = Prize::new("a", "₱100", 1, Rarity::Common);
        assert!(min.validate().is_ok());

        let max = Prize::new("a", "₱100", 100, Rarity::Common);
        assert!(max.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_value() {
        let blank = Prize::new("a", "   ", 10, Rarity::Common);
        assert!(matches!(blank.validate(), Err(FrError::EmptyDisplayValue)));
    }

    #[test]
    fn test_rarity_tiers() {
        assert_eq!(Rarity::default(), Rarity::Common);
        assert_eq!(Rarity::Rare.name(), "rare");
        assert!(!Rarity::Common.is_special());
        assert!(Rarity::Uncommon.is_special());
        assert!(Rarity::Rare.is_special());
    }

    #[test]
    fn test_persisted_field_names() {
        let prize = Prize::new("a1", "₱500", 3, Rarity::Rare);
        let json = serde_json::to_string(&prize).unwrap();

        assert!(json.contains("\"displayValue\""));
        assert!(json.contains("\"rarityTier\":\"rare\""));

        let back: Prize = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prize);
    }

    #[test]
    fn test_total_weight() {
        let catalog = vec![
            Prize::new("a", "₱20", 65, Rarity::Common),
            Prize::new("b", "₱50", 54, Rarity::Common),
            Prize::new("c", "₱100", 43, Rarity::Uncommon),
            Prize::new("d", "₱200", 32, Rarity::Uncommon),
            Prize::new("e", "₱500", 3, Rarity::Rare),
            Prize::new("f", "₱1,000", 3, Rarity::Rare),
        ];
        assert_eq!(total_weight(&catalog), 200);
        assert_eq!(total_weight(&[]), 0);
    }
}
