//! Prize catalog with CRUD, validation and default seeding

use rand::Rng;
use rand::distr::Alphanumeric;

use fr_core::{FrError, FrResult, Prize, Rarity};

use crate::kv::KvStore;

/// Storage key holding the serialized catalog (a JSON array of prizes)
pub const CATALOG_KEY: &str = "fortune_reel.catalog";

/// Length of generated prize IDs
const ID_LEN: usize = 12;

/// Prize catalog store
///
/// Owns the in-memory catalog and writes through to the key-value backend
/// on every mutation. Invariant: the catalog is never empty — `load` seeds
/// defaults and `delete` rejects removing the last prize.
pub struct CatalogStore<S: KvStore> {
    kv: S,
    prizes: Vec<Prize>,
}

impl<S: KvStore> CatalogStore<S> {
    /// Load the catalog from the backend, seeding defaults when the stored
    /// catalog is missing, unreadable, or empty
    pub fn load(kv: S) -> Self {
        let prizes = match kv.get(CATALOG_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Prize>>(&json) {
                Ok(prizes) if !prizes.is_empty() => prizes,
                Ok(_) => {
                    log::warn!("Stored catalog is empty, seeding defaults");
                    default_catalog()
                }
                Err(e) => {
                    log::warn!("Failed to parse stored catalog: {}", e);
                    default_catalog()
                }
            },
            Ok(None) => default_catalog(),
            Err(e) => {
                log::warn!("Failed to read stored catalog: {}", e);
                default_catalog()
            }
        };
        Self { kv, prizes }
    }

    /// All prizes in catalog order
    pub fn list(&self) -> &[Prize] {
        &self.prizes
    }

    /// Number of prizes
    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    /// True if the catalog has no prizes (never the case after `load`)
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// Look up a prize by ID
    pub fn get(&self, id: &str) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == id)
    }

    /// Add a new prize and return its generated ID
    ///
    /// Rejected (catalog unchanged) when the value is empty or the weight
    /// is out of range.
    pub fn add(&mut self, display_value: &str, weight: u32, rarity: Rarity) -> FrResult<String> {
        let prize = Prize::new(generate_id(), display_value.trim(), weight, rarity);
        prize.validate()?;

        let id = prize.id.clone();
        self.prizes.push(prize);
        self.persist()?;
        Ok(id)
    }

    /// Edit an existing prize in place, keeping its ID
    pub fn edit(
        &mut self,
        id: &str,
        display_value: &str,
        weight: u32,
        rarity: Rarity,
    ) -> FrResult<()> {
        let updated = Prize::new(id, display_value.trim(), weight, rarity);
        updated.validate()?;

        let slot = self
            .prizes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| FrError::PrizeNotFound(id.to_string()))?;
        *slot = updated;
        self.persist()
    }

    /// Delete a prize; the last remaining prize cannot be deleted
    pub fn delete(&mut self, id: &str) -> FrResult<()> {
        let idx = self
            .prizes
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| FrError::PrizeNotFound(id.to_string()))?;

        if self.prizes.len() == 1 {
            return Err(FrError::LastPrize);
        }

        self.prizes.remove(idx);
        self.persist()
    }

    /// Replace the catalog with the default prize set
    pub fn reset_to_default(&mut self) -> FrResult<&[Prize]> {
        self.prizes = default_catalog();
        self.persist()?;
        Ok(&self.prizes)
    }

    /// Remove the persisted catalog from the backend
    pub fn clear_persisted(&self) -> FrResult<()> {
        self.kv.remove(CATALOG_KEY)
    }

    /// Sum of all prize weights
    pub fn total_weight(&self) -> u32 {
        fr_core::total_weight(&self.prizes)
    }

    /// Selection chance for a prize, in percent
    pub fn chance_percent(&self, id: &str) -> Option<f64> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        self.get(id)
            .map(|p| p.weight as f64 / total as f64 * 100.0)
    }

    fn persist(&self) -> FrResult<()> {
        let json = serde_json::to_string(&self.prizes)
            .map_err(|e| FrError::Serialization(e.to_string()))?;
        self.kv.set(CATALOG_KEY, &json)
    }
}

/// Default prize set, seeded on first run and on reset
pub fn default_catalog() -> Vec<Prize> {
    vec![
        Prize::new(generate_id(), "₱20", 65, Rarity::Common),
        Prize::new(generate_id(), "₱50", 54, Rarity::Common),
        Prize::new(generate_id(), "₱100", 43, Rarity::Uncommon),
        Prize::new(generate_id(), "₱200", 32, Rarity::Uncommon),
        Prize::new(generate_id(), "₱500", 3, Rarity::Rare),
        Prize::new(generate_id(), "₱1,000", 3, Rarity::Rare),
    ]
}

/// Generate a random alphanumeric prize ID
fn generate_id() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    #[test]
    fn test_load_seeds_defaults() {
        let kv = MemoryKv::new();
        let store = CatalogStore::load(&kv);

        assert_eq!(store.len(), 6);
        assert_eq!(store.total_weight(), 200);
        assert_eq!(store.list()[0].display_value, "₱20");
    }

    #[test]
    fn test_load_falls_back_on_corrupt_data() {
        let kv = MemoryKv::new();
        kv.set(CATALOG_KEY, "{{not json").unwrap();

        let store = CatalogStore::load(&kv);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_load_falls_back_on_empty_array() {
        let kv = MemoryKv::new();
        kv.set(CATALOG_KEY, "[]").unwrap();

        let store = CatalogStore::load(&kv);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_add_and_persist() {
        let kv = MemoryKv::new();
        let mut store = CatalogStore::load(&kv);

        let id = store.add("₱5,000", 1, Rarity::Rare).unwrap();
        assert_eq!(store.len(), 7);
        assert_eq!(store.get(&id).unwrap().display_value, "₱5,000");

        // A fresh store over the same backend sees the mutation
        let reloaded = CatalogStore::load(&kv);
        assert_eq!(reloaded.len(), 7);
    }

    #[test]
    fn test_add_rejects_bad_weight() {
        let kv = MemoryKv::new();
        let mut store = CatalogStore::load(&kv);

        assert!(matches!(
            store.add("₱10", 0, Rarity::Common),
            Err(FrError::InvalidWeight(0))
        ));
        assert!(matches!(
            store.add("₱10", 101, Rarity::Common),
            Err(FrError::InvalidWeight(101))
        ));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_add_rejects_empty_value() {
        let kv = MemoryKv::new();
        let mut store = CatalogStore::load(&kv);

        assert!(matches!(
            store.add("  ", 10, Rarity::Common),
            Err(FrError::EmptyDisplayValue)
        ));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_edit() {
        let kv = MemoryKv::new();
        let mut store = CatalogStore::load(&kv);
        let id = store.list()[0].id.clone();

        store.edit(&id, "₱25", 60, Rarity::Common).unwrap();
        let prize = store.get(&id).unwrap();
        assert_eq!(prize.display_value, "₱25");
        assert_eq!(prize.weight, 60);

        assert!(matches!(
            store.edit("nope", "₱25", 60, Rarity::Common),
            Err(FrError::PrizeNotFound(_))
        ));
        assert!(matches!(
            store.edit(&id, "₱25", 200, Rarity::Common),
            Err(FrError::InvalidWeight(200))
        ));
    }

    #[test]
    fn test_delete_rejects_last_prize() {
        let kv = MemoryKv::new();
        let mut store = CatalogStore::load(&kv);

        while store.len() > 1 {
            let id = store.list()[0].id.clone();
            store.delete(&id).unwrap();
        }

        let last = store.list()[0].id.clone();
        assert!(matches!(store.delete(&last), Err(FrError::LastPrize)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_unknown_id() {
        let kv = MemoryKv::new();
        let mut store = CatalogStore::load(&kv);

        assert!(matches!(
            store.delete("missing"),
            Err(FrError::PrizeNotFound(_))
        ));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_reset_to_default() {
        let kv = MemoryKv::new();
        let mut store = CatalogStore::load(&kv);

        store.add("₱9,999", 1, Rarity::Rare).unwrap();
        assert_eq!(store.len(), 7);

        store.reset_to_default().unwrap();
        assert_eq!(store.len(), 6);

        let reloaded = CatalogStore::load(&kv);
        assert_eq!(reloaded.len(), 6);
    }

    #[test]
    fn test_chance_percent() {
        let kv = MemoryKv::new();
        let store = CatalogStore::load(&kv);
        let first = &store.list()[0];

        // ₱20 weight 65 of total 200
        let pct = store.chance_percent(&first.id).unwrap();
        assert!((pct - 32.5).abs() < 1e-9);

        assert_eq!(store.chance_percent("missing"), None);
    }

    #[test]
    fn test_clear_persisted() {
        let kv = MemoryKv::new();
        let mut store = CatalogStore::load(&kv);
        store.add("₱5", 5, Rarity::Common).unwrap();
        assert!(kv.get(CATALOG_KEY).unwrap().is_some());

        store.clear_persisted().unwrap();
        assert!(kv.get(CATALOG_KEY).unwrap().is_none());

        // Next load starts from defaults again
        let fresh = CatalogStore::load(&kv);
        assert_eq!(fresh.len(), 6);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let kv = MemoryKv::new();
        let mut store = CatalogStore::load(&kv);

        let a = store.add("₱1", 1, Rarity::Common).unwrap();
        let b = store.add("₱2", 1, Rarity::Common).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), 12);
    }
}
