//! Weighted random prize selection

use rand::Rng;

use fr_core::{FrError, FrResult, Prize, total_weight};

/// Select a prize with probability proportional to its weight
///
/// Draws a uniform value in `[0, total_weight)` and resolves it with
/// [`pick_by_draw`]. The catalog is never mutated.
pub fn select_weighted<'a, R: Rng + ?Sized>(
    catalog: &'a [Prize],
    rng: &mut R,
) -> FrResult<&'a Prize> {
    if catalog.is_empty() {
        return Err(FrError::EmptyCatalog);
    }
    let total = total_weight(catalog);
    if total == 0 {
        return Err(FrError::InvalidWeight(0));
    }

    let draw = rng.random_range(0.0..total as f64);
    Ok(pick_by_draw(catalog, draw))
}

/// Resolve a draw in `[0, total_weight)` to a prize
///
/// Walks the catalog subtracting each weight until the running value drops
/// to zero or below. Falls back to the first prize if rounding at the upper
/// boundary leaves the draw unconsumed. Precondition: non-empty catalog.
pub fn pick_by_draw(catalog: &[Prize], draw: f64) -> &Prize {
    let mut remaining = draw;
    for prize in catalog {
        remaining -= prize.weight as f64;
        if remaining <= 0.0 {
            return prize;
        }
    }
    &catalog[0]
}
