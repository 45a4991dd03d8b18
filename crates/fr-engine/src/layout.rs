//! Track geometry: tile widths and viewport centering

use serde::{Deserialize, Serialize};

/// Default tile width including horizontal margin (px)
pub const DEFAULT_ITEM_WIDTH_PX: f64 = 170.0;

/// Default viewport width when none is supplied (px)
pub const DEFAULT_VIEWPORT_WIDTH_PX: f64 = 1280.0;

/// Horizontal strip geometry
///
/// Offsets are track translations: zero puts the first tile at the
/// viewport's left edge, negative values scroll the strip left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrackLayout {
    /// Per-tile width including margin (px)
    pub item_width: f64,
    /// Visible viewport width (px)
    pub viewport_width: f64,
}

impl TrackLayout {
    /// Create a layout
    pub fn new(item_width: f64, viewport_width: f64) -> Self {
        Self {
            item_width,
            viewport_width,
        }
    }

    /// Standard tile width with the given viewport
    pub fn standard(viewport_width: f64) -> Self {
        Self::new(DEFAULT_ITEM_WIDTH_PX, viewport_width)
    }

    /// Track offset that centers the tile at `index` under the viewport marker
    pub fn center_offset(&self, index: usize) -> f64 {
        -(index as f64 * self.item_width - self.viewport_width / 2.0 + self.item_width / 2.0)
    }

    /// Tile index whose center is closest to the viewport center at `offset`
    pub fn index_at_center(&self, offset: f64) -> usize {
        let x = self.viewport_width / 2.0 - offset;
        ((x / self.item_width) - 0.5).round().max(0.0) as usize
    }
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self::standard(DEFAULT_VIEWPORT_WIDTH_PX)
    }
}
