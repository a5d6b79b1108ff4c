//! Depth-band zoning of the plot

use crate::rules::RuleTable;
use serde::{Deserialize, Serialize};

/// A horizontal depth band `[min_y, max_y)` of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min_y: f64,
    pub max_y: f64,
}

impl Band {
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// The three reserved bands: sales building up front, dispensing in the
/// middle, tank farm at the rear.
///
/// Bands are contiguous and cover the full plot depth; they are derived from
/// the plot depth on demand and never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zones {
    pub front: Band,
    pub middle: Band,
    pub rear: Band,
}

impl Zones {
    /// Derive the bands for a plot of the given depth.
    ///
    /// Depth is assumed already validated as finite and positive.
    pub fn for_depth(depth: f64, rules: &RuleTable) -> Self {
        let front_max_y = depth * rules.front_zone_max_depth_ratio;
        let rear_min_y = depth * rules.rear_zone_min_depth_ratio;
        Self {
            front: Band { min_y: 0.0, max_y: front_max_y },
            middle: Band { min_y: front_max_y, max_y: rear_min_y },
            rear: Band { min_y: rear_min_y, max_y: depth },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zones_for_40m_plot() {
        let zones = Zones::for_depth(40.0, &RuleTable::default());
        assert_eq!(zones.front.min_y, 0.0);
        assert_eq!(zones.front.max_y, 12.0);
        assert_eq!(zones.middle.min_y, 12.0);
        assert_eq!(zones.middle.max_y, 26.0);
        assert_eq!(zones.rear.min_y, 26.0);
        assert_eq!(zones.rear.max_y, 40.0);
    }

    #[test]
    fn test_band_height() {
        let zones = Zones::for_depth(20.0, &RuleTable::default());
        assert_eq!(zones.front.height(), 6.0);
        assert_eq!(zones.middle.height(), 7.0);
        assert_eq!(zones.rear.height(), 7.0);
    }

    proptest! {
        #[test]
        fn prop_bands_cover_depth_without_gap_or_overlap(depth in 0.1..500.0f64) {
            let rules = RuleTable::default();
            let zones = Zones::for_depth(depth, &rules);

            // Monotone, contiguous
            prop_assert_eq!(zones.front.min_y, 0.0);
            prop_assert_eq!(zones.front.max_y, zones.middle.min_y);
            prop_assert_eq!(zones.middle.max_y, zones.rear.min_y);
            prop_assert_eq!(zones.rear.max_y, depth);
            prop_assert!(zones.front.max_y <= zones.middle.max_y);
            prop_assert!(zones.middle.max_y <= zones.rear.max_y);

            // Heights sum to the full depth
            let total = zones.front.height() + zones.middle.height() + zones.rear.height();
            prop_assert!((total - depth).abs() < 1e-9);
        }
    }
}
