//! Sales-building placement
//!
//! Fully deterministic: footprint and anchor follow directly from the plot
//! and the building selection, with no search. The resulting footprint is
//! the sole obstacle every downstream placement must clear.

use crate::core::error::{LayoutError, Result};
use crate::core::types::{Orientation, Plot, PositionPreference, Rect, Vec2};
use crate::layout::zones::Zones;
use crate::request::SalesBuildingSpec;
use crate::rules::RuleTable;
use serde::{Deserialize, Serialize};

/// Where the sales building ended up.
///
/// Computed fresh per validation call and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesBuildingPlacement {
    /// Front-left corner of the footprint.
    pub position: Vec2,
    /// 0° for front orientation, 90° for side.
    pub rotation_deg: f64,
    /// Axis-aligned footprint after orientation is applied.
    pub footprint: Rect,
}

/// Compute the building's footprint and anchor.
///
/// The building always sits at `y = min_front_offset` and must fit inside
/// the front zone and the plot.
pub fn place_sales_building(
    plot: &Plot,
    spec: &SalesBuildingSpec,
    rules: &RuleTable,
) -> Result<SalesBuildingPlacement> {
    let zones = Zones::for_depth(plot.depth, rules);

    let (mut width, mut depth) = spec.building_type.dimensions();
    if spec.orientation == Orientation::Side {
        std::mem::swap(&mut width, &mut depth);
    }

    let y = rules.sb_min_front_offset;
    if y + depth > zones.front.max_y {
        return Err(LayoutError::ExceedsFrontZone);
    }

    let x = match spec.position {
        PositionPreference::FrontLeft => rules.sb_side_margin,
        PositionPreference::FrontCenter => (plot.width - width) / 2.0,
        PositionPreference::FrontRight => plot.width - width - rules.sb_side_margin,
    };

    let footprint = Rect::new(x, y, width, depth);
    if !plot.bounds().contains_rect(&footprint) {
        return Err(LayoutError::OutOfBounds);
    }

    Ok(SalesBuildingPlacement {
        position: Vec2::new(x, y),
        rotation_deg: spec.orientation.rotation_deg(),
        footprint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{EntrySide, PositionPreference, SalesBuildingType};

    fn spec(
        building_type: SalesBuildingType,
        orientation: Orientation,
        position: PositionPreference,
    ) -> SalesBuildingSpec {
        SalesBuildingSpec {
            building_type,
            orientation,
            position,
            entry_side: EntrySide::Road,
        }
    }

    #[test]
    fn test_front_center_placement() {
        let plot = Plot { width: 30.0, depth: 40.0 };
        let rules = RuleTable::default();
        let placed = place_sales_building(
            &plot,
            &spec(SalesBuildingType::Type3, Orientation::Front, PositionPreference::FrontCenter),
            &rules,
        )
        .unwrap();

        assert_eq!(placed.position, Vec2::new(11.0, 2.0));
        assert_eq!(placed.rotation_deg, 0.0);
        assert_eq!(placed.footprint, Rect::new(11.0, 2.0, 8.0, 7.0));
    }

    #[test]
    fn test_left_and_right_anchors_share_the_margin() {
        let plot = Plot { width: 30.0, depth: 40.0 };
        let rules = RuleTable::default();
        let sb_type = SalesBuildingType::Type2;

        let left = place_sales_building(
            &plot,
            &spec(sb_type, Orientation::Front, PositionPreference::FrontLeft),
            &rules,
        )
        .unwrap();
        assert_eq!(left.position.x, 2.0);

        let right = place_sales_building(
            &plot,
            &spec(sb_type, Orientation::Front, PositionPreference::FrontRight),
            &rules,
        )
        .unwrap();
        assert_eq!(right.position.x, 30.0 - 6.0 - 2.0);
    }

    #[test]
    fn test_side_orientation_swaps_footprint() {
        let plot = Plot { width: 30.0, depth: 40.0 };
        let rules = RuleTable::default();
        let placed = place_sales_building(
            &plot,
            &spec(SalesBuildingType::Type3, Orientation::Side, PositionPreference::FrontLeft),
            &rules,
        )
        .unwrap();

        assert_eq!(placed.rotation_deg, 90.0);
        assert_eq!(placed.footprint.width, 7.0);
        assert_eq!(placed.footprint.depth, 8.0);
    }

    #[test]
    fn test_building_deeper_than_front_zone_fails() {
        // Front zone of a 20 m plot tops out at 6 m; offset 2 + depth 5 > 6
        let plot = Plot { width: 30.0, depth: 20.0 };
        let rules = RuleTable::default();
        let err = place_sales_building(
            &plot,
            &spec(SalesBuildingType::Type1, Orientation::Front, PositionPreference::FrontLeft),
            &rules,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::ExceedsFrontZone));
    }

    #[test]
    fn test_building_wider_than_plot_fails() {
        let plot = Plot { width: 10.0, depth: 40.0 };
        let rules = RuleTable::default();
        let err = place_sales_building(
            &plot,
            &spec(SalesBuildingType::Type5, Orientation::Front, PositionPreference::FrontCenter),
            &rules,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::OutOfBounds));
    }

    #[test]
    fn test_placement_is_pure() {
        let plot = Plot { width: 30.0, depth: 40.0 };
        let rules = RuleTable::default();
        let s = spec(SalesBuildingType::Type4, Orientation::Front, PositionPreference::FrontRight);
        let a = place_sales_building(&plot, &s, &rules).unwrap();
        let b = place_sales_building(&plot, &s, &rules).unwrap();
        assert_eq!(a, b);
    }
}
