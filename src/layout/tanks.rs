//! Underground tank placement
//!
//! Tanks form a single vertical column in the rear zone: one shared x
//! coordinate, stacked top to bottom with fixed spacing, centered in the
//! available band. No search is involved; the column either fits or the
//! request fails.

use crate::core::error::{LayoutError, Result};
use crate::core::types::{Circle, Plot, Vec2};
use crate::layout::geometry::circle_to_rect_edge_distance;
use crate::layout::sales_building::SalesBuildingPlacement;
use crate::layout::zones::Zones;
use crate::rules::RuleTable;
use serde::{Deserialize, Serialize};

/// Placed tank column, ordered top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankPlacement {
    /// Tank centers, ordered by ascending y.
    pub centers: Vec<Vec2>,
    /// Topmost occupied y (first tank's upper edge). With no tanks this is
    /// the rear-zone start, so consumers can still reason about the band.
    pub top_y: f64,
}

/// Stack `count` tanks in the rear zone, clear of boundaries and building.
///
/// The column is centered in the band running from the rear-zone line to
/// the boundary clearance at the plot's rear edge. The zone line itself is a
/// derived band edge, not a physical boundary, so no clearance applies
/// there; clearance to every plot edge is enforced per tank afterwards.
pub fn place_tanks(
    plot: &Plot,
    count: u32,
    building: &SalesBuildingPlacement,
    rules: &RuleTable,
) -> Result<TankPlacement> {
    let zones = Zones::for_depth(plot.depth, rules);

    if count == 0 {
        return Ok(TankPlacement { centers: Vec::new(), top_y: zones.rear.min_y });
    }
    if !(1..=3).contains(&count) {
        return Err(LayoutError::UnsupportedTankCount(count));
    }

    let radius = rules.tank_radius;
    let boundary = rules.tank_boundary_clearance;
    let spacing = rules.tank_spacing;

    let band_min = zones.rear.min_y;
    let band_max = plot.depth - boundary;
    let available_span = band_max - band_min;

    let n = count as f64;
    let stack_height = n * (radius * 2.0) + (n - 1.0) * spacing;
    if stack_height > available_span {
        return Err(LayoutError::TanksDoNotFit);
    }

    let x = boundary + radius;
    let first_center_y = band_min + (available_span - stack_height) / 2.0 + radius;
    let centers: Vec<Vec2> = (0..count)
        .map(|i| Vec2::new(x, first_center_y + i as f64 * (radius * 2.0 + spacing)))
        .collect();

    for center in &centers {
        if center.x - radius < boundary || center.x + radius > plot.width - boundary {
            return Err(LayoutError::TankBoundaryViolation);
        }
        if center.y - radius < boundary || center.y + radius > plot.depth - boundary {
            return Err(LayoutError::TankBoundaryViolation);
        }
        let clearance =
            circle_to_rect_edge_distance(&Circle::new(*center, radius), &building.footprint);
        if clearance < rules.tank_building_clearance {
            return Err(LayoutError::TankToBuildingViolation);
        }
    }

    let top_y = centers[0].y - radius;
    Ok(TankPlacement { centers, top_y })
}
