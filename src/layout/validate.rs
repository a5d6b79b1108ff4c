//! Validation orchestrator
//!
//! Runs structural checks, then the three placements in a fixed order,
//! short-circuiting on the first failure. A returned `Layout` is a semantic
//! guarantee: every rule held, and the geometry is directly usable by the
//! drawing collaborator.

use crate::core::error::{LayoutError, Result};
use crate::core::types::{EntrySide, Rect};
use crate::layout::mpds::place_mpds;
use crate::layout::sales_building::{place_sales_building, SalesBuildingPlacement};
use crate::layout::tanks::{place_tanks, TankPlacement};
use crate::rules::RuleTable;
use crate::request::LayoutRequest;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The full placement payload for one validated request.
///
/// Everything the drawing collaborator needs to derive decorative and label
/// geometry without re-deriving any placement decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub sales_building: SalesBuildingPlacement,
    pub tanks: TankPlacement,
    /// Dispenser islands in row-major order.
    pub mpds: Vec<Rect>,
    /// Entry-door side, passed through from the request.
    pub entry_side: EntrySide,
}

/// Validate a request end to end and return the placed layout.
///
/// Stage order: structural checks, sales building, dispensers, tanks. The
/// first failing stage decides the error; no partial geometry escapes.
pub fn validate_layout(request: &LayoutRequest, rules: &RuleTable) -> Result<Layout> {
    let plot = &request.plot;
    if !plot.width.is_finite() || !plot.depth.is_finite() {
        return Err(LayoutError::NonFinitePlot);
    }
    if plot.width <= 0.0 || plot.depth <= 0.0 {
        return Err(LayoutError::NonPositivePlot);
    }

    let sales_building = place_sales_building(plot, &request.sales_building, rules)?;
    debug!(position = ?sales_building.position, "sales building placed");

    let mpds = place_mpds(plot, request.mpds.count, &sales_building, rules)?;
    let tanks = place_tanks(plot, request.tanks.count, &sales_building, rules)?;
    debug!(
        mpd_count = mpds.len(),
        tank_count = tanks.centers.len(),
        "layout validated"
    );

    Ok(Layout {
        sales_building,
        tanks,
        mpds,
        entry_side: request.sales_building.entry_side,
    })
}
