//! Dispenser-island (MPD) placement
//!
//! The islands form a fixed 2-row grid. Placement is a bounded search over
//! explicit candidate lists; iteration order encodes priority and is part
//! of the contract:
//!
//!   larger row gap > middle zone > front zone
//!     > centered start-x > left start-x > right start-x
//!     > smaller start-y
//!
//! The first candidate whose islands are all plot-contained and clear the
//! sales building wins.

use crate::core::error::{LayoutError, Result};
use crate::core::types::{Plot, Rect};
use crate::layout::geometry::rect_to_rect_edge_distance;
use crate::layout::sales_building::SalesBuildingPlacement;
use crate::layout::zones::Zones;
use crate::rules::RuleTable;
use tracing::debug;

const ROWS: u32 = 2;

// Slack on the top search step so accumulated 0.25 increments still reach
// an upper bound that is exactly representable.
const STEP_EPSILON: f64 = 1e-9;

/// Place `count` islands as a 2-row grid, preferring the middle zone.
///
/// Returns island rectangles in row-major order (row 0 left to right, then
/// row 1).
pub fn place_mpds(
    plot: &Plot,
    count: u32,
    building: &SalesBuildingPlacement,
    rules: &RuleTable,
) -> Result<Vec<Rect>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if count != 2 && count != 4 {
        return Err(LayoutError::UnsupportedMpdCount(count));
    }

    let cols = count / ROWS;
    let row_width =
        cols as f64 * rules.mpd_width + (cols - 1) as f64 * rules.mpd_column_gap;
    let margin = rules.mpd_frontage_margin;
    if row_width > plot.width - margin * 2.0 {
        return Err(LayoutError::MpdsExceedFrontage);
    }

    let zones = Zones::for_depth(plot.depth, rules);
    let min_start_y_middle = zones.middle.min_y + 1.0;
    let min_start_y_front = rules.sb_min_front_offset.max(zones.front.min_y) + 1.0;

    let start_x_candidates = start_x_candidates(plot.width, row_width, margin);

    for &row_gap in &rules.mpd_row_gaps {
        let grid_height = ROWS as f64 * rules.mpd_depth + (ROWS - 1) as f64 * row_gap;
        // The grid may start in the front zone but never extends past the
        // dispensing zone's rear edge.
        let max_start_y = zones.middle.max_y - grid_height;

        let placement = find_placement(
            plot, building, rules, &start_x_candidates, cols, row_gap,
            min_start_y_middle, max_start_y,
        )
        .or_else(|| {
            find_placement(
                plot, building, rules, &start_x_candidates, cols, row_gap,
                min_start_y_front, max_start_y,
            )
        });

        if let Some((start_x, start_y)) = placement {
            debug!(row_gap, start_x, start_y, "placed dispenser grid");
            return Ok(build_grid(start_x, start_y, cols, row_gap, rules));
        }
        debug!(row_gap, "no feasible dispenser start for row gap");
    }

    Err(LayoutError::MpdsCannotBePlaced)
}

/// Candidate start-x positions in priority order (centered, left margin,
/// right margin), clamped into the feasible range and deduplicated.
fn start_x_candidates(plot_width: f64, row_width: f64, margin: f64) -> Vec<f64> {
    let max_start_x = plot_width - row_width;
    let raw = [
        (plot_width - row_width) / 2.0,
        margin,
        plot_width - row_width - margin,
    ];

    let mut candidates: Vec<f64> = Vec::with_capacity(raw.len());
    let mut seen: Vec<i64> = Vec::with_capacity(raw.len());
    for x in raw {
        let clamped = x.clamp(0.0, max_start_x);
        // mm-resolution key; candidates closer than that are duplicates
        let key = (clamped * 1000.0).round() as i64;
        if !seen.contains(&key) {
            seen.push(key);
            candidates.push(clamped);
        }
    }
    candidates
}

/// Scan a vertical range for the first valid (start_x, start_y) pair.
/// Start-x candidates are the outer loop, so a fully scanned column of
/// start-y values decides before the next anchor is tried.
#[allow(clippy::too_many_arguments)]
fn find_placement(
    plot: &Plot,
    building: &SalesBuildingPlacement,
    rules: &RuleTable,
    start_x_candidates: &[f64],
    cols: u32,
    row_gap: f64,
    min_y: f64,
    max_y: f64,
) -> Option<(f64, f64)> {
    if min_y > max_y {
        return None;
    }
    for &start_x in start_x_candidates {
        let mut start_y = min_y;
        while start_y <= max_y + STEP_EPSILON {
            if grid_is_valid(plot, building, rules, start_x, start_y, cols, row_gap) {
                return Some((start_x, start_y));
            }
            start_y += rules.mpd_search_step;
        }
    }
    None
}

fn grid_is_valid(
    plot: &Plot,
    building: &SalesBuildingPlacement,
    rules: &RuleTable,
    start_x: f64,
    start_y: f64,
    cols: u32,
    row_gap: f64,
) -> bool {
    let bounds = plot.bounds();
    build_grid(start_x, start_y, cols, row_gap, rules)
        .iter()
        .all(|island| {
            bounds.contains_rect(island)
                && rect_to_rect_edge_distance(island, &building.footprint)
                    >= rules.mpd_building_clearance
        })
}

fn build_grid(start_x: f64, start_y: f64, cols: u32, row_gap: f64, rules: &RuleTable) -> Vec<Rect> {
    let mut islands = Vec::with_capacity((ROWS * cols) as usize);
    for row in 0..ROWS {
        for col in 0..cols {
            islands.push(Rect::new(
                start_x + col as f64 * (rules.mpd_width + rules.mpd_column_gap),
                start_y + row as f64 * (rules.mpd_depth + row_gap),
                rules.mpd_width,
                rules.mpd_depth,
            ));
        }
    }
    islands
}
