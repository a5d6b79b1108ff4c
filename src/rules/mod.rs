//! The rule table: physical constants governing every placement decision
//!
//! All clearances, spacings, and search parameters are collected here with
//! explanations of their purpose. The table is built once at startup and
//! passed by shared reference into every placement function; it is never
//! mutated, so concurrent read access from a parallel host is safe.

mod loader;

pub use loader::{load_rule_table, parse_rule_table};

/// Numeric constants of the layout rulebook, all in meters.
///
/// Per-variant tables (sales-building dimensions, highway lane geometry)
/// live on their enums in [`crate::core::types`].
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    // === ZONING ===
    /// Upper bound of the front zone as a fraction of plot depth.
    ///
    /// The front zone hosts the sales building and, as a fallback, the
    /// dispenser grid.
    pub front_zone_max_depth_ratio: f64,

    /// Lower bound of the rear zone as a fraction of plot depth.
    ///
    /// Everything between the front and rear bounds is the middle
    /// (dispensing) zone.
    pub rear_zone_min_depth_ratio: f64,

    // === SALES BUILDING ===
    /// Setback of the building's front face from the road edge.
    pub sb_min_front_offset: f64,

    /// Horizontal margin kept between the building and the side boundaries
    /// for the left/right anchor preferences.
    pub sb_side_margin: f64,

    // === UNDERGROUND TANKS ===
    /// Radius of one tank circle.
    pub tank_radius: f64,

    /// Edge-to-edge spacing between adjacent tanks in the column.
    pub tank_spacing: f64,

    /// Minimum edge-to-boundary clearance from any tank to any plot edge.
    pub tank_boundary_clearance: f64,

    /// Minimum edge-to-edge clearance from any tank to the sales building.
    pub tank_building_clearance: f64,

    // === DISPENSER ISLANDS ===
    /// Footprint of one island.
    pub mpd_width: f64,
    pub mpd_depth: f64,

    /// Horizontal gap between islands in a row.
    pub mpd_column_gap: f64,

    /// Minimum edge-to-edge clearance from any island to the sales building.
    pub mpd_building_clearance: f64,

    /// Row gaps tried in order of preference. Larger gaps give service
    /// vehicles more room, so the search tries them first.
    pub mpd_row_gaps: Vec<f64>,

    /// Vertical step of the start-position search.
    ///
    /// Empirically chosen; finer steps do not change scenario outcomes,
    /// they only slow the search.
    pub mpd_search_step: f64,

    /// Margin kept between the grid and the side boundaries.
    pub mpd_frontage_margin: f64,

    // === SITE SCREENING ===
    /// Smallest workable frontage for any outlet.
    pub min_frontage: f64,

    /// Smallest workable depth for any outlet.
    pub min_depth: f64,

    /// Minimum depth when the site fronts a national or state highway.
    pub highway_min_depth: f64,

    /// Depth reserved behind the building for the tank farm.
    pub tank_zone_reserve: f64,

    /// Extra depth reserved between building and tank farm.
    pub safety_buffer: f64,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            front_zone_max_depth_ratio: 0.30,
            rear_zone_min_depth_ratio: 0.65,
            sb_min_front_offset: 2.0,
            sb_side_margin: 2.0,
            tank_radius: 1.5,
            tank_spacing: 1.5,
            tank_boundary_clearance: 4.0,
            tank_building_clearance: 15.0,
            mpd_width: 4.0,
            mpd_depth: 3.0,
            mpd_column_gap: 2.0,
            mpd_building_clearance: 8.0,
            mpd_row_gaps: vec![6.0, 4.0, 3.0, 2.0],
            mpd_search_step: 0.25,
            mpd_frontage_margin: 2.0,
            min_frontage: 20.0,
            min_depth: 30.0,
            highway_min_depth: 35.0,
            tank_zone_reserve: 10.0,
            safety_buffer: 5.0,
        }
    }
}
