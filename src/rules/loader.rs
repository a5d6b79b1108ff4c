//! Load rule-table overrides from TOML files

use crate::rules::RuleTable;
use std::fs;
use std::path::Path;

/// Load a rule table from a TOML file, overlaying recognized values onto the
/// built-in defaults. Keys that are absent keep their default.
pub fn load_rule_table(path: &Path) -> Result<RuleTable, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_rule_table(&content)
}

/// Parse a TOML overlay. Sections mirror the rulebook areas:
///
/// ```toml
/// [zoning]
/// front_zone_max_depth_ratio = 0.3
///
/// [tanks]
/// boundary_clearance = 4.0
///
/// [mpds]
/// row_gaps = [6.0, 4.0, 3.0, 2.0]
/// search_step = 0.25
/// ```
pub fn parse_rule_table(content: &str) -> Result<RuleTable, String> {
    let toml: toml::Value = content.parse().map_err(|e| format!("Invalid TOML: {}", e))?;

    let mut rules = RuleTable::default();

    if let Some(zoning) = toml.get("zoning").and_then(|v| v.as_table()) {
        override_f64(zoning, "front_zone_max_depth_ratio", &mut rules.front_zone_max_depth_ratio);
        override_f64(zoning, "rear_zone_min_depth_ratio", &mut rules.rear_zone_min_depth_ratio);
    }

    if let Some(sb) = toml.get("sales_building").and_then(|v| v.as_table()) {
        override_f64(sb, "min_front_offset", &mut rules.sb_min_front_offset);
        override_f64(sb, "side_margin", &mut rules.sb_side_margin);
    }

    if let Some(tanks) = toml.get("tanks").and_then(|v| v.as_table()) {
        override_f64(tanks, "radius", &mut rules.tank_radius);
        override_f64(tanks, "spacing", &mut rules.tank_spacing);
        override_f64(tanks, "boundary_clearance", &mut rules.tank_boundary_clearance);
        override_f64(tanks, "building_clearance", &mut rules.tank_building_clearance);
    }

    if let Some(mpds) = toml.get("mpds").and_then(|v| v.as_table()) {
        override_f64(mpds, "width", &mut rules.mpd_width);
        override_f64(mpds, "depth", &mut rules.mpd_depth);
        override_f64(mpds, "column_gap", &mut rules.mpd_column_gap);
        override_f64(mpds, "building_clearance", &mut rules.mpd_building_clearance);
        override_f64(mpds, "search_step", &mut rules.mpd_search_step);
        override_f64(mpds, "frontage_margin", &mut rules.mpd_frontage_margin);

        if let Some(gaps) = mpds.get("row_gaps").and_then(|v| v.as_array()) {
            let parsed: Vec<f64> = gaps.iter().filter_map(as_f64).collect();
            if parsed.len() != gaps.len() {
                return Err("mpds.row_gaps must be an array of numbers".into());
            }
            if parsed.is_empty() {
                return Err("mpds.row_gaps must not be empty".into());
            }
            rules.mpd_row_gaps = parsed;
        }
    }

    if let Some(screening) = toml.get("screening").and_then(|v| v.as_table()) {
        override_f64(screening, "min_frontage", &mut rules.min_frontage);
        override_f64(screening, "min_depth", &mut rules.min_depth);
        override_f64(screening, "highway_min_depth", &mut rules.highway_min_depth);
        override_f64(screening, "tank_zone_reserve", &mut rules.tank_zone_reserve);
        override_f64(screening, "safety_buffer", &mut rules.safety_buffer);
    }

    Ok(rules)
}

fn override_f64(table: &toml::value::Table, key: &str, slot: &mut f64) {
    if let Some(value) = table.get(key).and_then(as_f64) {
        *slot = value;
    }
}

// TOML distinguishes integer and float literals; accept both.
fn as_f64(value: &toml::Value) -> Option<f64> {
    match value {
        toml::Value::Float(f) => Some(*f),
        toml::Value::Integer(i) => Some(*i as f64),
        _ => None,
    }
}
