//! Coarse site screening
//!
//! A cheap feasibility screen the form collaborator runs before invoking
//! the placement engine: catches hopeless sites (undersized plots, missing
//! selections) with friendlier failures than a deep placement error. It is
//! intentionally NOT part of the validation orchestrator: engine callers
//! get exact placement errors, screen callers get the coarse ones.

use crate::core::error::{LayoutError, Result};
use crate::request::LayoutRequest;
use crate::rules::RuleTable;

/// Screen a request for gross infeasibility without placing anything.
///
/// Checks run in a fixed order and the first failure wins, mirroring the
/// orchestrator's short-circuit policy.
pub fn screen_site(request: &LayoutRequest, rules: &RuleTable) -> Result<()> {
    let location = request.location.ok_or(LayoutError::NonFiniteLocation)?;
    if !location.latitude.is_finite() || !location.longitude.is_finite() {
        return Err(LayoutError::NonFiniteLocation);
    }

    let plot = &request.plot;
    if !plot.width.is_finite() || !plot.depth.is_finite() {
        return Err(LayoutError::NonFinitePlot);
    }
    if plot.width <= 0.0 || plot.depth <= 0.0 {
        return Err(LayoutError::NonPositivePlot);
    }

    let tank_count = request.tanks.count;
    if !(1..=3).contains(&tank_count) {
        return Err(LayoutError::UnsupportedTankCount(tank_count));
    }
    if request.tanks.installation.is_none() {
        return Err(LayoutError::MissingTankInstallation);
    }

    let mpd_count = request.mpds.count;
    if mpd_count != 2 && mpd_count != 4 {
        return Err(LayoutError::UnsupportedMpdCount(mpd_count));
    }

    if plot.width < rules.min_frontage || plot.depth < rules.min_depth {
        return Err(LayoutError::PlotTooSmall);
    }

    // Orientation is ignored here: the screen reasons in nominal building
    // depth, as a surveyor would before any placement is attempted.
    let (_, building_depth) = request.sales_building.building_type.dimensions();
    if building_depth + rules.tank_zone_reserve + rules.safety_buffer > plot.depth {
        return Err(LayoutError::DepthInsufficientForBuilding);
    }

    if mpd_count as f64 * rules.mpd_width > plot.width {
        return Err(LayoutError::FrontageTooSmallForMpds);
    }

    if request.road_type.is_highway() && plot.depth < rules.highway_min_depth {
        return Err(LayoutError::HighwayDepthInsufficient);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{
        EntrySide, Orientation, Plot, PositionPreference, RoadType, SalesBuildingType,
        TankInstallation,
    };
    use crate::request::{MpdRequest, SalesBuildingSpec, SiteLocation, TankRequest};

    fn request() -> LayoutRequest {
        LayoutRequest {
            plot: Plot { width: 30.0, depth: 40.0 },
            road_type: RoadType::NationalHighway,
            sales_building: SalesBuildingSpec {
                building_type: SalesBuildingType::Type3,
                orientation: Orientation::Front,
                position: PositionPreference::FrontCenter,
                entry_side: EntrySide::Road,
            },
            tanks: TankRequest { count: 2, installation: Some(TankInstallation::EarthPit) },
            mpds: MpdRequest { count: 4 },
            location: Some(SiteLocation { latitude: 28.61, longitude: 77.21 }),
        }
    }

    #[test]
    fn test_canonical_request_passes() {
        assert!(screen_site(&request(), &RuleTable::default()).is_ok());
    }

    #[test]
    fn test_missing_location_fails() {
        let mut r = request();
        r.location = None;
        let err = screen_site(&r, &RuleTable::default()).unwrap_err();
        assert!(matches!(err, LayoutError::NonFiniteLocation));
    }

    #[test]
    fn test_non_finite_location_fails() {
        let mut r = request();
        r.location = Some(SiteLocation { latitude: f64::NAN, longitude: 77.21 });
        let err = screen_site(&r, &RuleTable::default()).unwrap_err();
        assert!(matches!(err, LayoutError::NonFiniteLocation));
    }

    #[test]
    fn test_missing_installation_fails() {
        let mut r = request();
        r.tanks.installation = None;
        let err = screen_site(&r, &RuleTable::default()).unwrap_err();
        assert!(matches!(err, LayoutError::MissingTankInstallation));
    }

    #[test]
    fn test_zero_tanks_rejected_by_screen() {
        // The engine accepts an empty tank farm; the screen requires a
        // selection because every real outlet stores fuel
        let mut r = request();
        r.tanks.count = 0;
        let err = screen_site(&r, &RuleTable::default()).unwrap_err();
        assert!(matches!(err, LayoutError::UnsupportedTankCount(0)));
    }

    #[test]
    fn test_undersized_plot_fails() {
        let mut r = request();
        r.plot = Plot { width: 18.0, depth: 40.0 };
        let err = screen_site(&r, &RuleTable::default()).unwrap_err();
        assert!(matches!(err, LayoutError::PlotTooSmall));

        let mut r = request();
        r.plot = Plot { width: 30.0, depth: 28.0 };
        let err = screen_site(&r, &RuleTable::default()).unwrap_err();
        assert!(matches!(err, LayoutError::PlotTooSmall));
    }

    #[test]
    fn test_deep_building_with_reserves_fails() {
        // With the stock 30 m depth minimum the reserve check can never
        // bind (9 + 10 + 5 <= 30); a relaxed site rulebook exposes it
        let rules = crate::rules::parse_rule_table("[screening]\nmin_depth = 20\n").unwrap();
        let mut r = request();
        r.road_type = RoadType::City;
        r.sales_building.building_type = SalesBuildingType::Type5;
        r.plot = Plot { width: 30.0, depth: 22.0 };
        let err = screen_site(&r, &rules).unwrap_err();
        assert!(matches!(err, LayoutError::DepthInsufficientForBuilding));
    }

    #[test]
    fn test_coarse_frontage_check() {
        // Same story: reachable only when the frontage minimum is relaxed
        let rules = crate::rules::parse_rule_table("[screening]\nmin_frontage = 10\n").unwrap();
        let mut r = request();
        r.road_type = RoadType::City;
        r.plot = Plot { width: 14.0, depth: 40.0 };
        r.mpds.count = 4;
        let err = screen_site(&r, &rules).unwrap_err();
        assert!(matches!(err, LayoutError::FrontageTooSmallForMpds));
    }

    #[test]
    fn test_highway_needs_extra_depth() {
        let mut r = request();
        r.plot = Plot { width: 30.0, depth: 32.0 };
        let err = screen_site(&r, &RuleTable::default()).unwrap_err();
        assert!(matches!(err, LayoutError::HighwayDepthInsufficient));

        // The same plot on a city road passes
        r.road_type = RoadType::City;
        assert!(screen_site(&r, &RuleTable::default()).is_ok());
    }
}
