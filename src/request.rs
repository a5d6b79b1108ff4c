//! The input contract consumed from the form collaborator
//!
//! Field names and enum literals match the collaborator's JSON exactly and
//! are case-sensitive. Unknown enum literals are rejected at
//! deserialization, before any placement runs.

use crate::core::types::{
    EntrySide, Orientation, Plot, PositionPreference, RoadType, SalesBuildingType, TankInstallation,
};
use serde::{Deserialize, Serialize};

/// One complete layout request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub plot: Plot,
    #[serde(rename = "roadType")]
    pub road_type: RoadType,
    #[serde(rename = "salesBuilding")]
    pub sales_building: SalesBuildingSpec,
    pub tanks: TankRequest,
    pub mpds: MpdRequest,
    /// Site coordinates; required by screening, unused by placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SiteLocation>,
}

/// Sales-building selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesBuildingSpec {
    #[serde(rename = "type")]
    pub building_type: SalesBuildingType,
    pub orientation: Orientation,
    /// Accepts both the contract name and the legacy wire name.
    #[serde(rename = "positionPreference", alias = "position")]
    pub position: PositionPreference,
    #[serde(rename = "entrySide")]
    pub entry_side: EntrySide,
}

/// Underground tank selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankRequest {
    pub count: u32,
    /// Installation method; required by screening, unused by placement.
    #[serde(
        rename = "installationType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub installation: Option<TankInstallation>,
}

/// Dispenser-island selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpdRequest {
    pub count: u32,
}

/// Geographic site coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteLocation {
    pub latitude: f64,
    pub longitude: f64,
}
