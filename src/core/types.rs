//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// 2D position in plot coordinates, meters.
///
/// Origin is the front-left corner of the plot; +x runs along the frontage,
/// +y runs into the plot away from the road.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle anchored at its front-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, depth: f64) -> Self {
        Self { x, y, width, depth }
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.depth
    }

    /// True when `other` lies fully inside this rectangle (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}

/// Circle given by center and radius, meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// The rectangular site under layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub width: f64,
    pub depth: f64,
}

impl Plot {
    /// The plot as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.depth)
    }
}

/// Classification of the fronting road.
///
/// Highway classes carry lane geometry used by the drawing collaborator for
/// approach annotations; it imposes no spatial constraint on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadType {
    #[serde(rename = "NH")]
    NationalHighway,
    #[serde(rename = "SH")]
    StateHighway,
    #[serde(rename = "City")]
    City,
}

impl RoadType {
    pub fn is_highway(&self) -> bool {
        matches!(self, RoadType::NationalHighway | RoadType::StateHighway)
    }

    /// Approach-lane geometry for highway classes; city roads carry none.
    pub fn geometry(&self) -> Option<RoadGeometry> {
        match self {
            RoadType::NationalHighway => Some(RoadGeometry {
                acceleration_lane: 120.0,
                deceleration_lane: 120.0,
                taper: 60.0,
            }),
            RoadType::StateHighway => Some(RoadGeometry {
                acceleration_lane: 90.0,
                deceleration_lane: 90.0,
                taper: 45.0,
            }),
            RoadType::City => None,
        }
    }
}

/// Acceleration/deceleration lane and taper lengths, meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadGeometry {
    pub acceleration_lane: f64,
    pub deceleration_lane: f64,
    pub taper: f64,
}

/// Standard sales-building size classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalesBuildingType {
    #[serde(rename = "SB Type 1")]
    Type1,
    #[serde(rename = "SB Type 2")]
    Type2,
    #[serde(rename = "SB Type 3")]
    Type3,
    #[serde(rename = "SB Type 4")]
    Type4,
    #[serde(rename = "SB Type 5")]
    Type5,
}

impl SalesBuildingType {
    /// Unrotated footprint (width, depth) in meters.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            SalesBuildingType::Type1 => (4.0, 5.0),
            SalesBuildingType::Type2 => (6.0, 6.0),
            SalesBuildingType::Type3 => (8.0, 7.0),
            SalesBuildingType::Type4 => (10.0, 8.0),
            SalesBuildingType::Type5 => (12.0, 9.0),
        }
    }
}

/// Which way the sales building faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Long edge parallel to the road.
    Front,
    /// Rotated 90°; width and depth swap.
    Side,
}

impl Orientation {
    pub fn rotation_deg(&self) -> f64 {
        match self {
            Orientation::Front => 0.0,
            Orientation::Side => 90.0,
        }
    }
}

/// Horizontal anchor preference for the sales building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionPreference {
    FrontLeft,
    FrontCenter,
    FrontRight,
}

/// Which side the sales-building entry door faces.
///
/// Passed through to the drawing collaborator; no effect on placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    Road,
    Inside,
}

/// Underground tank installation method. Screening-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TankInstallation {
    #[serde(rename = "Earth Pit")]
    EarthPit,
    #[serde(rename = "Masonry Pit")]
    MasonryPit,
}
