//! Constraint-based placement engine
//!
//! Zone derivation, clearance geometry, the three placement algorithms, and
//! the validation orchestrator that ties them together.

pub mod geometry;
pub mod mpds;
pub mod sales_building;
pub mod screening;
pub mod tanks;
pub mod validate;
pub mod zones;

pub use mpds::place_mpds;
pub use sales_building::{place_sales_building, SalesBuildingPlacement};
pub use screening::screen_site;
pub use tanks::{place_tanks, TankPlacement};
pub use validate::{validate_layout, Layout};
pub use zones::{Band, Zones};
