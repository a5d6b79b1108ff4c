use thiserror::Error;

/// Every way a layout request can fail.
///
/// Display strings are the user-visible contract: the caller surfaces exactly
/// one of these messages, never a stack trace or partial geometry.
#[derive(Error, Debug)]
pub enum LayoutError {
    // Structural failures, detected before any placement runs.
    #[error("Plot width and depth must be valid numbers")]
    NonFinitePlot,

    #[error("Plot width and depth must be greater than 0")]
    NonPositivePlot,

    // Sales building placement.
    #[error("Sales Building does not fit within Front Zone")]
    ExceedsFrontZone,

    #[error("Sales Building exceeds plot boundary")]
    OutOfBounds,

    // Tank placement.
    #[error("Unsupported tank count. Expected 1, 2, or 3")]
    UnsupportedTankCount(u32),

    #[error("Tanks cannot fit within Rear Zone with required spacing and margins")]
    TanksDoNotFit,

    #[error("Tank to plot boundary rule violated")]
    TankBoundaryViolation,

    #[error("Tank to Sales Building distance rule violated")]
    TankToBuildingViolation,

    // Dispenser placement.
    #[error("Unsupported MPD count. Expected 2 or 4")]
    UnsupportedMpdCount(u32),

    #[error("MPDs cannot fit within plot frontage with required spacing")]
    MpdsExceedFrontage,

    #[error("MPDs cannot be placed within Front/Middle Zone with required Sales Building clearance")]
    MpdsCannotBePlaced,

    // Site screening.
    #[error("Latitude & Longitude must be valid numbers")]
    NonFiniteLocation,

    #[error("Tank Installation Type must be selected")]
    MissingTankInstallation,

    #[error("Plot size too small for a forecourt layout")]
    PlotTooSmall,

    #[error("Selected Sales Building and tanks cannot fit in given plot depth")]
    DepthInsufficientForBuilding,

    #[error("Frontage too small for selected number of MPDs")]
    FrontageTooSmallForMpds,

    #[error("Plot depth insufficient for highway layout")]
    HighwayDepthInsufficient,

    // Front-door failures (CLI only).
    #[error("Rule table error: {0}")]
    Rules(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
