use crate::core::data::point::Point;
use crate::core::fractals::formula::Formula;
use crate::core::viewport::PanDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Input events an explorer session reacts to, already translated from
/// keys, wheel and mouse by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerCommand {
    Pan(PanDirection),
    Drag { from: Point, to: Point },
    Zoom { cursor: Point, direction: ZoomDirection },
    SelectFormula(Formula),
    IncreaseIterations,
    DecreaseIterations,
    ToggleIterationMode,
    GrowPalette,
    ShrinkPalette,
    RandomizePalette,
    SlowerAnimation,
    FasterAnimation,
    Screenshot,
    StartZoomOutCapture,
}
