pub mod controllers;
pub mod core;
pub mod presenters;
pub mod session;

pub use controllers::cli::cli_controller::{CaptureError, CliController};
pub use crate::core::actions::render_frame::{FrameStats, RenderFrameError, RenderedFrame, render_frame};
pub use crate::core::colour_mapping::palette_interpolation::colour_for;
pub use crate::core::colour_mapping::palette_presets::PalettePreset;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::palette::Palette;
pub use crate::core::data::pixel_rect::PixelRect;
pub use crate::core::fractals::formula::Formula;
pub use crate::core::viewport::{PanDirection, Viewport, ZoomTarget};
pub use presenters::console::palette_listing::write_palette_listing;
pub use presenters::file::ppm::PpmFilePresenter;
pub use session::{ExplorerCommand, ExplorerSession, ExplorerSettings, ZoomDirection};
