use std::error::Error;
use std::fmt;

use crate::core::actions::render_frame::RenderFrameError;
use crate::core::data::palette::PaletteError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::viewport::ViewportError;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Viewport(ViewportError),
    Palette(PaletteError),
    Frame(PixelRectError),
    Render(RenderFrameError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Palette(err) => write!(f, "palette error: {}", err),
            Self::Frame(err) => write!(f, "frame size error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::Frame(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<ViewportError> for SessionError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<PaletteError> for SessionError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<PixelRectError> for SessionError {
    fn from(err: PixelRectError) -> Self {
        Self::Frame(err)
    }
}

impl From<RenderFrameError> for SessionError {
    fn from(err: RenderFrameError) -> Self {
        Self::Render(err)
    }
}
