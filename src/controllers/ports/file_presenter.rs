use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a rendered frame to a file.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;

    /// Extension, without the dot, of the files this presenter writes.
    fn extension(&self) -> &str;
}
