pub mod palette_interpolation;
pub mod palette_presets;
pub mod palette_reserve;
