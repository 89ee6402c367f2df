use crate::core::data::colour::Colour;

/// Maps one per-pixel value to a colour. Must be total: every value has a
/// colour.
pub trait ColourMap<T>: Sync {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
