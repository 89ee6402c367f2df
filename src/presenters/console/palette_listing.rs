use std::io::{self, Write};

use crate::core::data::palette::Palette;

/// Dumps the palette in a form that can be pasted back as a preset.
pub fn write_palette_listing<W: Write>(palette: &Palette, out: &mut W) -> io::Result<()> {
    writeln!(out, "saved_palette {{")?;
    for colour in palette.colours() {
        writeln!(out, "    {},", colour)?;
    }
    writeln!(out, "}};")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn lists_one_colour_per_line() {
        let palette = Palette::new(vec![Colour::BLACK, Colour::new(0, 7, 100)]).unwrap();
        let mut out = Vec::new();

        write_palette_listing(&palette, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "saved_palette {\n    {0, 0, 0},\n    {0, 7, 100},\n};\n"
        );
    }
}
