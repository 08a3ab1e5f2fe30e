//! Book face catalog.
//!
//! Faces are presentation data for renderers: the CSS family stack and a short style
//! note. Measurement never depends on the selected face; see `metrics` for why.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookFont {
    pub name: &'static str,
    /// CSS-style family stack with fallbacks.
    pub family: &'static str,
    pub style: &'static str,
}

pub static BOOK_FONTS: [BookFont; 15] = [
    // Classic / established book faces
    font("EB Garamond", "\"EB Garamond\", Garamond, serif", "Classic book face · 1530s"),
    font("Libre Baskerville", "\"Libre Baskerville\", Baskerville, serif", "Transitional · 1757"),
    font("Crimson Text", "\"Crimson Text\", serif", "Old-style book serif"),
    font("Lora", "Lora, serif", "Contemporary calligraphic"),
    font(
        "Source Serif 4",
        "\"Source Serif 4\", \"Source Serif Pro\", serif",
        "Adobe open-source serif",
    ),
    font("Merriweather", "Merriweather, serif", "Screen-optimized serif"),
    font("Spectral", "Spectral, serif", "Production-quality serif"),
    font(
        "Cormorant Garamond",
        "\"Cormorant Garamond\", Garamond, serif",
        "Display Garamond · elegant",
    ),
    font("Vollkorn", "Vollkorn, serif", "Bread-and-butter book font"),
    font("Bitter", "Bitter, serif", "Slab serif for reading"),
    font("Playfair Display", "\"Playfair Display\", serif", "High-contrast display · titles"),
    font("DM Serif Display", "\"DM Serif Display\", serif", "Modern display serif · titles"),
    // System fallbacks
    font("Georgia", "Georgia, serif", "System · traditional"),
    font("Palatino", "\"Palatino Linotype\", Palatino, serif", "System · elegant"),
    font("Times New Roman", "\"Times New Roman\", Times, serif", "System · standard"),
];

const fn font(name: &'static str, family: &'static str, style: &'static str) -> BookFont {
    BookFont {
        name,
        family,
        style,
    }
}

pub fn book_font(index: usize) -> Option<&'static BookFont> {
    BOOK_FONTS.get(index)
}

/// Returns the face at `index`, or the first face when the index is out of range.
/// The flag is true on fallback.
pub fn book_font_or_default(index: usize) -> (&'static BookFont, bool) {
    match book_font(index) {
        Some(font) => (font, false),
        None => (&BOOK_FONTS[0], true),
    }
}
