use crate::error::{DrawError, Result};
use std::str::FromStr;

/// The 14 standard PDF fonts.
///
/// Standard fonts are guaranteed to be available in all PDF readers
/// and don't need to be embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica (sans-serif)
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Helvetica Oblique (italic)
    HelveticaOblique,
    /// Helvetica Bold Oblique
    HelveticaBoldOblique,
    /// Times Roman (serif)
    TimesRoman,
    /// Times Bold
    TimesBold,
    /// Times Italic
    TimesItalic,
    /// Times Bold Italic
    TimesBoldItalic,
    /// Courier (monospace)
    Courier,
    /// Courier Bold
    CourierBold,
    /// Courier Oblique
    CourierOblique,
    /// Courier Bold Oblique
    CourierBoldOblique,
    /// Symbol font (mathematical symbols)
    Symbol,
    /// ZapfDingbats (decorative symbols)
    ZapfDingbats,
}

const ALL_FONTS: [Font; 14] = [
    Font::Helvetica,
    Font::HelveticaBold,
    Font::HelveticaOblique,
    Font::HelveticaBoldOblique,
    Font::TimesRoman,
    Font::TimesBold,
    Font::TimesItalic,
    Font::TimesBoldItalic,
    Font::Courier,
    Font::CourierBold,
    Font::CourierOblique,
    Font::CourierBoldOblique,
    Font::Symbol,
    Font::ZapfDingbats,
];

impl Font {
    /// Get the PDF base font name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Font::TimesRoman => "Times-Roman",
            Font::TimesBold => "Times-Bold",
            Font::TimesItalic => "Times-Italic",
            Font::TimesBoldItalic => "Times-BoldItalic",
            Font::Courier => "Courier",
            Font::CourierBold => "Courier-Bold",
            Font::CourierOblique => "Courier-Oblique",
            Font::CourierBoldOblique => "Courier-BoldOblique",
            Font::Symbol => "Symbol",
            Font::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Four-letter short name accepted in instruction files (`helv`, `tibo`, ...)
    pub fn short_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "helv",
            Font::HelveticaBold => "hebo",
            Font::HelveticaOblique => "heit",
            Font::HelveticaBoldOblique => "hebi",
            Font::TimesRoman => "tiro",
            Font::TimesBold => "tibo",
            Font::TimesItalic => "tiit",
            Font::TimesBoldItalic => "tibi",
            Font::Courier => "cour",
            Font::CourierBold => "cobo",
            Font::CourierOblique => "coit",
            Font::CourierBoldOblique => "cobi",
            Font::Symbol => "symb",
            Font::ZapfDingbats => "zadb",
        }
    }

    /// Check if this font is symbolic (doesn't use text encodings)
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Font::Symbol | Font::ZapfDingbats)
    }

    /// Look up a font by short name or PDF base font name, ignoring case
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        ALL_FONTS
            .iter()
            .copied()
            .find(|font| {
                font.short_name().eq_ignore_ascii_case(name)
                    || font.pdf_name().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| DrawError::FontError(format!("Unknown font '{name}'")))
    }
}

impl FromStr for Font {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        Font::from_name(s)
    }
}
