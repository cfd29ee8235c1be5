mod encoding;
mod font;

pub use encoding::TextEncoding;
pub use font::Font;

impl Font {
    /// Encoding used for strings shown with this font
    pub fn text_encoding(&self) -> TextEncoding {
        if self.is_symbolic() {
            TextEncoding::BuiltIn
        } else {
            TextEncoding::WinAnsiEncoding
        }
    }

    /// `/Encoding` entry for the font dictionary, if any
    pub fn encoding_name(&self) -> Option<&'static str> {
        match self.text_encoding() {
            TextEncoding::WinAnsiEncoding => Some("WinAnsiEncoding"),
            TextEncoding::BuiltIn => None,
        }
    }
}
