use std::fmt;
use std::str::FromStr;

/// An RGB color.
///
/// Components are stored exactly as supplied; callers choose their own
/// normalization. They are clamped to 0.0-1.0 only when written to a
/// content stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Creates an RGB color without rescaling the components.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Black color (RGB 0,0,0).
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color (RGB 1,1,1).
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Red color (RGB 1,0,0).
    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    /// Green color (RGB 0,1,0).
    pub fn green() -> Self {
        Self::rgb(0.0, 1.0, 0.0)
    }

    /// Blue color (RGB 0,0,1).
    pub fn blue() -> Self {
        Self::rgb(0.0, 0.0, 1.0)
    }

    /// Components clamped to the 0.0-1.0 range a content stream accepts.
    pub fn clamped(&self) -> (f64, f64, f64) {
        (
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }
}

/// Why a color literal was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Not of the form `rgb(...)`
    UnrecognizedSyntax,
    /// The parenthesized body did not have three components
    ComponentCount(usize),
    /// A component is not a finite number
    InvalidComponent(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::UnrecognizedSyntax => write!(f, "expected rgb(R,G,B)"),
            ColorParseError::ComponentCount(n) => {
                write!(f, "expected 3 components, found {n}")
            }
            ColorParseError::InvalidComponent(c) => write!(f, "invalid component '{c}'"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Parses the literal form `rgb(R,G,B)`.
impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ColorParseError::UnrecognizedSyntax)?;

        let components: Vec<&str> = body.split(',').collect();
        if components.len() != 3 {
            return Err(ColorParseError::ComponentCount(components.len()));
        }

        let mut values = [0.0; 3];
        for (value, component) in values.iter_mut().zip(&components) {
            let component = component.trim();
            *value = component
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ColorParseError::InvalidComponent(component.to_string()))?;
        }

        Ok(Color::rgb(values[0], values[1], values[2]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::black(), Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(Color::red(), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::green(), Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(Color::blue(), Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(Color::white(), Color::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_rgb_is_not_rescaled() {
        let color = Color::rgb(255.0, 128.0, -1.0);
        assert_eq!(color.r, 255.0);
        assert_eq!(color.g, 128.0);
        assert_eq!(color.b, -1.0);
        assert_eq!(color.clamped(), (1.0, 1.0, 0.0));
    }

    #[test]
    fn test_parse_rgb_literal() {
        assert_eq!("rgb(1,0,0)".parse::<Color>(), Ok(Color::red()));
        assert_eq!(
            "rgb( 0.25 , 0.5,0.75 )".parse::<Color>(),
            Ok(Color::rgb(0.25, 0.5, 0.75))
        );
        assert_eq!(
            "rgb(255,128,0)".parse::<Color>(),
            Ok(Color::rgb(255.0, 128.0, 0.0))
        );
    }

    #[test]
    fn test_parse_rejects_other_syntax() {
        assert_eq!(
            "1,0,0".parse::<Color>(),
            Err(ColorParseError::UnrecognizedSyntax)
        );
        assert_eq!(
            "#ff0000".parse::<Color>(),
            Err(ColorParseError::UnrecognizedSyntax)
        );
        assert_eq!(
            "rgb(1,0,0".parse::<Color>(),
            Err(ColorParseError::UnrecognizedSyntax)
        );
        assert_eq!(
            "RGB(1,0,0)".parse::<Color>(),
            Err(ColorParseError::UnrecognizedSyntax)
        );
    }

    #[test]
    fn test_parse_rejects_bad_components() {
        assert_eq!(
            "rgb(1,0)".parse::<Color>(),
            Err(ColorParseError::ComponentCount(2))
        );
        assert_eq!(
            "rgb(1,0,0,1)".parse::<Color>(),
            Err(ColorParseError::ComponentCount(4))
        );
        assert_eq!(
            "rgb(1,x,0)".parse::<Color>(),
            Err(ColorParseError::InvalidComponent("x".to_string()))
        );
        assert_eq!(
            "rgb(1,,0)".parse::<Color>(),
            Err(ColorParseError::InvalidComponent(String::new()))
        );
        assert!("rgb(inf,0,0)".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let color = Color::rgb(0.5, 0.0, 1.0);
        assert_eq!(color.to_string(), "rgb(0.5,0,1)");
        assert_eq!(color.to_string().parse::<Color>(), Ok(color));
    }
}
