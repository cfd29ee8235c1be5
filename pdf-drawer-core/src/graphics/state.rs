//! Extended graphics state (ExtGState) for stroke and fill opacity
//!
//! Only the constant alpha entries (`CA` for stroking, `ca` for
//! non-stroking operations) are produced.

use lopdf::{dictionary, Dictionary, Object};

/// Opacity settings applied through a `gs` operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtGState {
    alpha_stroke: f64,
    alpha_fill: f64,
}

impl Default for ExtGState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtGState {
    /// Fully opaque state
    pub fn new() -> Self {
        Self {
            alpha_stroke: 1.0,
            alpha_fill: 1.0,
        }
    }

    /// Set alpha constant for stroking operations (NaN is ignored)
    pub fn with_alpha_stroke(mut self, alpha: f64) -> Self {
        if !alpha.is_nan() {
            self.alpha_stroke = alpha.clamp(0.0, 1.0);
        }
        self
    }

    /// Set alpha constant for non-stroking operations (NaN is ignored)
    pub fn with_alpha_fill(mut self, alpha: f64) -> Self {
        if !alpha.is_nan() {
            self.alpha_fill = alpha.clamp(0.0, 1.0);
        }
        self
    }

    pub fn alpha_stroke(&self) -> f64 {
        self.alpha_stroke
    }

    pub fn alpha_fill(&self) -> f64 {
        self.alpha_fill
    }

    /// Check if any transparency parameters are set
    pub fn uses_transparency(&self) -> bool {
        self.alpha_stroke < 1.0 || self.alpha_fill < 1.0
    }

    /// Hashable identity, used to share one dictionary between equal states
    pub fn cache_key(&self) -> (u64, u64) {
        (self.alpha_stroke.to_bits(), self.alpha_fill.to_bits())
    }

    /// Generate the PDF dictionary
    pub fn to_dictionary(&self) -> Dictionary {
        dictionary! {
            "Type" => "ExtGState",
            "CA" => Object::Real(self.alpha_stroke as f32),
            "ca" => Object::Real(self.alpha_fill as f32),
        }
    }
}
