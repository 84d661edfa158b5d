use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::is_valid_color_literal;
use crate::geometry::Point;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Canvas {axis} must be finite and positive, got {value}")]
    InvalidCanvas { axis: &'static str, value: f64 },

    #[error("Lightness range [{min}, {max}] must be finite and ordered")]
    InvalidLightness { min: f64, max: f64 },

    #[error("Hue range [{min}, {max}] must be finite and ordered")]
    InvalidHue { min: f64, max: f64 },

    #[error("Chroma must be finite and non-negative, got {0}")]
    InvalidChroma(f64),

    #[error("Divisor '{name}' must be finite and positive, got {value}")]
    InvalidDivisor { name: &'static str, value: f64 },

    #[error("Invalid color literal for {field}: '{value}'")]
    InvalidColor { field: &'static str, value: String },
}

/// Fixed canvas attributes derived from the configured size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width and height as a single vector.
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.size() * 0.5
    }

    /// Linear unit every glyph is scaled by: half the canvas height.
    pub fn icon_scale(&self) -> f64 {
        self.height / 2.0
    }

    pub fn diagonal(&self) -> f64 {
        self.size().length()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(2560.0, 1440.0)
    }
}

/// Every tunable of a generation run, with the stock wallpaper as defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub canvas: Canvas,
    pub background: String,
    /// Stroke/fill color of the diagnostic overlays.
    pub debug_color: String,
    pub debug_overlay: bool,
    /// Candidates drawn from the disc sampler before exclusion.
    pub scatter_count: usize,
    pub lightness: [f64; 2],
    pub chroma: f64,
    /// Hue range in degrees.
    pub hue: [f64; 2],
    /// Small lambdas are `icon_scale / small_glyph_divisor` across.
    pub small_glyph_divisor: f64,
    /// Scatter is rejected within `icon_scale / exclusion_divisor` of the center.
    pub exclusion_divisor: f64,
    /// Scatter is kept within `±canvas / bounds_divisor` of the center.
    pub bounds_divisor: f64,
    pub wedge_colors: [String; 2],
    pub output: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: "black".to_string(),
            debug_color: "white".to_string(),
            debug_overlay: false,
            scatter_count: 2500,
            lightness: [0.1, 0.35],
            chroma: 0.1,
            hue: [0.0, 360.0],
            small_glyph_divisor: 25.0,
            exclusion_divisor: 1.7,
            bounds_divisor: 1.9,
            wedge_colors: ["#4d6fb7".to_string(), "#5fb8f2".to_string()],
            output: "nixwall.svg".to_string(),
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDivisor { name, value })
    }
}

fn check_color(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if is_valid_color_literal(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor {
            field,
            value: value.to_string(),
        })
    }
}

impl GeneratorConfig {
    /// Reject anything that would put NaNs or broken markup into the output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.canvas.width), ("height", self.canvas.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidCanvas { axis, value });
            }
        }

        let [l_min, l_max] = self.lightness;
        if !l_min.is_finite() || !l_max.is_finite() || l_min > l_max {
            return Err(ConfigError::InvalidLightness {
                min: l_min,
                max: l_max,
            });
        }

        let [h_min, h_max] = self.hue;
        if !h_min.is_finite() || !h_max.is_finite() || h_min > h_max {
            return Err(ConfigError::InvalidHue {
                min: h_min,
                max: h_max,
            });
        }

        if !self.chroma.is_finite() || self.chroma < 0.0 {
            return Err(ConfigError::InvalidChroma(self.chroma));
        }

        check_positive("small_glyph_divisor", self.small_glyph_divisor)?;
        check_positive("exclusion_divisor", self.exclusion_divisor)?;
        check_positive("bounds_divisor", self.bounds_divisor)?;

        check_color("background", &self.background)?;
        check_color("debug_color", &self.debug_color)?;
        for color in &self.wedge_colors {
            check_color("wedge_colors", color)?;
        }
        Ok(())
    }
}
