//! OKLCH → sRGB conversion chain.
//!
//! Coefficients are the published OKLab reference transform
//! (<https://bottosson.github.io/posts/oklab/>) and the exact sRGB breakpoint
//! from <https://entropymine.com/imageworsener/srgbformula/>. Every function
//! here is total over the reals; nothing is clamped until [`Rgb8::from_rgb`].

use serde::{Deserialize, Serialize};

/// Linear-light value at which the sRGB curve switches from linear to power.
pub const SRGB_BREAKPOINT: f64 = 0.00313066844250063;

/// Factor applied to the gamma-encoded channels to reach display range.
pub const CHANNEL_SCALE: f64 = 256.0;

/// Cylindrical OKLab: lightness, chroma, hue in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Rectangular OKLab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Linear-light RGB, nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Gamma-encoded sRGB, nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Display-range RGB (0..256), neither rounded nor clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// 8-bit color ready to embed in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Round each channel to the nearest integer and clamp into [0, 255].
    pub fn from_rgb(c: Rgb) -> Self {
        fn channel(v: f64) -> u8 {
            if v.is_nan() {
                return 0;
            }
            v.round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: channel(c.r),
            g: channel(c.g),
            b: channel(c.b),
        }
    }
}

/// Paint for a scene shape: a computed color or a literal markup color
/// (`"black"`, `"#4d6fb7"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    Rgb(Rgb8),
    Named(String),
}

impl Fill {
    pub fn named(color: &str) -> Self {
        Fill::Named(color.to_string())
    }
}

impl From<Rgb8> for Fill {
    fn from(c: Rgb8) -> Self {
        Fill::Rgb(c)
    }
}

/// Accepts CSS color keywords (ASCII letters only) and `#rgb` / `#rrggbb`.
pub fn is_valid_color_literal(color: &str) -> bool {
    if let Some(hex) = color.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let (sin_h, cos_h) = c.h.sin_cos();
    OkLab {
        l: c.l,
        a: c.c * cos_h,
        b: c.c * sin_h,
    }
}

pub fn linear_srgb_to_oklab(c: LinearRgb) -> OkLab {
    let l = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    OkLab {
        l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    }
}

pub fn oklab_to_linear_srgb(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Piecewise sRGB transfer function for a single channel.
pub fn srgb_encode(linear: f64) -> f64 {
    if linear <= SRGB_BREAKPOINT {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

pub fn linear_srgb_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: srgb_encode(c.r),
        g: srgb_encode(c.g),
        b: srgb_encode(c.b),
    }
}

/// Full chain: OKLCH → OKLab → linear sRGB → sRGB → 0..256 range.
pub fn oklch_to_rgb(c: OkLch) -> Rgb {
    let srgb = linear_srgb_to_srgb(oklab_to_linear_srgb(oklch_to_oklab(c)));
    Rgb {
        r: srgb.r * CHANNEL_SCALE,
        g: srgb.g * CHANNEL_SCALE,
        b: srgb.b * CHANNEL_SCALE,
    }
}
