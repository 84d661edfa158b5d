//! # Nixwall Core
//!
//! Geometry and color pipeline for the scattered-lambda wallpaper: the
//! OKLCH color chain, the golden-angle disc sampler, the lambda glyph and its
//! six-wedge mark, and the composer that places them on a canvas.
//!
//! Nothing in this crate touches the filesystem; randomness is always passed in.

pub mod color;
pub mod config;
pub mod geometry;
pub mod glyph;
pub mod sampler;
pub mod scene;

pub use color::{Fill, OkLab, OkLch, Rgb, Rgb8};
pub use config::{Canvas, ConfigError, GeneratorConfig};
pub use geometry::{BBox, Point, Polygon};
pub use glyph::GlyphGeometry;
pub use sampler::{distribute_disc, DiscSampler};
pub use scene::{Paint, Scene, SceneComposer, SceneShape, Shape};
