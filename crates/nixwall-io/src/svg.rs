//! SVG 1.1 serialization of a composed [`Scene`].
//!
//! Each scene shape maps to exactly one element, in scene order:
//! `Rect` → `<rect>`, `Circle` → `<circle>`, `Polygon` → `<polygon>`.
//! Fills are either `rgb(r g b)` or the literal color string.

use std::io::{self, Write as _};

use thiserror::Error;

use nixwall_core::color::{Fill, Rgb8};
use nixwall_core::geometry::Polygon;
use nixwall_core::scene::{Paint, Scene, SceneShape, Shape};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Non-finite coordinate in shape {index}")]
    NonFinite { index: usize },
}

fn rgb_string(c: Rgb8) -> String {
    format!("rgb({} {} {})", c.r, c.g, c.b)
}

fn fill_string(fill: &Fill) -> String {
    match fill {
        Fill::Rgb(c) => rgb_string(*c),
        Fill::Named(name) => name.clone(),
    }
}

/// `x,y` pairs separated by single spaces.
pub fn points_attr(poly: &Polygon) -> String {
    poly.vertices
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint_attrs(paint: &Paint) -> String {
    match paint {
        Paint::Fill(fill) => format!("fill=\"{}\"", fill_string(fill)),
        Paint::Stroke(stroke) => format!("stroke=\"{}\" fill=\"none\"", fill_string(stroke)),
    }
}

fn shape_is_finite(shape: &Shape) -> bool {
    match shape {
        Shape::Rect {
            origin,
            width,
            height,
        } => origin.is_finite() && width.is_finite() && height.is_finite(),
        Shape::Circle { center, radius } => center.is_finite() && radius.is_finite(),
        Shape::Polygon(poly) => poly.vertices.iter().all(|p| p.is_finite()),
    }
}

/// Render a single shape as one SVG element (no trailing newline).
pub fn shape_element(shape: &SceneShape) -> String {
    let paint = paint_attrs(&shape.paint);
    match &shape.shape {
        Shape::Rect {
            origin,
            width,
            height,
        } => {
            let position = if origin.x != 0.0 || origin.y != 0.0 {
                format!("x=\"{}\" y=\"{}\" ", origin.x, origin.y)
            } else {
                String::new()
            };
            format!("<rect {position}width=\"{width}\" height=\"{height}\" {paint} />")
        }
        Shape::Circle { center, radius } => format!(
            "<circle {paint} cx=\"{}\" cy=\"{}\" r=\"{radius}\" />",
            center.x, center.y
        ),
        Shape::Polygon(poly) => format!("<polygon {paint} points=\"{}\" />", points_attr(poly)),
    }
}

pub struct SvgWriter<W: io::Write> {
    writer: W,
    indent: &'static str,
}

impl<W: io::Write> SvgWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            indent: "    ",
        }
    }

    /// Write the whole document. Fails before emitting anything if a shape
    /// carries a NaN or infinite coordinate.
    pub fn write(&mut self, scene: &Scene) -> Result<(), SvgError> {
        if let Some(index) = scene.shapes.iter().position(|s| !shape_is_finite(&s.shape)) {
            return Err(SvgError::NonFinite { index });
        }

        self.write_header(scene)?;
        for shape in &scene.shapes {
            writeln!(self.writer, "{}{}", self.indent, shape_element(shape))?;
        }
        self.write_footer()?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_header(&mut self, scene: &Scene) -> Result<(), SvgError> {
        writeln!(
            self.writer,
            "<svg version=\"1.1\" width=\"{}\" height=\"{}\" xmlns=\"{}\">",
            scene.canvas.width, scene.canvas.height, SVG_NAMESPACE
        )?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<(), SvgError> {
        writeln!(self.writer, "</svg>")?;
        Ok(())
    }
}

/// Render a scene to an in-memory document.
pub fn render_document(scene: &Scene) -> Result<Vec<u8>, SvgError> {
    let mut buffer: Vec<u8> = Vec::new();
    SvgWriter::new(&mut buffer).write(scene)?;
    Ok(buffer)
}
