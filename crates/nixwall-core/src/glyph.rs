//! The lambda glyph and its six-wedge snowflake.
//!
//! All geometry lives in unit space around the origin: a regular hexagon of
//! radius 0.5 whose vertex `i` sits at `-i·60°`. The lambda outline is nine
//! points placed relative to that hexagon following the NixOS brand guide
//! (<https://brand.nixos.org/documents/nixos-branding-guide.pdf>).

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::color::Fill;
use crate::geometry::{Point, Polygon};

pub const HEXAGON_RADIUS: f64 = 0.5;

/// Offset used for most outline construction steps (a quarter of the edge).
const STEP: f64 = 0.125;

/// How far along the hexagon's 4th vertex each wedge is pushed out.
const WEDGE_OFFSET: f64 = 9.0 / 4.0;

/// Vertex `i` of the construction hexagon.
pub fn hexagon_vertex(i: usize) -> Point {
    Point::from_polar(HEXAGON_RADIUS, -(i as f64) / 6.0 * TAU)
}

pub fn hexagon() -> [Point; 6] {
    std::array::from_fn(hexagon_vertex)
}

/// Unit direction from `from` towards `to`.
fn toward(from: Point, to: Point) -> Point {
    (to - from).normalized()
}

/// Named vertices of the lambda outline, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LambdaOutline {
    pub upper_apex: Point,
    pub upper_notch: Point,
    pub midpoint_join: Point,
    pub rear_notch: Point,
    pub rear_foot: Point,
    pub rear_heel: Point,
    pub joint_crotch: Point,
    pub forward_heel: Point,
    pub forward_tip: Point,
}

impl LambdaOutline {
    pub fn from_hexagon(hex: &[Point; 6]) -> Self {
        let along_spine = toward(hex[2], hex[5]) * (STEP / 2.0);
        let midpoint_join = Point::new(-STEP, 0.0);
        Self {
            upper_apex: hex[2] + toward(hex[3], hex[2]) * STEP + along_spine,
            upper_notch: hex[2] + toward(hex[2], hex[3]) * STEP + along_spine,
            midpoint_join,
            rear_notch: hex[4] + toward(hex[4], hex[3]) * STEP,
            rear_foot: hex[4],
            rear_heel: hex[4].translate(STEP, 0.0),
            joint_crotch: midpoint_join + toward(hex[3], hex[4]) * (2.0 * STEP),
            forward_heel: hex[5].translate(-STEP, 0.0),
            forward_tip: hex[5].translate(STEP, 0.0),
        }
    }

    pub fn points(&self) -> [Point; 9] {
        [
            self.upper_apex,
            self.upper_notch,
            self.midpoint_join,
            self.rear_notch,
            self.rear_foot,
            self.rear_heel,
            self.joint_crotch,
            self.forward_heel,
            self.forward_tip,
        ]
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.points().to_vec())
    }
}

/// One of the six rotated lambdas composing the large mark.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub polygon: Polygon,
    pub fill: Fill,
}

/// Precomputed unit-space glyph: hexagon, lambda outline and wedge layout.
#[derive(Debug, Clone)]
pub struct GlyphGeometry {
    hexagon: [Point; 6],
    outline: LambdaOutline,
}

impl GlyphGeometry {
    pub fn new() -> Self {
        let hexagon = hexagon();
        let outline = LambdaOutline::from_hexagon(&hexagon);
        Self { hexagon, outline }
    }

    pub fn hexagon_polygon(&self) -> Polygon {
        Polygon::new(self.hexagon.to_vec())
    }

    /// The lambda as a closed nine-point polygon, unscaled.
    pub fn lambda(&self) -> Polygon {
        self.outline.to_polygon()
    }

    /// The lambda shifted so its rear foot lands 9/4 of the way out along
    /// hexagon vertex 4, before any rotation.
    pub fn wedge_base(&self) -> Polygon {
        let shift = self.hexagon[4] * WEDGE_OFFSET - self.outline.rear_foot;
        self.lambda().translated(shift)
    }

    /// Six wedges in unit space, wedge `i` spun by hexagon vertex `i` and
    /// filled with `palette[i % 2]`.
    pub fn wedges(&self, palette: &[String; 2]) -> Vec<Wedge> {
        let base = self.wedge_base();
        self.hexagon
            .iter()
            .enumerate()
            .map(|(index, vertex)| Wedge {
                index,
                polygon: base.spun(vertex),
                fill: Fill::Named(palette[index % 2].clone()),
            })
            .collect()
    }
}

impl Default for GlyphGeometry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> [String; 2] {
        ["#4d6fb7".to_string(), "#5fb8f2".to_string()]
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance_to(&b) < 1e-9
    }

    #[test]
    fn test_hexagon_is_regular_and_clockwise() {
        let hex = hexagon();
        assert!(close(hex[0], Point::new(0.5, 0.0)));
        for i in 0..6 {
            assert!((hex[i].length() - HEXAGON_RADIUS).abs() < 1e-12);
            let edge = hex[i].distance_to(&hex[(i + 1) % 6]);
            assert!((edge - HEXAGON_RADIUS).abs() < 1e-12);
        }
        // Vertex 1 sits at -60°, i.e. negative y.
        assert!(hex[1].y < 0.0);
    }

    #[test]
    fn test_outline_construction() {
        let hex = hexagon();
        let o = LambdaOutline::from_hexagon(&hex);
        assert_eq!(o.rear_foot, hex[4]);
        assert!(close(o.midpoint_join, Point::new(-0.125, 0.0)));
        assert!(close(o.rear_heel, hex[4] + Point::new(0.125, 0.0)));
        assert!(close(o.forward_heel, hex[5] - Point::new(0.125, 0.0)));
        assert!(close(o.forward_tip, hex[5] + Point::new(0.125, 0.0)));
        assert!((o.rear_notch.distance_to(&hex[4]) - 0.125).abs() < 1e-12);
        assert!((o.joint_crotch.distance_to(&o.midpoint_join) - 0.25).abs() < 1e-12);
        // Apex and notch straddle vertex 2 along the 2-3 edge.
        assert!((o.upper_apex.distance_to(&o.upper_notch) - 0.25).abs() < 1e-12);
        assert_eq!(o.to_polygon().vertex_count(), 9);
    }

    #[test]
    fn test_wedges_alternate_palette() {
        let glyph = GlyphGeometry::new();
        let wedges = glyph.wedges(&palette());
        assert_eq!(wedges.len(), 6);
        for w in &wedges {
            let expected = if w.index % 2 == 0 { "#4d6fb7" } else { "#5fb8f2" };
            assert_eq!(w.fill, Fill::named(expected));
            assert_eq!(w.polygon.vertex_count(), 9);
        }
    }

    #[test]
    fn test_wedges_are_rotations_of_one_shape() {
        let glyph = GlyphGeometry::new();
        let wedges = glyph.wedges(&palette());
        let reference = glyph.wedge_base().scaled(HEXAGON_RADIUS);
        for w in &wedges {
            // Vertex i sits at -i·60°, so turning back by +i·60° undoes it.
            let undone = w.polygon.rotated(w.index as f64 * TAU / 6.0);
            for (p, q) in undone.vertices.iter().zip(&reference.vertices) {
                assert!(close(*p, *q), "wedge {} vertex {:?} != {:?}", w.index, p, q);
            }
        }
    }
}
