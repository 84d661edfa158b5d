use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point in canvas coordinates (pixels, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the origin in direction `angle` (radians).
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        Self {
            x: self.x / len,
            y: self.y / len,
        }
    }

    /// Rotate about the origin by `angle` radians.
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin_r, cos_r) = angle.sin_cos();
        Self {
            x: self.x * cos_r - self.y * sin_r,
            y: self.x * sin_r + self.y * cos_r,
        }
    }

    /// Rotate by `factor`'s angle and scale by its length in one step.
    ///
    /// This is the product of the two points read as complex numbers; with a
    /// unit-length factor it is a pure rotation.
    pub fn spin(&self, factor: &Point) -> Self {
        Self {
            x: self.x * factor.x - self.y * factor.y,
            y: self.x * factor.y + self.y * factor.x,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Box spanning `[-half.x, half.x] x [-half.y, half.y]`.
    pub fn centered(half: Point) -> Self {
        Self::new(-half, half)
    }

    /// Inclusive on every edge.
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// A closed polygon; the last vertex connects back to the first.
///
/// Transforms return a new polygon and leave the receiver untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Point) -> Point,
    {
        Self {
            vertices: self.vertices.iter().map(|&p| f(p)).collect(),
        }
    }

    pub fn translated(&self, offset: Point) -> Self {
        self.map(|p| p + offset)
    }

    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|p| p * factor)
    }

    pub fn rotated(&self, angle: f64) -> Self {
        self.map(|p| p.rotate(angle))
    }

    pub fn spun(&self, factor: &Point) -> Self {
        self.map(|p| p.spin(factor))
    }
}
