use std::f64::consts::TAU;

use crate::geometry::Point;

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Golden-angle spiral over the unit disc.
///
/// Point `i` of `n` sits at angle `2π·i/φ` and radius `√(i/n)`, which keeps the
/// areal density uniform. The sequence is fully determined by `n`.
#[derive(Debug, Clone)]
pub struct DiscSampler {
    count: usize,
    next: usize,
}

impl DiscSampler {
    pub fn new(count: usize) -> Self {
        Self { count, next: 0 }
    }

    /// The `index`-th point of a `count`-point spiral.
    pub fn point_at(index: usize, count: usize) -> Point {
        let radius = (index as f64 / count as f64).sqrt();
        let angle = TAU * index as f64 / PHI;
        Point::from_polar(radius, angle)
    }
}

impl Iterator for DiscSampler {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.count {
            return None;
        }
        let p = Self::point_at(self.next, self.count);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DiscSampler {}

/// Convenience wrapper: `n` spiral points on the unit disc.
pub fn distribute_disc(n: usize) -> DiscSampler {
    DiscSampler::new(n)
}
