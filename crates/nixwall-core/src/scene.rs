use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{oklch_to_rgb, Fill, OkLch, Rgb8};
use crate::config::{Canvas, ConfigError, GeneratorConfig};
use crate::geometry::{BBox, Point, Polygon};
use crate::glyph::GlyphGeometry;
use crate::sampler::distribute_disc;

/// A drawable primitive in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect { origin: Point, width: f64, height: f64 },
    Circle { center: Point, radius: f64 },
    Polygon(Polygon),
}

/// How a shape is painted. `Stroke` leaves the interior empty and is only
/// used by the diagnostic overlays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paint {
    Fill(Fill),
    Stroke(Fill),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneShape {
    pub shape: Shape,
    pub paint: Paint,
}

impl SceneShape {
    pub fn filled(shape: Shape, fill: Fill) -> Self {
        Self {
            shape,
            paint: Paint::Fill(fill),
        }
    }

    pub fn stroked(shape: Shape, stroke: Fill) -> Self {
        Self {
            shape,
            paint: Paint::Stroke(stroke),
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self.paint, Paint::Stroke(_))
    }
}

/// The composed image. Shapes are in paint order: later ones cover earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub shapes: Vec<SceneShape>,
    /// Number of scatter candidates that survived exclusion.
    pub scatter_accepted: usize,
    pub scatter_rejected: usize,
}

impl Scene {
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}

/// Why a scatter candidate was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    NearCenter,
}

/// Builds the wallpaper scene from a validated [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct SceneComposer {
    config: GeneratorConfig,
    glyph: GlyphGeometry,
}

impl SceneComposer {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            glyph: GlyphGeometry::new(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn glyph(&self) -> &GlyphGeometry {
        &self.glyph
    }

    fn canvas(&self) -> Canvas {
        self.config.canvas
    }

    /// Rectangle (centered on the origin) outside of which scatter is dropped.
    pub fn scatter_bounds(&self) -> BBox {
        BBox::centered(self.canvas().size() * (1.0 / self.config.bounds_divisor))
    }

    /// Radius of the keep-out circle around the central glyph.
    pub fn exclusion_radius(&self) -> f64 {
        self.canvas().icon_scale() / self.config.exclusion_divisor
    }

    /// Spiral candidates, relative to the canvas center, spread over a disc
    /// of half the canvas diagonal.
    pub fn scatter_candidates(&self) -> impl Iterator<Item = Point> {
        let radius = self.canvas().diagonal() / 2.0;
        distribute_disc(self.config.scatter_count).map(move |p| p * radius)
    }

    /// Candidates on the bounds edge or exactly on the exclusion circle are kept.
    pub fn check_candidate(&self, p: &Point) -> Result<(), Rejection> {
        if !self.scatter_bounds().contains_point(p) {
            return Err(Rejection::OutOfBounds);
        }
        if p.length() < self.exclusion_radius() {
            return Err(Rejection::NearCenter);
        }
        Ok(())
    }

    pub fn random_color<R: Rng>(&self, rng: &mut R) -> Rgb8 {
        let [l_min, l_max] = self.config.lightness;
        let [h_min, h_max] = self.config.hue;
        let l = l_min + rng.gen::<f64>() * (l_max - l_min);
        let h = (h_min + rng.gen::<f64>() * (h_max - h_min)).to_radians();
        Rgb8::from_rgb(oklch_to_rgb(OkLch {
            l,
            c: self.config.chroma,
            h,
        }))
    }

    /// A small lambda at `p` (relative to center), randomly turned and colored.
    pub fn scatter_shape<R: Rng>(&self, p: Point, rng: &mut R) -> SceneShape {
        let canvas = self.canvas();
        let angle = rng.gen::<f64>() * TAU;
        let polygon = self
            .glyph
            .lambda()
            .scaled(canvas.icon_scale() / self.config.small_glyph_divisor)
            .rotated(angle)
            .translated(p + canvas.center());
        SceneShape::filled(Shape::Polygon(polygon), Fill::Rgb(self.random_color(rng)))
    }

    pub fn background(&self) -> SceneShape {
        let canvas = self.canvas();
        SceneShape::filled(
            Shape::Rect {
                origin: Point::ORIGIN,
                width: canvas.width,
                height: canvas.height,
            },
            Fill::named(&self.config.background),
        )
    }

    /// Guide circle, construction hexagon and bare lambda at icon scale.
    pub fn debug_overlay(&self) -> Vec<SceneShape> {
        let canvas = self.canvas();
        let color = Fill::named(&self.config.debug_color);
        let place = |poly: Polygon| poly.scaled(canvas.icon_scale()).translated(canvas.center());
        vec![
            SceneShape::stroked(
                Shape::Circle {
                    center: canvas.center(),
                    radius: canvas.icon_scale() / 2.0,
                },
                color.clone(),
            ),
            SceneShape::stroked(
                Shape::Polygon(place(self.glyph.hexagon_polygon())),
                color.clone(),
            ),
            SceneShape::filled(Shape::Polygon(place(self.glyph.lambda())), color),
        ]
    }

    /// The six large wedges, placed at the canvas center.
    pub fn central_glyph(&self) -> Vec<SceneShape> {
        let canvas = self.canvas();
        self.glyph
            .wedges(&self.config.wedge_colors)
            .into_iter()
            .map(|w| {
                let polygon = w
                    .polygon
                    .scaled(canvas.icon_scale())
                    .translated(canvas.center());
                SceneShape::filled(Shape::Polygon(polygon), w.fill)
            })
            .collect()
    }

    /// Background first, then scatter, then the central glyph on top.
    pub fn compose<R: Rng>(&self, rng: &mut R) -> Scene {
        let mut shapes = vec![self.background()];
        if self.config.debug_overlay {
            shapes.extend(self.debug_overlay());
        }

        let mut accepted = 0;
        let mut rejected = 0;
        for p in self.scatter_candidates() {
            if self.check_candidate(&p).is_err() {
                rejected += 1;
                continue;
            }
            shapes.push(self.scatter_shape(p, rng));
            accepted += 1;
        }
        log::debug!(
            "Scatter: {} of {} candidates accepted ({} rejected)",
            accepted,
            self.config.scatter_count,
            rejected
        );

        shapes.extend(self.central_glyph());

        Scene {
            canvas: self.canvas(),
            shapes,
            scatter_accepted: accepted,
            scatter_rejected: rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn composer_with(scatter_count: usize) -> SceneComposer {
        let config = GeneratorConfig {
            scatter_count,
            ..Default::default()
        };
        SceneComposer::new(config).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GeneratorConfig {
            canvas: Canvas::new(f64::INFINITY, 1440.0),
            ..Default::default()
        };
        assert!(SceneComposer::new(config).is_err());
    }

    #[test]
    fn test_exclusion_boundaries() {
        let composer = composer_with(0);
        let r = 720.0 / 1.7;
        assert!((composer.exclusion_radius() - r).abs() < 1e-12);

        assert_eq!(
            composer.check_candidate(&Point::ORIGIN),
            Err(Rejection::NearCenter)
        );
        assert_eq!(
            composer.check_candidate(&Point::new(r * 0.999, 0.0)),
            Err(Rejection::NearCenter)
        );
        assert!(composer.check_candidate(&Point::new(r, 0.0)).is_ok());
        assert!(composer.check_candidate(&Point::new(0.0, -r)).is_ok());
    }

    #[test]
    fn test_bounds_are_rectangular() {
        let composer = composer_with(0);
        let bx = 2560.0 / 1.9;
        let by = 1440.0 / 1.9;
        assert!(composer.check_candidate(&Point::new(bx, 0.0)).is_ok());
        assert!(composer.check_candidate(&Point::new(-bx, -by)).is_ok());
        assert_eq!(
            composer.check_candidate(&Point::new(bx + 1e-6, 0.0)),
            Err(Rejection::OutOfBounds)
        );
        assert_eq!(
            composer.check_candidate(&Point::new(0.0, by + 1e-6)),
            Err(Rejection::OutOfBounds)
        );
    }

    #[test]
    fn test_empty_scatter_still_has_glyph() {
        let composer = composer_with(0);
        let mut rng = StdRng::seed_from_u64(7);
        let scene = composer.compose(&mut rng);
        assert_eq!(scene.shape_count(), 7);
        assert_eq!(scene.scatter_accepted, 0);
        assert!(matches!(scene.shapes[0].shape, Shape::Rect { .. }));
        for (i, shape) in scene.shapes[1..].iter().enumerate() {
            let expected = if i % 2 == 0 { "#4d6fb7" } else { "#5fb8f2" };
            assert_eq!(shape.paint, Paint::Fill(Fill::named(expected)));
        }
    }

    #[test]
    fn test_paint_order() {
        let composer = composer_with(2500);
        let mut rng = StdRng::seed_from_u64(2025);
        let scene = composer.compose(&mut rng);

        assert!(scene.scatter_accepted > 0);
        assert_eq!(scene.scatter_accepted + scene.scatter_rejected, 2500);
        assert_eq!(scene.shape_count(), 1 + scene.scatter_accepted + 6);
        assert_eq!(
            scene.shapes[0].paint,
            Paint::Fill(Fill::named("black"))
        );
        let n = scene.shape_count();
        for shape in &scene.shapes[1..n - 6] {
            assert!(matches!(shape.paint, Paint::Fill(Fill::Rgb(_))));
        }
        for shape in &scene.shapes[n - 6..] {
            assert!(matches!(shape.paint, Paint::Fill(Fill::Named(_))));
        }
    }

    #[test]
    fn test_seeded_scene_is_reproducible() {
        let composer = composer_with(300);
        let a = composer.compose(&mut StdRng::seed_from_u64(1));
        let b = composer.compose(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_scatter_shapes_stay_outside_exclusion() {
        let composer = composer_with(2500);
        let center = composer.config().canvas.center();
        let keep_out = composer.exclusion_radius();
        let lambda_reach = composer
            .glyph()
            .lambda()
            .vertices
            .iter()
            .map(|p| p.length())
            .fold(0.0, f64::max)
            * 720.0
            / 25.0;

        let scene = composer.compose(&mut StdRng::seed_from_u64(99));
        let n = scene.shape_count();
        for shape in &scene.shapes[1..n - 6] {
            let Shape::Polygon(poly) = &shape.shape else {
                panic!("scatter shapes are polygons");
            };
            assert_eq!(poly.vertex_count(), 9);
            for v in &poly.vertices {
                assert!(v.distance_to(&center) >= keep_out - lambda_reach - 1e-9);
            }
        }
    }

    #[test]
    fn test_central_glyph_is_sixfold() {
        let composer = composer_with(0);
        let center = composer.config().canvas.center();
        let wedges = composer.central_glyph();
        let first = match &wedges[0].shape {
            Shape::Polygon(p) => p.translated(-center),
            _ => unreachable!(),
        };
        for (i, w) in wedges.iter().enumerate() {
            let Shape::Polygon(poly) = &w.shape else {
                unreachable!()
            };
            let undone = poly.translated(-center).rotated(i as f64 * TAU / 6.0);
            for (p, q) in undone.vertices.iter().zip(&first.vertices) {
                assert!(p.distance_to(q) < 1e-6);
            }
        }
    }

    #[test]
    fn test_random_color_range() {
        let composer = composer_with(0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let c = composer.random_color(&mut rng);
            // Dark, low-chroma colors: nothing near white.
            assert!(c.r < 200 && c.g < 200 && c.b < 200, "{c:?}");
        }
    }

    #[test]
    fn test_debug_overlay_layer() {
        let config = GeneratorConfig {
            scatter_count: 0,
            debug_overlay: true,
            ..Default::default()
        };
        let composer = SceneComposer::new(config).unwrap();
        let scene = composer.compose(&mut StdRng::seed_from_u64(0));
        assert_eq!(scene.shape_count(), 10);
        assert!(scene.shapes[1].is_debug());
        assert!(scene.shapes[2].is_debug());
        assert!(!scene.shapes[3].is_debug());
        assert!(matches!(scene.shapes[1].shape, Shape::Circle { .. }));
    }
}
