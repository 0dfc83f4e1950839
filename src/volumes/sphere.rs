// Copyright @yucwang 2026

use crate::core::params::{ ConfigError, ParamStore };
use crate::core::plot::{ Dimensionality, LineStyle, PlotAxes };
use crate::math::constants::Float;
use crate::math::range::Bounds;
use crate::math::sampling::circle_angles;

use super::KEY_RADIUS;

pub const CIRCLE_SAMPLES: usize = 100;
pub const POLAR_CAP_SCALE: Float = 0.05;
pub const DISPLAY_MARGIN: Float = 1.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    radius: Float,
}

impl Sphere {
    pub fn new(radius: Float) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }

    pub fn from_params(params: &ParamStore) -> Result<Self, ConfigError> {
        let radius = params.get_float(KEY_RADIUS)?;
        log::debug!("Sphere tracking volume radius = {}.", radius);
        Sphere::new(radius)
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    // TODO: test against `radius` once the always-inside behaviour is confirmed unwanted.
    pub fn inside(&self, _x: Float, _y: Float, _z: Float) -> bool {
        true
    }

    /// Equator at `z = 0`, plus two small rings marking the poles in 3-D.
    pub fn draw<A: PlotAxes + ?Sized>(&self, axes: &mut A, dims: Dimensionality, style: &LineStyle) {
        let (xs, ys) = ring(self.radius);
        match dims {
            Dimensionality::TwoD => axes.plot(&xs, &ys, None, style),
            Dimensionality::ThreeD => {
                let (cap_xs, cap_ys) = ring(POLAR_CAP_SCALE * self.radius);
                let n = xs.len();
                axes.plot(&xs, &ys, Some(&vec![0.0; n]), style);
                axes.plot(&cap_xs, &cap_ys, Some(&vec![-self.radius; n]), style);
                axes.plot(&cap_xs, &cap_ys, Some(&vec![self.radius; n]), style);
            }
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::cube(DISPLAY_MARGIN * self.radius)
    }
}

fn ring(radius: Float) -> (Vec<Float>, Vec<Float>) {
    let theta = circle_angles(CIRCLE_SAMPLES);
    let xs = theta.clone().map(|t| radius * t.cos()).collect();
    let ys = theta.map(|t| radius * t.sin()).collect();
    (xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plot::RecordingAxes;

    fn approx(a: Float, b: Float) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn sphere_rejects_bad_radius() {
        assert!(matches!(Sphere::new(0.0), Err(ConfigError::InvalidRadius(_))));
        assert!(matches!(Sphere::new(-1.0), Err(ConfigError::InvalidRadius(_))));
        assert!(matches!(Sphere::new(Float::NAN), Err(ConfigError::InvalidRadius(_))));
        assert!(matches!(Sphere::new(Float::INFINITY), Err(ConfigError::InvalidRadius(_))));
        assert_eq!(Sphere::new(0.5).unwrap().radius(), 0.5);
    }

    #[test]
    fn sphere_bounds_have_margin() {
        let sphere = Sphere::new(2.0).unwrap();
        let ((x0, x1), (y0, y1), (z0, z1)) = sphere.bounds().as_tuples();
        for v in &[x0, y0, z0] {
            assert!(approx(*v, -2.4));
        }
        for v in &[x1, y1, z1] {
            assert!(approx(*v, 2.4));
        }
    }

    #[test]
    fn sphere_draw_2d() {
        let sphere = Sphere::new(3.0).unwrap();
        let mut axes = RecordingAxes::new();
        sphere.draw(&mut axes, Dimensionality::TwoD, &LineStyle::default());

        assert_eq!(axes.curves.len(), 1);
        let curve = &axes.curves[0];
        assert_eq!(curve.len(), CIRCLE_SAMPLES);
        assert!(curve.zs.is_none());
        assert!(curve.points().all(|p| approx(p.norm(), 3.0)));
        assert!(approx(curve.xs[0], 3.0) && approx(curve.ys[0], 0.0));
    }

    #[test]
    fn sphere_draw_3d() {
        let sphere = Sphere::new(2.0).unwrap();
        let style = LineStyle::new().with_color([0, 0, 255]).with_line_width(2.0);
        let mut axes = RecordingAxes::new();
        sphere.draw(&mut axes, Dimensionality::ThreeD, &style);

        assert_eq!(axes.curves.len(), 3);
        for curve in &axes.curves {
            assert_eq!(curve.len(), CIRCLE_SAMPLES);
            assert_eq!(curve.style, style);
        }

        let expected = [(2.0, 0.0), (0.1, -2.0), (0.1, 2.0)];
        for (curve, (radius, z)) in axes.curves.iter().zip(expected.iter()) {
            for p in curve.points() {
                assert!(approx(p.xy().norm(), *radius));
                assert_eq!(p.z, *z);
            }
        }
    }

    #[test]
    fn sphere_inside_is_unconstrained() {
        let sphere = Sphere::new(1.0).unwrap();
        assert!(sphere.inside(0.0, 0.0, 0.0));
        assert!(sphere.inside(1e6, 1e6, 1e6));
    }
}
