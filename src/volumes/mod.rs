// Copyright @yucwang 2026

pub mod cube;
pub mod sphere;

use std::fmt;

use crate::core::params::{ ConfigError, ParamStore };
use crate::core::plot::{ Dimensionality, LineStyle, PlotAxes };
use crate::math::constants::{ Float, Vector3f };
use crate::math::range::Bounds;

use self::cube::Cube;
use self::sphere::Sphere;

pub const KEY_PREFIX: &str = "flydra/tracking_volume";
pub const KEY_SHAPE: &str = "flydra/tracking_volume/shape";
pub const KEY_RADIUS: &str = "flydra/tracking_volume/r";

/// Region in which tracked positions are considered valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackingVolume {
    Unbounded,
    Cube(Cube),
    Sphere(Sphere),
}

impl TrackingVolume {
    pub fn kind(&self) -> &'static str {
        match self {
            TrackingVolume::Unbounded => "unbounded",
            TrackingVolume::Cube(_) => "cube",
            TrackingVolume::Sphere(_) => "sphere",
        }
    }

    pub fn inside(&self, x: Float, y: Float, z: Float) -> bool {
        match self {
            TrackingVolume::Unbounded => true,
            TrackingVolume::Cube(cube) => cube.inside(x, y, z),
            TrackingVolume::Sphere(sphere) => sphere.inside(x, y, z),
        }
    }

    pub fn inside_point(&self, p: &Vector3f) -> bool {
        self.inside(p.x, p.y, p.z)
    }

    /// Draws the volume outline. Unbounded and cube volumes draw nothing.
    pub fn draw<A: PlotAxes + ?Sized>(&self, axes: &mut A, dims: Dimensionality, style: &LineStyle) {
        match self {
            TrackingVolume::Unbounded | TrackingVolume::Cube(_) => {}
            TrackingVolume::Sphere(sphere) => sphere.draw(axes, dims, style),
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            TrackingVolume::Unbounded => Bounds::unit(),
            TrackingVolume::Cube(cube) => cube.bounds(),
            TrackingVolume::Sphere(sphere) => sphere.bounds(),
        }
    }

    /// Sets the axis limits from `bounds()`. The y limit is taken from the
    /// x range, as existing plots expect.
    pub fn apply_bounds<A: PlotAxes + ?Sized>(&self, axes: &mut A, dims: Dimensionality) {
        set_axis_limits(axes, &self.bounds(), dims);
    }
}

fn set_axis_limits<A: PlotAxes + ?Sized>(axes: &mut A, bounds: &Bounds, dims: Dimensionality) {
    if dims.is_3d() {
        axes.set_zlim(bounds.z);
    }
    axes.set_xlim(bounds.x);
    axes.set_ylim(bounds.x);
}

impl Default for TrackingVolume {
    fn default() -> Self {
        TrackingVolume::Unbounded
    }
}

impl From<Cube> for TrackingVolume {
    fn from(cube: Cube) -> Self {
        TrackingVolume::Cube(cube)
    }
}

impl From<Sphere> for TrackingVolume {
    fn from(sphere: Sphere) -> Self {
        TrackingVolume::Sphere(sphere)
    }
}

impl fmt::Display for TrackingVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingVolume::Sphere(sphere) => write!(f, "sphere(r = {})", sphere.radius()),
            _ => f.write_str(self.kind()),
        }
    }
}

/// Builds the tracking volume selected by `flydra/tracking_volume/shape`.
///
/// A missing shape, or any shape other than `sphere`, gives an unbounded
/// volume. `cube` has no branch here yet and also gives an unbounded volume.
/// `ParamStore` trims stored values, so `" sphere "` selects a sphere too.
pub fn get_tracking_volume(params: &ParamStore) -> Result<TrackingVolume, ConfigError> {
    let kind = match params.get(KEY_SHAPE) {
        Ok(kind) => kind,
        Err(_) => {
            log::warn!("{} not set, tracking volume is unbounded.", KEY_SHAPE);
            ""
        }
    };

    let volume = match kind {
        "sphere" => TrackingVolume::Sphere(Sphere::from_params(params)?),
        "cube" => {
            log::warn!("Cube tracking volume is not supported, using unbounded.");
            TrackingVolume::Unbounded
        }
        _ => TrackingVolume::Unbounded,
    };

    log::info!("Tracking volume: {}, bounds = {:?}.", volume, volume.bounds().as_tuples());
    Ok(volume)
}
