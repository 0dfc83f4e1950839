// Copyright @yucwang 2026

use crate::core::params::{ ConfigError, ParamStore };
use crate::math::constants::Float;
use crate::math::range::{ AxisRange, Bounds };

use super::KEY_PREFIX;

/// Axis-aligned box read from `x_min` .. `z_max`.
///
/// The configured extent is kept, but `inside` and `bounds` still answer
/// with the unconstrained defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    extent: Bounds,
}

impl Cube {
    pub fn new(extent: Bounds) -> Self {
        Self { extent }
    }

    pub fn from_params(params: &ParamStore) -> Result<Self, ConfigError> {
        let axis = |name: &str| -> Result<AxisRange, ConfigError> {
            let min = params.get_float(&format!("{}/{}_min", KEY_PREFIX, name))?;
            let max = params.get_float(&format!("{}/{}_max", KEY_PREFIX, name))?;
            Ok(AxisRange::new(min, max))
        };
        let extent = Bounds::new(axis("x")?, axis("y")?, axis("z")?);
        log::debug!("Cube tracking volume extent = {:?}.", extent);
        Ok(Cube::new(extent))
    }

    pub fn extent(&self) -> Bounds {
        self.extent
    }

    // TODO: test against `extent` once get_tracking_volume gains a "cube" branch.
    pub fn inside(&self, _x: Float, _y: Float, _z: Float) -> bool {
        true
    }

    // TODO: derive from `extent` together with `inside`.
    pub fn bounds(&self) -> Bounds {
        Bounds::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_params() -> ParamStore {
        ParamStore::new()
            .with("flydra/tracking_volume/x_min", "-0.5")
            .with("flydra/tracking_volume/x_max", "0.5")
            .with("flydra/tracking_volume/y_min", "-0.25")
            .with("flydra/tracking_volume/y_max", "0.25")
            .with("flydra/tracking_volume/z_min", "0")
            .with("flydra/tracking_volume/z_max", "0.3")
    }

    #[test]
    fn cube_reads_extent() {
        let cube = Cube::from_params(&cube_params()).unwrap();
        assert_eq!(cube.extent().as_tuples(), ((-0.5, 0.5), (-0.25, 0.25), (0.0, 0.3)));
    }

    #[test]
    fn cube_missing_or_bad_key() {
        let mut params = cube_params();
        params.set("flydra/tracking_volume/z_max", "high");
        assert!(matches!(Cube::from_params(&params), Err(ConfigError::NotNumeric { .. })));

        let params = ParamStore::new().with("flydra/tracking_volume/x_min", "-1");
        match Cube::from_params(&params) {
            Err(ConfigError::MissingKey(key)) => assert_eq!(key, "flydra/tracking_volume/x_max"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn cube_keeps_unit_defaults() {
        let cube = Cube::from_params(&cube_params()).unwrap();
        assert_eq!(cube.bounds(), Bounds::unit());
        assert!(cube.inside(10.0, -10.0, 10.0));
    }
}
