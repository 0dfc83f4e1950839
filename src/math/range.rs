// Copyright 2020 @TwoCookingMice

use super::constants::{ Float, Vector3f };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisRange {
    pub min: Float,
    pub max: Float
}

impl AxisRange {
    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }

    /// Range covering `[-half_extent, half_extent]`.
    pub fn symmetric(half_extent: Float) -> Self {
        Self { min: -half_extent, max: half_extent }
    }

    pub fn unit() -> Self {
        Self::symmetric(1.0)
    }

    /// Inverted range that any `expand_by` call turns valid.
    pub fn empty() -> Self {
        Self { min: Float::INFINITY, max: Float::NEG_INFINITY }
    }

    pub fn expand_by(&mut self, value: Float) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn span(&self) -> Float {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    pub fn as_tuple(&self) -> (Float, Float) {
        (self.min, self.max)
    }
}

impl From<(Float, Float)> for AxisRange {
    fn from(range: (Float, Float)) -> Self {
        AxisRange::new(range.0, range.1)
    }
}

/// Per-axis display ranges of a tracking volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange
}

impl Bounds {
    pub fn new(x: AxisRange, y: AxisRange, z: AxisRange) -> Self {
        Self { x, y, z }
    }

    pub fn unit() -> Self {
        Self::cube(1.0)
    }

    pub fn cube(half_extent: Float) -> Self {
        let range = AxisRange::symmetric(half_extent);
        Self { x: range, y: range, z: range }
    }

    pub fn corners(&self) -> [Vector3f; 8] {
        let (x0, x1) = self.x.as_tuple();
        let (y0, y1) = self.y.as_tuple();
        let (z0, z1) = self.z.as_tuple();
        [
            Vector3f::new(x0, y0, z0), Vector3f::new(x1, y0, z0),
            Vector3f::new(x0, y1, z0), Vector3f::new(x1, y1, z0),
            Vector3f::new(x0, y0, z1), Vector3f::new(x1, y0, z1),
            Vector3f::new(x0, y1, z1), Vector3f::new(x1, y1, z1),
        ]
    }

    pub fn as_tuples(&self) -> ((Float, Float), (Float, Float), (Float, Float)) {
        (self.x.as_tuple(), self.y.as_tuple(), self.z.as_tuple())
    }
}

/* Test for AxisRange and Bounds */
#[cfg(test)]
mod tests {
    use super::{ AxisRange, Bounds };

    #[test]
    fn test_axis_range_expand() {
        let mut range = AxisRange::empty();
        assert!(!range.is_valid());

        for v in &[0.5, -2.0, 3.0] {
            range.expand_by(*v);
        }
        assert!(range.is_valid());
        assert_eq!(range.as_tuple(), (-2.0, 3.0));
        assert!((range.span() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_cube() {
        let bounds = Bounds::cube(2.5);
        assert_eq!(bounds.as_tuples(), ((-2.5, 2.5), (-2.5, 2.5), (-2.5, 2.5)));
        assert_eq!(Bounds::unit().x, AxisRange::from((-1.0, 1.0)));

        let corners = bounds.corners();
        assert_eq!(corners.len(), 8);
        assert!(corners.iter().all(|c| c.x.abs() == 2.5 && c.y.abs() == 2.5 && c.z.abs() == 2.5));
    }
}
