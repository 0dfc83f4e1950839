// Copyright @yucwang 2023

use super::constants::{ Float, TWO_PI };

/// Lazily yields `num` evenly spaced values from `start` to `stop`, both ends included.
pub fn linspace(start: Float, stop: Float, num: usize) -> impl Iterator<Item = Float> + Clone {
    let step = if num > 1 { (stop - start) / (num - 1) as Float } else { 0.0 };
    (0..num).map(move |i| {
        if num > 1 && i == num - 1 {
            stop
        } else {
            start + step * i as Float
        }
    })
}

/// Angles of a closed polyline around one full turn.
pub fn circle_angles(samples: usize) -> impl Iterator<Item = Float> + Clone {
    linspace(0.0, TWO_PI, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let values: Vec<Float> = linspace(-1.0, 1.0, 5).collect();
        assert_eq!(values, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
        assert_eq!(linspace(3.0, 7.0, 1).collect::<Vec<_>>(), vec![3.0]);
    }

    #[test]
    fn circle_angles_close_the_loop() {
        let angles: Vec<Float> = circle_angles(100).collect();
        assert_eq!(angles.len(), 100);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[99], TWO_PI);
        let step = angles[1] - angles[0];
        assert!((step - TWO_PI / 99.0).abs() < 1e-12);
    }
}
