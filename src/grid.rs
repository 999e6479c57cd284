//! Uniform discretisations of a closed interval.

use crate::errors::{TabError, TabResult};

/// An evenly spaced grid on a closed interval \[`a`, `b`\].
///
/// Values are generated as `a + i * step`, so no rounding error
/// accumulates along the grid.  The last point is snapped onto `b`
/// whenever the step divides the interval evenly (up to one part in 10⁹
/// of the step).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    a: f64,
    b: f64,
    step: f64,
    n: usize,
    snap_last: bool,
}

impl Grid {
    /// Grid on \[`a`, `b`\] with spacing `step`.  Both endpoints belong
    /// to the grid when `step` divides `b - a` evenly; otherwise the grid
    /// stops at the last multiple of `step` that fits.
    pub fn with_step(a: f64, b: f64, step: f64) -> TabResult<Grid> {
        Self::check_bounds(a, b)?;
        if !step.is_finite() || step <= 0. {
            return Err(TabError::invalid_range(
                format!("step = {} must be positive and finite", step)));
        }
        let k = ((b - a) / step * (1. + 1e-9)).floor();
        let snap_last = ((b - a) - k * step).abs() <= step * 1e-9;
        Ok(Grid { a, b, step, n: k as usize + 1, snap_last })
    }

    /// Grid of `n` evenly spaced points on \[`a`, `b`\], both endpoints
    /// included.
    pub fn with_points(a: f64, b: f64, n: usize) -> TabResult<Grid> {
        Self::check_bounds(a, b)?;
        if n < 2 {
            return Err(TabError::invalid_range(
                format!("n = {} must at least be 2", n)));
        }
        let step = (b - a) / (n - 1) as f64;
        Ok(Grid { a, b, step, n, snap_last: true })
    }

    fn check_bounds(a: f64, b: f64) -> TabResult<()> {
        if !a.is_finite() {
            return Err(TabError::invalid_range(
                format!("a = {} must be finite", a)));
        }
        if !b.is_finite() {
            return Err(TabError::invalid_range(
                format!("b = {} must be finite", b)));
        }
        if a >= b {
            return Err(TabError::invalid_range(
                format!("range [{}, {}] is empty", a, b)));
        }
        Ok(())
    }

    /// Number of grid points.
    #[inline]
    pub fn points(&self) -> usize {
        self.n
    }

    /// Distance between consecutive grid points.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The `i`-th grid value.
    #[inline]
    pub fn value(&self, i: usize) -> f64 {
        if i + 1 == self.n && self.snap_last {
            self.b
        } else {
            self.a + i as f64 * self.step
        }
    }

    /// Iterate over the grid values in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n).map(move |i| self.value(i))
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::errors::TabError;

    fn values(g: &Grid) -> Vec<f64> {
        g.iter().collect()
    }

    #[test]
    fn step_grid_covers_range() {
        let g = Grid::with_step(-10., 10., 0.5).unwrap();
        let xs = values(&g);
        assert_eq!(xs.len(), 41);
        assert_eq!(xs[0], -10.);
        assert_eq!(xs[40], 10.);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn step_grid_stops_before_uneven_end() {
        let g = Grid::with_step(0., 1., 0.3).unwrap();
        let xs = values(&g);
        assert_eq!(xs.len(), 4);
        assert!((xs[3] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn point_grid_hits_both_endpoints() {
        let g = Grid::with_points(-10., 10., 200).unwrap();
        let xs = values(&g);
        assert_eq!(xs.len(), 200);
        assert_eq!(xs[0], -10.);
        assert_eq!(xs[199], 10.);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        for r in [Grid::with_step(f64::NAN, 1., 0.1),
                  Grid::with_step(0., f64::INFINITY, 0.1),
                  Grid::with_step(1., 0., 0.1),
                  Grid::with_step(0., 0., 0.1),
                  Grid::with_step(0., 1., 0.),
                  Grid::with_step(0., 1., -0.5),
                  Grid::with_points(0., 1., 1)] {
            assert!(matches!(r, Err(TabError::InvalidRange(_))));
        }
    }

    #[test]
    fn random_point_grids_are_strictly_increasing() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen_range(-100.0..100.0);
            let b = a + rng.gen_range(0.1..50.0);
            let n = rng.gen_range(2..200);
            let g = Grid::with_points(a, b, n).unwrap();
            let xs = values(&g);
            assert_eq!(xs.len(), n);
            assert_eq!(xs[0], a);
            assert_eq!(xs[n - 1], b);
            assert!(xs.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
