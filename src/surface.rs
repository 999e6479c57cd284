//! Tabulation of two-argument functions on a rectangular grid.

use ndarray::Array2;

use crate::grid::Grid;

/// Values of a two-argument function on the cartesian product of two
/// uniform [`Grid`]s: `z[[i, j]] = f(x1[i], x2[j])`.
#[derive(Debug, Clone)]
pub struct Surface {
    x1: Vec<f64>,
    x2: Vec<f64>,
    z: Array2<f64>,
}

impl Surface {
    /// Evaluate `f` at every node of the grid `g1 × g2`.
    pub fn tabulate<F>(mut f: F, g1: &Grid, g2: &Grid) -> Surface
    where F: FnMut(f64, f64) -> f64 {
        let x1: Vec<f64> = g1.iter().collect();
        let x2: Vec<f64> = g2.iter().collect();
        let z = Array2::from_shape_fn((x1.len(), x2.len()),
                                      |(i, j)| f(x1[i], x2[j]));
        Surface { x1, x2, z }
    }

    /// The first-axis grid values.
    #[inline]
    pub fn x1(&self) -> &[f64] {
        &self.x1
    }

    /// The second-axis grid values.
    #[inline]
    pub fn x2(&self) -> &[f64] {
        &self.x2
    }

    /// Value at the grid node `(i, j)`.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.z[[i, j]]
    }

    /// Value at the grid coordinates `(x1, x2)`.  The node is located by
    /// binary search; callers pass coordinates taken from [`Surface::x1`]
    /// and [`Surface::x2`].
    pub fn value_at(&self, x1: f64, x2: f64) -> f64 {
        let i = index_of(&self.x1, x1);
        let j = index_of(&self.x2, x2);
        self.z[[i, j]]
    }

    /// Smallest interval containing all finite values.
    pub fn z_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &z in self.z.iter() {
            if z.is_finite() {
                if z < min { min = z }
                if z > max { max = z }
            }
        }
        (min, max)
    }
}

fn index_of(axis: &[f64], v: f64) -> usize {
    axis.partition_point(|&a| a < v).min(axis.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::Surface;
    use crate::grid::Grid;

    fn small() -> Surface {
        let g1 = Grid::with_points(0., 2., 3).unwrap();
        let g2 = Grid::with_points(0., 3., 4).unwrap();
        Surface::tabulate(|x1, x2| 10. * x1 + x2, &g1, &g2)
    }

    #[test]
    fn nodes_match_the_function() {
        let s = small();
        assert_eq!(s.x1().len(), 3);
        assert_eq!(s.x2().len(), 4);
        assert_eq!(s.value(0, 0), 0.);
        assert_eq!(s.value(2, 3), 23.);
        assert_eq!(s.value(1, 2), 12.);
    }

    #[test]
    fn value_at_locates_grid_coordinates() {
        let s = small();
        for (i, &x1) in s.x1().iter().enumerate() {
            for (j, &x2) in s.x2().iter().enumerate() {
                assert_eq!(s.value_at(x1, x2), s.value(i, j));
            }
        }
    }

    #[test]
    fn z_range_spans_the_values() {
        assert_eq!(small().z_range(), (0., 23.));
    }
}
