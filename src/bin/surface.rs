//! Sample the Levy function on \[-10, 10\] × \[-10, 10\] and render the
//! four-panel composite view under `results/`.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::Result;
use functab::{CompositeChart, Grid, SampleSet, Surface};

const RESULTS_DIR: &str = "results";
const POINTS_PER_AXIS: usize = 200;

/// Levy function: w_i = 1 + (x_i − 1)/4,
/// f = sin²(π w1) + (w1−1)²·(1 + 10 sin²(π w1 + 1))
///   + (w2−1)²·(1 + sin²(2π w2)).
fn levy(x1: f64, x2: f64) -> f64 {
    let w1 = 1. + (x1 - 1.) / 4.;
    let w2 = 1. + (x2 - 1.) / 4.;
    let term1 = (PI * w1).sin().powi(2);
    let term2 = (w1 - 1.).powi(2) * (1. + 10. * (PI * w1 + 1.).sin().powi(2));
    let term3 = (w2 - 1.).powi(2) * (1. + (2. * PI * w2).sin().powi(2));
    term1 + term2 + term3
}

fn main() -> Result<()> {
    env_logger::init();

    let g1 = Grid::with_points(-10., 10., POINTS_PER_AXIS)?;
    let g2 = Grid::with_points(-10., 10., POINTS_PER_AXIS)?;
    let surface = Surface::tabulate(levy, &g1, &g2);

    let (c1, c2) = (1., 1.);
    let slice_x1 = SampleSet::tabulate(|x1| levy(x1, c2), &g1);
    let slice_x2 = SampleSet::tabulate(|x2| levy(c1, x2), &g2);

    let chart = Path::new(RESULTS_DIR).join("levy_panels.png");
    CompositeChart::new(&surface, &slice_x1, &slice_x2, (c1, c2))
        .title("f(x1, x2)")
        .save(&chart)?;
    println!("chart written to {}", chart.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::levy;

    #[test]
    fn global_minimum_at_one_one() {
        // w1 = w2 = 1 kills every term.
        assert!(levy(1., 1.).abs() < 1e-12);
        assert!(levy(0., 0.) > 0.);
        assert!(levy(-10., 10.) > 0.);
    }
}
