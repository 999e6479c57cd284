//! Sample the damped-oscillation function on \[-10, 10\] with step 0.5,
//! persist the samples under `results/` and render a line chart.

use std::path::Path;

use anyhow::Result;
use functab::{Grid, LineChart, SampleSet, write_groups, write_records};
use plotters::style::RED;

const RESULTS_DIR: &str = "results";

/// f(x) = 0.5 + (sin²(x² − A²) − 0.5) / |1 + 0.001·(x² + A²)|
fn damped_oscillation(x: f64, a: f64) -> f64 {
    let s = (x * x - a * a).sin();
    let numerator = s * s - 0.5;
    let denominator = (1. + 0.001 * (x * x + a * a)).abs();
    0.5 + numerator / denominator
}

fn main() -> Result<()> {
    env_logger::init();

    let grid = Grid::with_step(-10., 10., 0.5)?;
    let samples = SampleSet::tabulate(|x| damped_oscillation(x, 0.), &grid);
    let dir = Path::new(RESULTS_DIR);

    let records = dir.join("function_results_A0.json");
    write_records(&samples, &records)?;
    println!("samples written to {}", records.display());

    let groups = dir.join("function_results_A0.xml");
    write_groups(&samples, &groups)?;
    println!("samples written to {}", groups.display());

    let chart = dir.join("function_plot_A0.png");
    LineChart::new(&samples)
        .title("f(x) = 0.5 + sin²(x²) / (1 + 0.001·x²)")
        .x_desc("x")
        .y_desc("f(x)")
        .series_label("f(x) at A = 0")
        .color(RED)
        .save(&chart)?;
    println!("chart written to {}", chart.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::damped_oscillation;

    #[test]
    fn known_values() {
        assert!((damped_oscillation(0., 0.) - 0.).abs() < 1e-12);
        // sin²(x²) − 0.5 over a denominator ≥ 1 keeps f within [0, 1].
        for i in -40..=40 {
            let f = damped_oscillation(i as f64 * 0.25, 0.);
            assert!((0.0..=1.0).contains(&f));
        }
    }
}
