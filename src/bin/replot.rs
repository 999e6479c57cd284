//! Re-plot a parallel-group document.  The argument names a file inside
//! `results/` (or a full path); `--grid` / `--no-grid` control the mesh.

use std::env;
use std::path::{Component, Path, PathBuf};
use std::process;

use anyhow::Result;
use functab::{GridLines, LineChart, TabError, read_groups};
use plotters::style::BLUE;

const RESULTS_DIR: &str = "results";

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <filename|path> [--grid|--no-grid]", program);
    process::exit(1);
}

fn parse_args() -> (PathBuf, GridLines) {
    let args: Vec<String> = env::args().collect();
    let mut input: Option<String> = None;
    let mut grid: Option<GridLines> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--grid" | "--no-grid" => {
                if grid.is_some() {
                    eprintln!("--grid and --no-grid are mutually exclusive");
                    process::exit(1);
                }
                grid = Some(if arg == "--grid" { GridLines::On }
                            else { GridLines::Off });
            }
            _ if arg.starts_with("--") => usage(&args[0]),
            _ => {
                if input.is_some() {
                    usage(&args[0]);
                }
                input = Some(arg.clone());
            }
        }
    }
    let input = match input {
        Some(input) => input,
        None => usage(&args[0]),
    };
    // A bare filename is looked up in the results directory; anything
    // with a directory component is taken as given.
    let given = Path::new(&input);
    let path = if given.is_absolute() || given.components().count() > 1 {
        given.to_path_buf()
    } else {
        match given.components().next() {
            Some(Component::Normal(_)) => Path::new(RESULTS_DIR).join(given),
            _ => given.to_path_buf(),
        }
    };
    (path, grid.unwrap_or(GridLines::Off))
}

fn main() -> Result<()> {
    env_logger::init();
    let (path, grid) = parse_args();

    let samples = match read_groups(&path) {
        Ok(samples) => samples,
        Err(TabError::NotFound(path)) => {
            println!("file not found: {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let chart = path.with_extension("png");
    LineChart::new(&samples)
        .title("f(x)")
        .x_desc("x")
        .y_desc("f(x)")
        .series_label("f(x)")
        .color(BLUE)
        .grid(grid)
        .save(&chart)?;
    println!("chart written to {}", chart.display());
    Ok(())
}
