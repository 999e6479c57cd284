//! Tabulation of closed-form functions on uniform grids, with
//! structured-text persistence and PNG charts.
//!
//! A function is evaluated on an evenly spaced [`Grid`], giving a
//! [`SampleSet`] of parallel input/output sequences (or a [`Surface`]
//! for two-argument functions).  A sample set can be written as a
//! record-list document (JSON, [`write_records`]) or a parallel-group
//! document (XML, [`write_groups`]); only the latter can be read back
//! ([`read_groups`]).  Charts are drawn with `plotters` into PNG files.
//!
//! # Example
//!
//! ```
//! use functab::{Grid, SampleSet, read_groups, write_groups};
//! # fn main() -> Result<(), functab::TabError> {
//! let grid = Grid::with_step(-10., 10., 0.5)?;
//! let samples = SampleSet::tabulate(|x| (x * x).sin(), &grid);
//! let path = std::env::temp_dir().join("functab-doc.xml");
//! write_groups(&samples, &path)?;
//! let back = read_groups(&path)?;
//! assert_eq!(back.len(), 41);
//! # Ok(()) }
//! ```

use std::fs;
use std::path::Path;

mod errors;
mod grid;
mod groups;
mod plot;
mod records;
mod sample;
mod surface;

pub use errors::{ParseError, TabError, TabResult};
pub use grid::Grid;
pub use groups::{read_groups, write_groups};
pub use plot::{CompositeChart, GridLines, LineChart};
pub use records::write_records;
pub use sample::SampleSet;
pub use surface::Surface;

/// Create the directory holding `path` (and its ancestors) if absent.
pub(crate) fn ensure_parent_dir(path: &Path) -> TabResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(TabError::FileSystem)?;
        }
    }
    Ok(())
}
