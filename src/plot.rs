//! Chart rendering.  Presentation only: nothing here is persisted
//! beyond the PNG file the caller asks for.

use std::io;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::errors::{TabError, TabResult};
use crate::sample::SampleSet;
use crate::surface::Surface;

/// Grid-line visibility of a 2D chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLines {
    /// Draw the mesh behind the series.
    On,
    /// Axes and labels only.
    Off,
}

const CHART_SIZE: (u32, u32) = (1000, 600);
const PANEL_SIZE: (u32, u32) = (1600, 1200);

fn draw_err(e: impl std::fmt::Display) -> TabError {
    TabError::FileSystem(io::Error::new(io::ErrorKind::Other, e.to_string()))
}

////////////////////////////////////////////////////////////////////////
//
// Line charts

/// A single-series line chart saved as a PNG file.
///
/// # Example
///
/// ```no_run
/// use functab::{Grid, LineChart, SampleSet};
/// # fn main() -> Result<(), functab::TabError> {
/// let grid = Grid::with_step(0., 4., 0.5)?;
/// let s = SampleSet::tabulate(|x| x.sin(), &grid);
/// LineChart::new(&s).title("sin x").save("target/sin.png".as_ref())?;
/// # Ok(()) }
/// ```
pub struct LineChart<'a> {
    samples: &'a SampleSet,
    title: String,
    x_desc: String,
    y_desc: String,
    series_label: String,
    color: RGBColor,
    grid: GridLines,
}

impl<'a> LineChart<'a> {
    /// Chart of `samples` with no caption, no axis descriptions, no
    /// legend, a blue series and grid lines off.
    pub fn new(samples: &'a SampleSet) -> Self {
        Self { samples,
               title: String::new(),
               x_desc: String::new(),
               y_desc: String::new(),
               series_label: String::new(),
               color: BLUE,
               grid: GridLines::Off }
    }

    /// Set the chart caption.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the horizontal axis description.
    pub fn x_desc(mut self, desc: &str) -> Self {
        self.x_desc = desc.to_string();
        self
    }

    /// Set the vertical axis description.
    pub fn y_desc(mut self, desc: &str) -> Self {
        self.y_desc = desc.to_string();
        self
    }

    /// Label the series; a legend box is drawn when non-empty.
    pub fn series_label(mut self, label: &str) -> Self {
        self.series_label = label.to_string();
        self
    }

    /// Set the series color.
    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }

    /// Set the grid-line visibility.
    pub fn grid(mut self, grid: GridLines) -> Self {
        self.grid = grid;
        self
    }

    /// Render the chart to `path`, creating the containing directory if
    /// absent.
    pub fn save(&self, path: &Path) -> TabResult<()> {
        crate::ensure_parent_dir(path)?;
        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        draw_line_panel(&root, self)?;
        root.present().map_err(draw_err)
    }
}

fn draw_line_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>,
                                       opts: &LineChart) -> TabResult<()> {
    let (x_min, x_max) = padded(opts.samples.x_range());
    let (y_min, y_max) = padded(opts.samples.y_range());
    let mut builder = ChartBuilder::on(area);
    builder.margin(10).x_label_area_size(30).y_label_area_size(60);
    if !opts.title.is_empty() {
        builder.caption(opts.title.as_str(), ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(draw_err)?;
    let mut mesh = chart.configure_mesh();
    if opts.grid == GridLines::Off {
        mesh.disable_x_mesh();
        mesh.disable_y_mesh();
    }
    if !opts.x_desc.is_empty() {
        mesh.x_desc(opts.x_desc.as_str());
    }
    if !opts.y_desc.is_empty() {
        mesh.y_desc(opts.y_desc.as_str());
    }
    mesh.draw().map_err(draw_err)?;
    let series = chart
        .draw_series(LineSeries::new(opts.samples.iter(), &opts.color))
        .map_err(draw_err)?;
    if !opts.series_label.is_empty() {
        let color = opts.color;
        series.label(opts.series_label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - 10, y), (x + 10, y)], color)
            });
        chart.configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(draw_err)?;
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////
//
// Composite view of a two-argument tabulation

/// The four-panel composite view of a [`Surface`]: 3D surface, top-down
/// heatmap and the two fixed-argument slices.
pub struct CompositeChart<'a> {
    surface: &'a Surface,
    slice_x1: &'a SampleSet,
    slice_x2: &'a SampleSet,
    c1: f64,
    c2: f64,
    title: String,
}

impl<'a> CompositeChart<'a> {
    /// `slice_x1` holds the samples of `x1 ↦ f(x1, c2)` and `slice_x2`
    /// those of `x2 ↦ f(c1, x2)`, with `at = (c1, c2)`.
    pub fn new(surface: &'a Surface, slice_x1: &'a SampleSet,
               slice_x2: &'a SampleSet, at: (f64, f64)) -> Self {
        Self { surface, slice_x1, slice_x2, c1: at.0, c2: at.1,
               title: String::new() }
    }

    /// Set the figure title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Render the four panels to `path`, creating the containing
    /// directory if absent.
    pub fn save(&self, path: &Path) -> TabResult<()> {
        crate::ensure_parent_dir(path)?;
        let root = BitMapBackend::new(path, PANEL_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        let inner = if self.title.is_empty() {
            root.clone()
        } else {
            root.titled(self.title.as_str(), ("sans-serif", 30))
                .map_err(draw_err)?
        };
        let panels = inner.split_evenly((2, 2));
        self.draw_surface_panel(&panels[0])?;
        self.draw_heatmap_panel(&panels[1])?;
        draw_line_panel(&panels[2],
                        &LineChart::new(self.slice_x1)
                            .title(&format!("f(x1, x2 = {})", self.c2))
                            .x_desc("x1")
                            .grid(GridLines::On))?;
        draw_line_panel(&panels[3],
                        &LineChart::new(self.slice_x2)
                            .title(&format!("f(x1 = {}, x2)", self.c1))
                            .x_desc("x2")
                            .grid(GridLines::On))?;
        root.present().map_err(draw_err)
    }

    fn draw_surface_panel<DB: DrawingBackend>(
        &self, area: &DrawingArea<DB, Shift>) -> TabResult<()> {
        let s = self.surface;
        let (x1_min, x1_max) = axis_range(s.x1());
        let (x2_min, x2_max) = axis_range(s.x2());
        let (z_min, z_max) = padded(s.z_range());
        let mut chart = ChartBuilder::on(area)
            .caption("surface", ("sans-serif", 20))
            .margin(10)
            .build_cartesian_3d(x1_min..x1_max, z_min..z_max, x2_min..x2_max)
            .map_err(draw_err)?;
        chart.with_projection(|mut pb| {
            pb.pitch = 0.5;
            pb.yaw = 0.7;
            pb.scale = 0.8;
            pb.into_matrix()
        });
        chart.configure_axes().draw().map_err(draw_err)?;
        let span = (z_max - z_min).max(f64::MIN_POSITIVE);
        chart.draw_series(
            SurfaceSeries::xoz(s.x1().iter().copied(),
                               s.x2().iter().copied(),
                               |x1, x2| s.value_at(x1, x2))
                .style_func(&move |&z| shade((z - z_min) / span).filled()))
            .map_err(draw_err)?;
        Ok(())
    }

    fn draw_heatmap_panel<DB: DrawingBackend>(
        &self, area: &DrawingArea<DB, Shift>) -> TabResult<()> {
        let s = self.surface;
        let x1 = s.x1();
        let x2 = s.x2();
        let (x1_min, x1_max) = axis_range(x1);
        let (x2_min, x2_max) = axis_range(x2);
        let (z_min, z_max) = s.z_range();
        let span = (z_max - z_min).max(f64::MIN_POSITIVE);
        let mut chart = ChartBuilder::on(area)
            .caption("top view", ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(x1_min..x1_max, x2_min..x2_max)
            .map_err(draw_err)?;
        chart.configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc("x1")
            .y_desc("x2")
            .draw()
            .map_err(draw_err)?;
        let mut cells = Vec::with_capacity((x1.len() - 1) * (x2.len() - 1));
        for i in 0..x1.len() - 1 {
            for j in 0..x2.len() - 1 {
                let t = (s.value(i, j) - z_min) / span;
                cells.push(Rectangle::new(
                    [(x1[i], x2[j]), (x1[i + 1], x2[j + 1])],
                    shade(t).filled()));
            }
        }
        chart.draw_series(cells).map_err(draw_err)?;
        Ok(())
    }
}

/// Blue-to-red ramp over \[0, 1\].
fn shade(t: f64) -> HSLColor {
    HSLColor(240. / 360. * (1. - t.clamp(0., 1.)), 1., 0.5)
}

fn axis_range(axis: &[f64]) -> (f64, f64) {
    (axis[0], axis[axis.len() - 1])
}

/// Pad a data range so the series does not hug the chart border.  A
/// degenerate or non-finite range falls back to something drawable.
fn padded((min, max): (f64, f64)) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0., 1.);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}
