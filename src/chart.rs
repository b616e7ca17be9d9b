use crate::activity::Series;
use crate::error::{AdamantError, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Charts are always written as PNG.
pub const IMAGE_EXTENSION: &str = "png";

const CHART_SIZE: (u32, u32) = (1024, 768);

/// Everything needed to draw one bar chart.
pub struct ChartRequest<'a> {
    pub title: String,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    /// Bar labels, left to right.
    pub names: &'a [&'a str],
    /// Stacked bottom to top; every series has one value per name.
    pub series: Vec<Series>,
}

fn chart_err<E: std::fmt::Display>(e: E) -> AdamantError {
    AdamantError::Chart(e.to_string())
}

/// `<output_dir>/<repo_name>_<suffix>.png`
pub fn artifact_path(output_dir: &Path, repo_name: &str, suffix: &str) -> PathBuf {
    output_dir.join(format!("{repo_name}_{suffix}.{IMAGE_EXTENSION}"))
}

/// Draws `request` into `output_dir`, creating the directory when missing and
/// replacing any earlier chart of the same name.
pub fn render(
    request: &ChartRequest<'_>,
    output_dir: &Path,
    repo_name: &str,
    suffix: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = artifact_path(output_dir, repo_name, suffix);
    draw(request, &path)?;
    info!(path = %path.display(), bars = request.names.len(), "chart written");
    Ok(path)
}

/// Height of the tallest stacked bar.
pub fn stacked_max(series: &[Series]) -> u64 {
    let bars = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    (0..bars)
        .map(|i| {
            series
                .iter()
                .map(|s| s.values.get(i).copied().unwrap_or(0))
                .sum::<u64>()
        })
        .max()
        .unwrap_or(0)
}

fn draw(request: &ChartRequest<'_>, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let bars = request.names.len();
    let y_top = (stacked_max(&request.series) as f64 * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(&request.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(140)
        .y_label_area_size(70)
        .build_cartesian_2d((0usize..bars.max(1)).into_segmented(), 0f64..y_top)
        .map_err(chart_err)?;

    let names = request.names;
    let x_label_formatter = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => names.get(*i).map(|n| n.to_string()).unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .x_labels(bars.max(1) + 1)
        .x_label_formatter(&x_label_formatter)
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .color(&BLACK)
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        )
        .y_label_formatter(&|y: &f64| format!("{:.0}", y))
        .x_desc(request.x_desc)
        .y_desc(request.y_desc)
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(chart_err)?;

    let mut base = vec![0u64; bars];
    for series in &request.series {
        let color = series.color;
        let rects: Vec<_> = series
            .values
            .iter()
            .take(bars)
            .enumerate()
            .map(|(i, value)| {
                let bottom = base[i];
                let top = bottom + value;
                base[i] = top;
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), bottom as f64),
                        (SegmentValue::Exact(i + 1), top as f64),
                    ],
                    color.filled(),
                );
                bar.set_margin(0, 0, 8, 8);
                bar
            })
            .collect();

        chart
            .draw_series(rects)
            .map_err(chart_err)?
            .label(series.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    if request.series.len() > 1 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}
