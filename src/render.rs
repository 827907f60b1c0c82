//! Draw chart descriptions to inline SVG with plotters.

use std::error::Error;
use std::ops::Range;

use itertools::{Itertools, MinMaxResult};
use plotters::coord::combinators::IntoLogRange;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;

use crate::charts::{BarChart, LineChart, ScatterChart};
use crate::error::DashboardError;
use crate::page::escape_html;
use crate::theme;

pub const CHART_SIZE: (u32, u32) = (1000, 460);

pub fn render_scatter(chart: &ScatterChart) -> Result<String, DashboardError> {
    let mut svg = String::new();
    draw_scatter(chart, &mut svg).map_err(|e| render_error("scatter", e))?;
    Ok(attach_point_titles(&svg, &chart.hover_labels()))
}

pub fn render_line(chart: &LineChart) -> Result<String, DashboardError> {
    let mut svg = String::new();
    draw_line(chart, &mut svg).map_err(|e| render_error("line", e))?;
    Ok(svg)
}

pub fn render_bar(chart: &BarChart) -> Result<String, DashboardError> {
    let mut svg = String::new();
    draw_bar(chart, &mut svg).map_err(|e| render_error("bar", e))?;
    Ok(svg)
}

fn render_error(chart: &'static str, err: Box<dyn Error>) -> DashboardError {
    DashboardError::Render {
        chart,
        message: err.to_string(),
    }
}

fn caption_style() -> TextStyle<'static> {
    (theme::FONT_FAMILY, theme::TITLE_SIZE)
        .into_font()
        .color(&theme::TEXT)
}

fn label_style() -> TextStyle<'static> {
    (theme::FONT_FAMILY, theme::LABEL_SIZE)
        .into_font()
        .color(&theme::TEXT)
}

fn axis_desc_style() -> TextStyle<'static> {
    (theme::FONT_FAMILY, theme::AXIS_DESC_SIZE)
        .into_font()
        .color(&theme::TEXT)
}

fn draw_scatter(chart: &ScatterChart, out: &mut String) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::with_string(out, CHART_SIZE).into_drawing_area();
    root.fill(&theme::BACKGROUND)?;

    let points = || chart.series.iter().flat_map(|s| s.points.iter());
    let x_range = log_bounds(points().map(|&(x, _)| x));
    let y_range = linear_bounds(points().map(|&(_, y)| y));

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, caption_style())
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(x_range.log_scale(), y_range)?;

    ctx.configure_mesh()
        .bold_line_style(theme::GRID)
        .light_line_style(theme::BACKGROUND)
        .axis_style(theme::AXIS)
        .label_style(label_style())
        .axis_desc_style(axis_desc_style())
        .x_desc(chart.x_axis.label)
        .y_desc(chart.y_axis.label)
        .x_label_formatter(&|v| compact_number(*v))
        .draw()?;

    for series in &chart.series {
        let style = series.color.mix(0.8).filled();
        ctx.draw_series(
            series
                .points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, style)),
        )?;
    }

    root.present()?;
    Ok(())
}

fn draw_line(chart: &LineChart, out: &mut String) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::with_string(out, CHART_SIZE).into_drawing_area();
    root.fill(&theme::BACKGROUND)?;

    let points = || chart.series.iter().flat_map(|s| s.points.iter());
    let x_range = year_bounds(points().map(|&(year, _)| year));
    let y_range = linear_bounds(points().map(|&(_, y)| y));

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, caption_style())
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(x_range, y_range)?;

    ctx.configure_mesh()
        .bold_line_style(theme::GRID)
        .light_line_style(theme::BACKGROUND)
        .axis_style(theme::AXIS)
        .label_style(label_style())
        .axis_desc_style(axis_desc_style())
        .x_desc(chart.x_axis.label)
        .y_desc(chart.y_axis.label)
        .draw()?;

    for series in &chart.series {
        ctx.draw_series(
            LineSeries::new(series.points.iter().copied(), series.color.stroke_width(2))
                .point_size(2),
        )?;
    }

    root.present()?;
    Ok(())
}

fn draw_bar(chart: &BarChart, out: &mut String) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::with_string(out, CHART_SIZE).into_drawing_area();
    root.fill(&theme::BACKGROUND)?;

    // Discrete integer ranges are inclusive, so 0..=last gives one segment per bar
    let last = chart.bars.len().saturating_sub(1);
    let top = chart
        .bars
        .iter()
        .map(|b| b.value)
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let y_range = 0.0..if top > 0.0 { top * 1.1 } else { 1.0 };

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, caption_style())
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d((0..last).into_segmented(), y_range)?;

    let bar_label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(index) => chart
            .bars
            .get(*index)
            .map(|b| b.label.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(chart.bars.len().max(1))
        .bold_line_style(theme::GRID)
        .light_line_style(theme::BACKGROUND)
        .axis_style(theme::AXIS)
        .label_style(label_style())
        .axis_desc_style(axis_desc_style())
        .x_desc(chart.x_axis.label)
        .y_desc(chart.y_axis.label)
        .x_label_formatter(&bar_label)
        .draw()?;

    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(chart.color.filled())
            .margin(12)
            .data(
                chart
                    .bars
                    .iter()
                    .enumerate()
                    .filter(|(_, bar)| bar.value.is_finite())
                    .map(|(i, bar)| (i, bar.value)),
            ),
    )?;

    root.present()?;
    Ok(())
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.filter(|v| v.is_finite()).minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

fn linear_bounds(values: impl Iterator<Item = f64>) -> Range<f64> {
    let Some((lo, hi)) = min_max(values) else {
        return 0.0..1.0;
    };
    let pad = if hi > lo {
        (hi - lo) * 0.05
    } else {
        lo.abs().max(1.0) * 0.5
    };
    (lo - pad)..(hi + pad)
}

fn log_bounds(values: impl Iterator<Item = f64>) -> Range<f64> {
    match min_max(values.filter(|v| *v > 0.0)) {
        Some((lo, hi)) => (lo / 1.5)..(hi * 1.5),
        None => 1.0..10.0,
    }
}

fn year_bounds(years: impl Iterator<Item = i32>) -> Range<i32> {
    match years.minmax() {
        MinMaxResult::NoElements => 0..1,
        MinMaxResult::OneElement(year) => (year - 1)..(year + 1),
        MinMaxResult::MinMax(lo, hi) => lo..hi,
    }
}

/// GDP tick labels: 1.2k, 3.4M, 5.6B, 7.8T.
fn compact_number(value: f64) -> String {
    let magnitude = value.abs();
    let (scaled, suffix) = if magnitude >= 1e12 {
        (value / 1e12, "T")
    } else if magnitude >= 1e9 {
        (value / 1e9, "B")
    } else if magnitude >= 1e6 {
        (value / 1e6, "M")
    } else if magnitude >= 1e3 {
        (value / 1e3, "k")
    } else {
        (value, "")
    };
    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}

/// Give the n-th `<circle>` of `svg` a `<title>` holding the n-th label.
pub(crate) fn attach_point_titles(svg: &str, labels: &[&str]) -> String {
    let mut out = String::with_capacity(svg.len() + labels.len() * 32);
    let mut rest = svg;
    let mut labels = labels.iter();

    while let Some(start) = rest.find("<circle") {
        let Some(close) = rest[start..].find("/>") else {
            break;
        };
        let Some(label) = labels.next() else {
            break;
        };
        let tag_end = start + close;
        out.push_str(rest[..tag_end].trim_end());
        out.push_str("><title>");
        out.push_str(&escape_html(label));
        out.push_str("</title></circle>");
        rest = &rest[tag_end + 2..];
    }

    out.push_str(rest);
    out
}
