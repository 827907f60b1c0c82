//! Chart descriptions: plain data derived from the cleaned records, ready to render.

use std::collections::HashMap;

use itertools::Itertools;
use plotters::style::RGBColor;

use crate::aggregate::TopEmitters;
use crate::models::Record;
use crate::theme;

pub const GDP_LABEL: &str = "GDP (USD)";
pub const PER_CAPITA_LABEL: &str = "CO₂ Emissions Per Capita (Metric Tons)";
pub const YEAR_LABEL: &str = "Year";
pub const COUNTRY_LABEL: &str = "Country";
pub const TOTAL_CO2_LABEL: &str = "Total CO₂ Emissions (Million Metric Tons)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: &'static str,
    pub scale: AxisScale,
}

impl Axis {
    fn linear(label: &'static str) -> Self {
        Self {
            label,
            scale: AxisScale::Linear,
        }
    }
}

/// Points belonging to one country.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<X> {
    pub name: String,
    pub color: RGBColor,
    pub points: Vec<(X, f64)>,
}

/// Per-capita CO₂ against GDP, one colored series per country.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series<f64>>,
}

impl ScatterChart {
    /// Country names in drawing order, one per point.
    pub fn hover_labels(&self) -> Vec<&str> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(move |_| s.name.as_str()))
            .collect()
    }
}

/// Per-capita CO₂ over time, one line per country.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series<i32>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Total CO₂ of the top emitters.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub color: RGBColor,
    pub bars: Vec<Bar>,
}

/// Stable country → color assignment, shared by every chart of one page.
#[derive(Debug, Clone, Default)]
pub struct CountryColors {
    colors: HashMap<String, RGBColor>,
}

impl CountryColors {
    pub fn from_records(records: &[Record]) -> Self {
        let colors = records
            .iter()
            .map(|record| record.country.as_str())
            .unique()
            .enumerate()
            .map(|(index, country)| (country.to_string(), theme::series_color(index)))
            .collect();
        Self { colors }
    }

    pub fn get(&self, country: &str) -> RGBColor {
        self.colors.get(country).copied().unwrap_or(theme::SERIES_PALETTE[0])
    }
}

/// Group records by country, keeping countries in first-appearance order.
fn by_country(records: &[Record]) -> Vec<(&str, Vec<&Record>)> {
    let mut groups = records
        .iter()
        .map(|r| (r.country.as_str(), r))
        .into_group_map();
    records
        .iter()
        .map(|r| r.country.as_str())
        .unique()
        .filter_map(|country| groups.remove(country).map(|rows| (country, rows)))
        .collect()
}

pub fn scatter_chart(records: &[Record], colors: &CountryColors) -> ScatterChart {
    let series = by_country(records)
        .into_iter()
        .map(|(country, rows)| Series {
            name: country.to_string(),
            color: colors.get(country),
            // A log axis has no place for zero or negative GDP
            points: rows
                .into_iter()
                .filter(|r| r.gdp_value > 0.0)
                .map(|r| (r.gdp_value, r.co2_per_capita))
                .collect(),
        })
        .filter(|s| !s.points.is_empty())
        .collect();

    ScatterChart {
        title: "CO₂ Emissions Per Capita vs GDP".to_string(),
        x_axis: Axis {
            label: GDP_LABEL,
            scale: AxisScale::Log,
        },
        y_axis: Axis::linear(PER_CAPITA_LABEL),
        series,
    }
}

pub fn line_chart(records: &[Record], colors: &CountryColors) -> LineChart {
    let series = by_country(records)
        .into_iter()
        .map(|(country, rows)| Series {
            name: country.to_string(),
            color: colors.get(country),
            points: rows
                .into_iter()
                .map(|r| (r.year, r.co2_per_capita))
                .sorted_by_key(|(year, _)| *year)
                .collect(),
        })
        .collect();

    LineChart {
        title: "CO₂ Emissions Per Capita Over Time".to_string(),
        x_axis: Axis::linear(YEAR_LABEL),
        y_axis: Axis::linear(PER_CAPITA_LABEL),
        series,
    }
}

pub fn bar_chart(top: &TopEmitters) -> BarChart {
    let title = match top.year {
        Some(year) => format!("Top {} CO₂ Emitting Countries in {year}", top.limit),
        None => format!("Top {} CO₂ Emitting Countries", top.limit),
    };

    BarChart {
        title,
        x_axis: Axis::linear(COUNTRY_LABEL),
        y_axis: Axis::linear(TOTAL_CO2_LABEL),
        color: theme::BAR,
        bars: top
            .records
            .iter()
            .filter_map(|r| {
                r.co2.map(|value| Bar {
                    label: r.country.clone(),
                    value,
                })
            })
            .collect(),
    }
}

/// The three charts of the dashboard, in page order.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    pub scatter: ScatterChart,
    pub line: LineChart,
    pub bar: BarChart,
}

impl DashboardCharts {
    pub fn build(records: &[Record], top: &TopEmitters) -> Self {
        let colors = CountryColors::from_records(records);
        Self {
            scatter: scatter_chart(records, &colors),
            line: line_chart(records, &colors),
            bar: bar_chart(top),
        }
    }
}
