//! The single HTML page: heading plus the three charts stacked vertically.

use std::fmt::Write;

use crate::charts::{DashboardCharts, Series};
use crate::error::DashboardError;
use crate::render::{render_bar, render_line, render_scatter};
use crate::theme;

pub const PAGE_TITLE: &str = "Global CO₂ Emissions and GDP Dashboard";

/// One rendered chart with its legend entries (name, css color).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub id: &'static str,
    pub svg: String,
    pub legend: Vec<(String, String)>,
}

fn legend<X>(series: &[Series<X>]) -> Vec<(String, String)> {
    series
        .iter()
        .map(|s| (s.name.clone(), theme::css_hex(s.color)))
        .collect()
}

/// Render every chart and compose the finished page.
pub fn render_page(charts: &DashboardCharts) -> Result<String, DashboardError> {
    let panels = [
        ChartPanel {
            id: "co2-vs-gdp",
            svg: render_scatter(&charts.scatter)?,
            legend: legend(&charts.scatter.series),
        },
        ChartPanel {
            id: "co2-trends",
            svg: render_line(&charts.line)?,
            legend: legend(&charts.line.series),
        },
        ChartPanel {
            id: "top-co2-emitters",
            svg: render_bar(&charts.bar)?,
            legend: Vec::new(),
        },
    ];
    Ok(compose(&panels))
}

pub fn compose(panels: &[ChartPanel]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    // Writing to a String cannot fail
    let _ = writeln!(html, "<title>{}</title>", escape_html(PAGE_TITLE));
    let _ = writeln!(html, "<style>{}</style>", theme::PAGE_CSS);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(PAGE_TITLE));
    html.push_str("<main class=\"charts\">\n");

    for panel in panels {
        let _ = writeln!(html, "<section class=\"chart\" id=\"{}\">", panel.id);
        html.push_str(&panel.svg);
        html.push('\n');
        if !panel.legend.is_empty() {
            html.push_str("<ul class=\"legend\">\n");
            for (name, color) in &panel.legend {
                let _ = writeln!(
                    html,
                    "<li><span class=\"swatch\" style=\"background:{color}\"></span>{}</li>",
                    escape_html(name)
                );
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</section>\n");
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
