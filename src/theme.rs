use plotters::style::RGBColor;

pub const BACKGROUND: RGBColor = RGBColor(255, 255, 255);
pub const GRID: RGBColor = RGBColor(235, 240, 248);
pub const AXIS: RGBColor = RGBColor(204, 211, 222);
pub const TEXT: RGBColor = RGBColor(42, 63, 95);
pub const BAR: RGBColor = RGBColor(99, 110, 250);

pub const FONT_FAMILY: &str = "sans-serif";
pub const TITLE_SIZE: f64 = 20.0;
pub const LABEL_SIZE: f64 = 13.0;
pub const AXIS_DESC_SIZE: f64 = 15.0;

/// Qualitative series colors, cycled in first-appearance order.
pub const SERIES_PALETTE: [RGBColor; 10] = [
    RGBColor(99, 110, 250),
    RGBColor(239, 85, 59),
    RGBColor(0, 204, 150),
    RGBColor(171, 99, 250),
    RGBColor(255, 161, 90),
    RGBColor(25, 211, 243),
    RGBColor(255, 102, 146),
    RGBColor(182, 232, 128),
    RGBColor(255, 151, 255),
    RGBColor(254, 203, 82),
];

pub fn series_color(index: usize) -> RGBColor {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// `#rrggbb` form of a color for the HTML side of the page.
pub fn css_hex(color: RGBColor) -> String {
    let RGBColor(r, g, b) = color;
    format!("#{r:02x}{g:02x}{b:02x}")
}

pub const PAGE_CSS: &str = r#"
:root {
  --bg: #f8fbff;
  --panel: #ffffff;
  --border: rgba(0, 0, 0, 0.08);
  --text: #2a3f5f;
  --text-muted: #5b6678;
  --font-body: Arial, "Helvetica Neue", sans-serif;
}

* { box-sizing: border-box; }
html, body {
  margin: 0;
  padding: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
}

h1 {
  text-align: center;
  font-family: Arial, sans-serif;
  margin: 24px 0 8px;
}

.charts {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 24px;
  padding: 16px;
}

.chart {
  width: 100%;
  max-width: 1040px;
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: 10px;
  padding: 12px;
}

.chart svg { display: block; width: 100%; height: auto; }
.chart svg circle:hover { stroke: var(--text); stroke-width: 2; }

.legend {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 4px 14px;
  max-height: 120px;
  overflow-y: auto;
  margin: 8px 0 0;
  padding: 0;
  font-size: 12px;
  color: var(--text-muted);
}

.legend li { display: flex; align-items: center; gap: 6px; }
.swatch { width: 10px; height: 10px; border-radius: 2px; display: inline-block; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(series_color(0), series_color(SERIES_PALETTE.len()));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn hex_is_lowercase_six_digits() {
        assert_eq!(css_hex(RGBColor(99, 110, 250)), "#636efa");
        assert_eq!(css_hex(RGBColor(0, 0, 0)), "#000000");
    }
}
