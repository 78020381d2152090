//! Horizontal text bar charts.

const POSITIVE_BAR: char = '█';
const NEGATIVE_BAR: char = '░';

/// One labelled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bar length in cells; the largest absolute value spans `width`.
pub fn bar_length(value: f64, max_abs: f64, width: usize) -> usize {
    if !value.is_finite() || !max_abs.is_finite() || max_abs <= 0.0 {
        return 0;
    }
    let scaled = (value.abs() / max_abs * width as f64).round() as usize;
    scaled.min(width)
}

/// Draw a bar chart, one line per bar, labels left and values right.
///
/// Negative values are drawn with a lighter glyph.
pub fn bar_chart(bars: &[Bar], width: usize, format_value: impl Fn(f64) -> String) -> String {
    if bars.is_empty() {
        return String::from("  (no data)\n");
    }

    let label_width = bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);
    let max_abs = bars
        .iter()
        .map(|b| b.value.abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for bar in bars {
        let glyph = if bar.value < 0.0 {
            NEGATIVE_BAR
        } else {
            POSITIVE_BAR
        };
        let cells: String = std::iter::repeat(glyph)
            .take(bar_length(bar.value, max_abs, width))
            .collect();

        out.push_str(&format!(
            "  {:<label_width$} │{:<width$} {}\n",
            bar.label,
            cells,
            format_value(bar.value),
            label_width = label_width,
            width = width,
        ));
    }
    out
}
