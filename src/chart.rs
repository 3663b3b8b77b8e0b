//! Standalone SVG line charts for the timing results.
//!
//! There is no plotting stack behind this: each chart is a fixed 800x600
//! document assembled as text, with nice-number axis ticks, a light grid,
//! one polyline plus circle markers per series, and a legend once more than
//! one series is present. Degenerate data (no series, empty series, a single
//! point, a flat line) falls back to a padded axis range instead of
//! panicking.

use std::fs;
use std::io;
use std::path::Path;

/// One named polyline.
#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// A line chart with a title and axis labels.
#[derive(Clone, Debug)]
pub struct LineChart {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 82.0;
const MARGIN_RIGHT: f64 = 28.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 64.0;
const TICK_TARGET: usize = 6;

/// Default color cycle; series beyond ten wrap around.
const COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

impl LineChart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
        }
    }

    /// Append a named series of (x, y) points.
    pub fn push_series(&mut self, label: impl Into<String>, points: Vec<(f64, f64)>) {
        self.series.push(Series {
            label: label.into(),
            points,
        });
    }

    /// Render the chart as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (x_lo, x_hi) =
            padded_range(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
        let (y_lo, y_hi) =
            padded_range(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

        let x_ticks = tick_values(x_lo, x_hi, TICK_TARGET);
        let y_ticks = tick_values(y_lo, y_hi, TICK_TARGET);

        // Ticks bracket the data, so mapping the tick span onto the plot
        // area keeps every point inside it.
        let x0 = x_ticks.first().copied().unwrap_or(0.0);
        let x1 = x_ticks.last().copied().unwrap_or(1.0);
        let y0 = y_ticks.first().copied().unwrap_or(0.0);
        let y1 = y_ticks.last().copied().unwrap_or(1.0);

        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let sx = |x: f64| MARGIN_LEFT + (x - x0) / (x1 - x0) * plot_w;
        let sy = |y: f64| HEIGHT - MARGIN_BOTTOM - (y - y0) / (y1 - y0) * plot_h;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"sans-serif\">\n"
        ));
        svg.push_str(&format!(
            "<rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"#ffffff\"/>\n"
        ));

        svg.push_str(&format!(
            "<text x=\"{}\" y=\"28\" text-anchor=\"middle\" font-size=\"16\">{}</text>\n",
            WIDTH / 2.0,
            esc(&self.title)
        ));

        // Grid lines and tick labels.
        for &t in &x_ticks {
            let x = sx(t);
            svg.push_str(&format!(
                "<line x1=\"{x:.2}\" y1=\"{top}\" x2=\"{x:.2}\" y2=\"{bottom}\" stroke=\"#d9d9d9\" stroke-width=\"1\"/>\n",
                top = MARGIN_TOP,
                bottom = HEIGHT - MARGIN_BOTTOM,
            ));
            svg.push_str(&format!(
                "<text x=\"{x:.2}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
                HEIGHT - MARGIN_BOTTOM + 20.0,
                fmt_tick(t)
            ));
        }
        for &t in &y_ticks {
            let y = sy(t);
            svg.push_str(&format!(
                "<line x1=\"{left}\" y1=\"{y:.2}\" x2=\"{right}\" y2=\"{y:.2}\" stroke=\"#d9d9d9\" stroke-width=\"1\"/>\n",
                left = MARGIN_LEFT,
                right = WIDTH - MARGIN_RIGHT,
            ));
            svg.push_str(&format!(
                "<text x=\"{}\" y=\"{:.2}\" text-anchor=\"end\" font-size=\"12\">{}</text>\n",
                MARGIN_LEFT - 10.0,
                y + 4.0,
                fmt_tick(t)
            ));
        }

        svg.push_str(&format!(
            "<rect x=\"{MARGIN_LEFT}\" y=\"{MARGIN_TOP}\" width=\"{plot_w}\" height=\"{plot_h}\" fill=\"none\" stroke=\"#444444\"/>\n"
        ));

        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"13\">{}</text>\n",
            MARGIN_LEFT + plot_w / 2.0,
            HEIGHT - 14.0,
            esc(&self.x_label)
        ));
        let y_label_y = MARGIN_TOP + plot_h / 2.0;
        svg.push_str(&format!(
            "<text x=\"22\" y=\"{y_label_y:.2}\" text-anchor=\"middle\" font-size=\"13\" transform=\"rotate(-90 22 {y_label_y:.2})\">{}</text>\n",
            esc(&self.y_label)
        ));

        for (i, series) in self.series.iter().enumerate() {
            let color = COLORS[i % COLORS.len()];
            let points: Vec<String> = series
                .points
                .iter()
                .map(|&(x, y)| format!("{:.2},{:.2}", sx(x), sy(y)))
                .collect();
            svg.push_str(&format!(
                "<polyline fill=\"none\" stroke=\"{color}\" stroke-width=\"1.8\" points=\"{}\"/>\n",
                points.join(" ")
            ));
            for &(x, y) in &series.points {
                svg.push_str(&format!(
                    "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"3.5\" fill=\"{color}\"/>\n",
                    sx(x),
                    sy(y)
                ));
            }
        }

        // Legend, only when there is something to tell apart.
        if self.series.len() > 1 {
            let longest = self
                .series
                .iter()
                .map(|s| s.label.chars().count())
                .max()
                .unwrap_or(0);
            let box_w = 48.0 + longest as f64 * 7.2;
            let box_h = self.series.len() as f64 * 18.0 + 10.0;
            let bx = MARGIN_LEFT + 10.0;
            let by = MARGIN_TOP + 10.0;
            svg.push_str(&format!(
                "<rect x=\"{bx}\" y=\"{by}\" width=\"{box_w:.2}\" height=\"{box_h:.2}\" fill=\"#ffffff\" fill-opacity=\"0.85\" stroke=\"#999999\"/>\n"
            ));
            for (i, series) in self.series.iter().enumerate() {
                let color = COLORS[i % COLORS.len()];
                let cy = by + 14.0 + i as f64 * 18.0;
                svg.push_str(&format!(
                    "<line x1=\"{}\" y1=\"{cy:.2}\" x2=\"{}\" y2=\"{cy:.2}\" stroke=\"{color}\" stroke-width=\"1.8\"/>\n",
                    bx + 8.0,
                    bx + 30.0
                ));
                svg.push_str(&format!(
                    "<circle cx=\"{}\" cy=\"{cy:.2}\" r=\"3\" fill=\"{color}\"/>\n",
                    bx + 19.0
                ));
                svg.push_str(&format!(
                    "<text x=\"{}\" y=\"{:.2}\" font-size=\"12\">{}</text>\n",
                    bx + 36.0,
                    cy + 4.0,
                    esc(&series.label)
                ));
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Render and persist to `path`.
    pub fn write_svg(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_svg())
    }
}

/// Smallest and largest finite values of `values`, opened up into a usable
/// axis range when the data is empty or flat.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo > hi {
        // No data at all; keep a unit axis so the layout still works.
        return (0.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        // Flat line or single point.
        return (lo - 0.5, hi + 0.5);
    }
    (lo, hi)
}

/// Heckbert's "nice numbers": round `x` to 1, 2, or 5 times a power of ten.
fn nice_num(x: f64, round: bool) -> f64 {
    let exp = x.log10().floor();
    let f = x / 10f64.powf(exp);
    let nf = if round {
        if f < 1.5 {
            1.0
        } else if f < 3.0 {
            2.0
        } else if f < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };
    nf * 10f64.powf(exp)
}

/// Tick positions bracketing `[lo, hi]` at a nice step.
fn tick_values(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    let range = nice_num(hi - lo, false);
    let step = nice_num(range / target.saturating_sub(1).max(1) as f64, true);
    let start = (lo / step).floor() * step;
    let end = (hi / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut t = start;
    while t < end + step / 2.0 {
        ticks.push(t);
        t += step;
    }
    ticks
}

/// Tick label with trailing zeros trimmed.
fn fmt_tick(v: f64) -> String {
    let s = format!("{v:.3}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
