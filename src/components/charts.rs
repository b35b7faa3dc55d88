//! Chart Components
//!
//! Inline SVG line/bar/pie charts for the analytics screen. Geometry is
//! computed here from plain (label, count) series; no charting dependency.

use leptos::prelude::*;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 200.0;
const PAD: f64 = 28.0;

const PALETTE: [&str; 4] = ["#3674B5", "#7FB3E3", "#5B8DC9", "#B4D4F0"];

fn y_scale(values: &[usize]) -> f64 {
    values.iter().copied().max().unwrap_or(0).max(1) as f64
}

fn x_step(n: usize) -> f64 {
    (WIDTH - 2.0 * PAD) / (n.saturating_sub(1).max(1) as f64)
}

fn y_pos(value: usize, max: f64) -> f64 {
    HEIGHT - PAD - (value as f64 / max) * (HEIGHT - 2.0 * PAD)
}

fn polyline_points(values: &[usize]) -> String {
    let max = y_scale(values);
    let step = x_step(values.len());
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{:.1},{:.1}", PAD + i as f64 * step, y_pos(v, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pie slice path between two fractions of a full turn, starting at 12
/// o'clock and sweeping clockwise
fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let point = |t: f64| {
        let angle = std::f64::consts::TAU * (t - 0.25);
        (cx + r * angle.cos(), cy + r * angle.sin())
    };
    let (x0, y0) = point(start);
    let (x1, y1) = point(end);
    let large = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        cx, cy, x0, y0, r, r, large, x1, y1
    )
}

/// Line chart of one (label, count) series
#[component]
pub fn LineChart(#[prop(into)] series: Signal<Vec<(String, usize)>>) -> impl IntoView {
    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
            <line
                x1=PAD
                y1={HEIGHT - PAD}
                x2={WIDTH - PAD}
                y2={HEIGHT - PAD}
                class="chart-axis"
            />
            {move || {
                let data = series.get();
                let values: Vec<usize> = data.iter().map(|(_, v)| *v).collect();
                let max = y_scale(&values);
                let step = x_step(values.len());
                view! {
                    <polyline class="chart-line" points=polyline_points(&values) fill="none" />
                    {data
                        .iter()
                        .enumerate()
                        .map(|(i, (label, value))| {
                            let x = PAD + i as f64 * step;
                            view! {
                                <circle class="chart-dot" cx=x cy={y_pos(*value, max)} r="3" />
                                <text class="chart-label" x=x y={HEIGHT - PAD + 16.0} text-anchor="middle">
                                    {label.clone()}
                                </text>
                            }
                        })
                        .collect_view()}
                }
            }}
        </svg>
    }
}

/// Bar chart of one (label, count) series
#[component]
pub fn BarChart(#[prop(into)] series: Signal<Vec<(String, usize)>>) -> impl IntoView {
    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
            <line
                x1=PAD
                y1={HEIGHT - PAD}
                x2={WIDTH - PAD}
                y2={HEIGHT - PAD}
                class="chart-axis"
            />
            {move || {
                let data = series.get();
                let values: Vec<usize> = data.iter().map(|(_, v)| *v).collect();
                let max = y_scale(&values);
                let slot = (WIDTH - 2.0 * PAD) / values.len().max(1) as f64;
                let bar_width = slot * 0.6;
                data.iter()
                    .enumerate()
                    .map(|(i, (label, value))| {
                        let x = PAD + i as f64 * slot + (slot - bar_width) / 2.0;
                        let top = y_pos(*value, max);
                        view! {
                            <rect
                                class="chart-bar"
                                x=x
                                y=top
                                width=bar_width
                                height={(HEIGHT - PAD - top).max(0.0)}
                            />
                            <text
                                class="chart-label"
                                x={x + bar_width / 2.0}
                                y={HEIGHT - PAD + 16.0}
                                text-anchor="middle"
                            >
                                {label.clone()}
                            </text>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}

/// Pie chart of one (label, count) series, with a legend underneath
#[component]
pub fn PieChart(#[prop(into)] slices: Signal<Vec<(String, usize)>>) -> impl IntoView {
    let cx = WIDTH / 2.0;
    let cy = (HEIGHT - PAD) / 2.0 + 6.0;
    let r = (HEIGHT - 2.0 * PAD) / 2.0;

    view! {
        <div class="pie-chart">
            <svg class="chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
                {move || {
                    let data = slices.get();
                    let total: usize = data.iter().map(|(_, v)| *v).sum();
                    if total == 0 {
                        return view! {
                            <circle class="chart-empty" cx=cx cy=cy r=r fill="none" />
                            <text class="chart-label" x=cx y=cy text-anchor="middle">
                                "No data yet"
                            </text>
                        }
                        .into_any();
                    }
                    let mut start = 0.0_f64;
                    data.iter()
                        .enumerate()
                        .filter(|(_, (_, value))| *value > 0)
                        .map(|(i, (_, value))| {
                            let fraction = *value as f64 / total as f64;
                            let end = start + fraction;
                            let fill = PALETTE[i % PALETTE.len()];
                            let shape = if fraction >= 0.999 {
                                // A single slice degenerates as an arc
                                view! { <circle cx=cx cy=cy r=r fill=fill /> }.into_any()
                            } else {
                                view! { <path d=arc_path(cx, cy, r, start, end) fill=fill /> }
                                    .into_any()
                            };
                            start = end;
                            shape
                        })
                        .collect_view()
                        .into_any()
                }}
            </svg>
            <div class="chart-legend">
                {move || {
                    slices
                        .get()
                        .iter()
                        .enumerate()
                        .map(|(i, (label, value))| {
                            view! {
                                <span class="legend-entry">
                                    <span
                                        class="legend-swatch"
                                        style=format!("background:{}", PALETTE[i % PALETTE.len()])
                                    ></span>
                                    {format!("{} ({})", label, value)}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_spans_the_plot_area() {
        let points = polyline_points(&[0, 2, 4]);
        let coords: Vec<&str> = points.split(' ').collect();
        assert_eq!(coords.len(), 3);
        assert!(coords[0].starts_with("28.0,"));
        // Peak value sits at the top padding line
        assert!(coords[2].ends_with(",28.0"));
    }

    #[test]
    fn arc_large_flag_flips_past_half_turn() {
        let small = arc_path(0.0, 0.0, 10.0, 0.0, 0.25);
        let large = arc_path(0.0, 0.0, 10.0, 0.0, 0.75);
        assert!(small.contains(" 0 1 "));
        assert!(large.contains(" 1 1 "));
    }

    #[test]
    fn arc_starts_at_twelve_o_clock() {
        let path = arc_path(100.0, 100.0, 50.0, 0.0, 0.5);
        // First arc endpoint is directly above the center
        assert!(path.contains("L 100.00 50.00"));
    }

    #[test]
    fn scale_of_empty_series_stays_positive() {
        assert_eq!(y_scale(&[]), 1.0);
        assert_eq!(y_scale(&[0, 0]), 1.0);
    }
}
