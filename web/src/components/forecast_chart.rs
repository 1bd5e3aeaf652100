use std::ops::Range;

use leptos::{logging::error, prelude::*};
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use shared_types::ChartData;

use crate::{components::ErrorView, errors::ChartError};

const WIDTH: u32 = 720;
const HEIGHT: u32 = 360;

const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Label and stroke colour per series, in drawing order.
const SERIES_STYLES: [(&str, RGBColor); 4] = [
    ("Temperature (°C)", RED),
    ("Rain (mm)", BLUE),
    ("Wind (m/s)", GREEN),
    ("Air Quality (1=Good,2=Moderate,3=Poor)", ORANGE),
];

fn columns(chart: &ChartData) -> [&[f64]; 4] {
    [
        &chart.temperature,
        &chart.rain,
        &chart.wind,
        &chart.air_quality,
    ]
}

/// Value range of the y axis. It always includes zero.
pub fn y_range(chart: &ChartData) -> Range<f64> {
    let (low, high) = columns(chart)
        .iter()
        .flat_map(|column| column.iter().copied())
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if high > low {
        low..high
    } else {
        low..low + 1.0
    }
}

fn x_range(chart: &ChartData) -> Range<f64> {
    0.0..(chart.labels.len().saturating_sub(1).max(1)) as f64
}

/// Day label for an x position, empty between days.
fn label_at(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Draws the four forecast series as an SVG document.
pub fn render_chart_svg(chart: &ChartData) -> Result<String, ChartError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut plot = ChartBuilder::on(&root)
            .margin(16)
            .set_label_area_size(LabelAreaPosition::Left, 44)
            .set_label_area_size(LabelAreaPosition::Bottom, 32)
            .build_cartesian_2d(x_range(chart), y_range(chart))?;

        plot.configure_mesh()
            .x_labels(chart.labels.len().max(2))
            .x_label_formatter(&|x| label_at(&chart.labels, *x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .label_style(FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal))
            .draw()?;

        let count = chart.labels.len();
        for (column, (label, color)) in columns(chart).into_iter().zip(SERIES_STYLES) {
            let points = column
                .iter()
                .take(count)
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(index, v)| (index as f64, *v));

            plot.draw_series(LineSeries::new(points, color.stroke_width(2)))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        plot.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .label_font(FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal))
            .position(SeriesLabelPosition::UpperMiddle)
            .draw()?;

        root.present()?;
    }
    Ok(svg)
}

#[component]
pub fn ForecastChart(chart: ChartData) -> impl IntoView {
    match render_chart_svg(&chart) {
        Ok(svg) => view! { <div class="forecast-chart" inner_html=svg></div> }.into_any(),
        Err(err) => {
            error!("{}", err);
            view! { <ErrorView message=Some("The forecast chart could not be drawn.".to_string()) /> }
                .into_any()
        }
    }
}
