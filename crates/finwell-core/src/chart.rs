//! Spending-distribution bar chart rendering
//!
//! Draws one vertical bar per category (input insertion order preserved on
//! the x-axis) into an in-memory RGB buffer and encodes it as PNG.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use indexmap::IndexMap;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{Error, Result};

/// Canvas size in pixels
const CHART_WIDTH: u32 = 1000;
const CHART_HEIGHT: u32 = 600;

/// Bar fill, matching the legacy renderer's skyblue
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Render the spending distribution as an encoded PNG.
///
/// Bar height is the category amount; each bar carries its
/// integer-truncated amount as a label above it. An empty distribution
/// renders an axes-only chart rather than failing.
pub fn render_spending_chart(distribution: &IndexMap<String, f64>) -> Result<Vec<u8>> {
    let categories: Vec<&str> = distribution.keys().map(String::as_str).collect();
    let amounts: Vec<f64> = distribution.values().copied().collect();

    let max_amount = amounts.iter().copied().fold(0.0_f64, f64::max);
    let y_max = if max_amount > 0.0 { max_amount * 1.1 } else { 1.0 };
    // At least one segment keeps the axes drawable with no categories
    let segments = categories.len().max(1);

    let mut raw = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut raw, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Spending Distribution", ("sans-serif", 30))
            .margin(15)
            .x_label_area_size(110)
            .y_label_area_size(70)
            .build_cartesian_2d((0..segments).into_segmented(), 0.0..y_max)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(segments)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) => categories
                    .get(*i)
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .x_label_style(
                ("sans-serif", 14)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .x_desc("Spending Categories")
            .y_desc("Amount Spent")
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(amounts.iter().enumerate().map(|(i, &amount)| {
                Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), amount),
                    ],
                    BAR_COLOR.filled(),
                )
            }))
            .map_err(render_err)?;

        // Value labels centered above each bar, truncated to whole units
        let label_style = TextStyle::from(("sans-serif", 14).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(amounts.iter().enumerate().map(|(i, &amount)| {
                Text::new(
                    format!("{}", amount.trunc() as i64),
                    (SegmentValue::CenterOf(i), amount),
                    label_style.clone(),
                )
            }))
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&raw, CHART_WIDTH, CHART_HEIGHT, ColorType::Rgb8)
        .map_err(|e| Error::Render(e.to_string()))?;

    Ok(png)
}

fn render_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}
