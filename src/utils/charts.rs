// PNG charts comparing strategies: final cost bars and convergence lines

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const PALETTE: [RGBColor; 3] = [
    RGBColor(0x4C, 0xAF, 0x50),
    RGBColor(0x21, 0x96, 0xF3),
    RGBColor(0xFF, 0x98, 0x00),
];

fn series_color(i: usize) -> RGBColor {
    PALETTE[i % PALETTE.len()]
}

/// Bar chart of the final cost reached by each strategy
pub fn draw_cost_comparison(
    output_path: &Path,
    results: &[(&str, f64)],
) -> Result<(), Box<dyn Error>> {
    if results.is_empty() {
        return Err("no costs to plot".into());
    }

    let root = BitMapBackend::new(output_path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_cost = results.iter().map(|&(_, cost)| cost).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Total Cost by Algorithm", ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0..results.len()).into_segmented(),
            0.0..(max_cost * 1.1).max(1.0),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Algorithm")
        .y_desc("Total Cost")
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) => results
                .get(*i)
                .map(|(name, _)| name.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(results.iter().enumerate().map(|(i, &(_, cost))| {
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), cost)],
            series_color(i).filled(),
        );
        bar.set_margin(0, 0, 30, 30);
        bar
    }))?;

    // Cost labels above each bar
    for (i, &(_, cost)) in results.iter().enumerate() {
        chart.draw_series(std::iter::once(Text::new(
            format!("{:.2}", cost),
            (SegmentValue::CenterOf(i), cost + max_cost * 0.02),
            ("sans-serif", 14).into_font(),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Line chart of cost traces, one line per strategy
pub fn draw_convergence(
    output_path: &Path,
    traces: &[(&str, &[f64])],
) -> Result<(), Box<dyn Error>> {
    let longest = traces.iter().map(|(_, trace)| trace.len()).max().unwrap_or(0);
    if longest == 0 {
        return Err("no traces to plot".into());
    }

    let values = || traces.iter().flat_map(|(_, trace)| trace.iter().copied());
    let min_cost = values().fold(f64::INFINITY, f64::min);
    let max_cost = values().fold(f64::NEG_INFINITY, f64::max);
    let padding = ((max_cost - min_cost) * 0.1).max(1.0);

    let root = BitMapBackend::new(output_path, (900, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Cost Evolution During Optimization",
            ("sans-serif", 22).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..longest, (min_cost - padding)..(max_cost + padding))?;

    chart
        .configure_mesh()
        .x_desc("Iterations")
        .y_desc("Total Cost")
        .draw()?;

    for (i, (name, trace)) in traces.iter().enumerate() {
        let color = series_color(i);
        chart
            .draw_series(LineSeries::new(
                trace.iter().copied().enumerate(),
                color.stroke_width(2),
            ))?
            .label(*name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}
