extern crate plotters;
use plotters::prelude::*;

extern crate sloper;
use sloper::{PieceLayout, PointSet, SeamKind, SloperConfig};

use tracing_subscriber::EnvFilter;

/// Renders the front and back piece of a draft to `trouser_pattern.png`.
///
/// Usage: `cargo run --example plot_pattern [config.toml]`
/// Without a config file the reference measurements are used.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SloperConfig::from_file(std::path::Path::new(&path))?,
        None => SloperConfig::from_toml_str(
            r#"
            [measurements]
            waist = 100.33
            seat = 107.95
            body_rise = 29.21
            inseam = 86.36
            trouser_bottom_width = 22.6
            waistband_depth = 4.0
            "#,
        )?,
    };

    for warning in config.measurements.check_form_ranges() {
        tracing::warn!("{}", warning);
    }

    let points = config.build()?;
    let fitter = config.fitter();
    let front = PieceLayout::front(&points, &fitter)?;
    let back = PieceLayout::back(&points, &fitter)?;

    let root = BitMapBackend::new("trouser_pattern.png", (900, 1200)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((1, 2));

    draw_piece(&areas[0], "Front", &front, &points)?;
    draw_piece(&areas[1], "Back", &back, &points)?;

    root.present()?;
    Ok(())
}

fn draw_piece<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    caption: &str,
    layout: &PieceLayout,
    points: &PointSet,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    let [(xmin, xmax), (ymin, ymax)] = layout.bounding_box().ok_or("empty layout")?;

    // leave room for the point labels around the piece
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d((xmin - 5.0)..(xmax + 5.0), (ymin - 5.0)..(ymax + 15.0))?;

    chart.configure_mesh().draw()?;

    for seam in &layout.seams {
        let color = match seam.kind {
            SeamKind::Straight => BLACK,
            SeamKind::Curved => RED,
            SeamKind::Fork => BLUE,
            SeamKind::Dart => GREEN,
        };
        chart.draw_series(LineSeries::new(
            seam.curve.iter().map(|p| (p.x, p.y)),
            &color,
        ))?;
    }

    // mark the landmarks that lie inside this piece
    let landmarks: Vec<(String, (f64, f64))> = points
        .iter()
        .filter(|(_, p)| p.x >= xmin && p.x <= xmax && p.y >= ymin && p.y <= ymax)
        .map(|(id, p)| (id.to_string(), (p.x, p.y)))
        .collect();

    chart.draw_series(landmarks.iter().map(|(label, coord)| {
        EmptyElement::at(*coord)
            + Circle::new((0, 0), 2, BLUE.filled())
            + Text::new(label.clone(), (4, -10), ("sans-serif", 11).into_font())
    }))?;

    chart
        .draw_series(
            AreaSeries::new(
                layout
                    .outline()
                    .iter()
                    .chain(layout.outline().first())
                    .map(|p| (p.x, p.y)),
                0.0,
                BLUE.mix(0.0),
            )
            .border_style(BLUE.mix(0.3)),
        )?
        .label(format!("outline area {:.1} cm²", layout.outline_area()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
