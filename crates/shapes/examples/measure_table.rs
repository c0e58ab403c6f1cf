//! Measure a handful of fixed and sampled figures and print one JSON line each.
//!
//! Run: `cargo run -p shapes --example measure_table`

use anyhow::Result;
use shapes::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut figures: Vec<Figure> = vec![
        Circle::new(5.0).into(),
        Triangle::new(3.0, 4.0, 5.0).into(),
        Rectangle::new(6.0, 4.0).into(),
        Rectangle::square(5.0).into(),
        Triangle::new(1.0, 2.0, 10.0).into(),
    ];
    figures.extend(draw_figures(FigureCfg::default(), ReplayToken::new(7, 0), 3));

    let cfg = ShapeCfg::default();
    for fig in &figures {
        let m = fig.measure();
        let valid = fig.validate(&cfg).is_ok();
        tracing::info!(
            kind = fig.kind(),
            perimeter = m.perimeter,
            area = m.area,
            valid,
            "measured"
        );
        let row = serde_json::json!({
            "figure": fig,
            "measurement": m,
            "valid": valid,
        });
        println!("{}", serde_json::to_string(&row)?);
    }
    Ok(())
}
