//! Render the default view to `mandelview.png` in the current directory.
//!
//! Usage: `cargo run --release --example render_frame [zoom]`

use std::path::Path;

use mandelview_engine::{export_png, ExportSettings, ViewParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut params = ViewParameters::default();
    if let Some(zoom) = std::env::args().nth(1) {
        params.zoom = zoom.parse()?;
    }

    let settings = ExportSettings {
        width: 1280,
        height: 720,
        iteration_multiplier: 1,
    };
    export_png(Path::new("mandelview.png"), &params, &settings)?;
    println!(
        "Wrote mandelview.png ({}x{}, zoom {})",
        settings.width, settings.height, params.zoom
    );
    Ok(())
}
