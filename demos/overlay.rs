// Draw a hexagon overlay described by a JSON config file.
//
//   cargo run --example overlay -- overlay.json
//
// Without a config path, a blank A4 page at 300 dpi is written to hexagons.png.

use hex_overlay::logging::init_logging;
use hex_overlay::{OverlayConfig, render_file};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = init_logging("info")?;

    let config = match std::env::args().nth(1) {
        Some(path) => OverlayConfig::from_json_file(path)?,
        None => OverlayConfig::default(),
    };

    let summary = render_file(&config)?;
    println!(
        "Drew {} hexagons in {} rows to {}",
        summary.hexagons,
        summary.rows,
        config.output_path.display()
    );
    Ok(())
}
