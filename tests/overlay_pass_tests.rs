// End-to-end overlay passes through the public API
// Walks the reference 100x100 canvas and checks what reaches the surface

use hex_overlay::surface::DrawCommand;
use hex_overlay::{
    CanvasBounds, CanvasSource, EdgeSelection, HexRenderer, LatticeWalker, OverlayConfig,
    RecordingSurface, Tiling, render_file,
};
use image::{Rgb, RgbImage};
use more_asserts::assert_gt;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn reference_config() -> OverlayConfig {
    OverlayConfig {
        radius: 10.0,
        stroke_width: 1,
        canvas: CanvasSource::Blank {
            width: 100,
            height: 100,
            background: [255, 255, 255],
        },
        ..OverlayConfig::default()
    }
}

fn record(config: &OverlayConfig) -> (RecordingSurface, hex_overlay::RenderSummary) {
    let renderer = HexRenderer::new(config, CanvasBounds::new(100, 100)).unwrap();
    let mut surface = RecordingSurface::new();
    let summary = renderer
        .render(&mut surface, None, &mut StdRng::seed_from_u64(0))
        .unwrap();
    (surface, summary)
}

#[test]
fn test_reference_pass_counts() {
    println!("Reference pass: radius 10 on 100x100");
    let (surface, summary) = record(&reference_config());

    println!("   hexagons: {}, rows: {}", summary.hexagons, summary.rows);
    assert_eq!(summary.hexagons, 56);
    assert_eq!(summary.rows, 14); // header row plus rows 0..=12

    // header row: 4 closed outlines, everything else: 4 segments per hexagon
    assert_eq!(summary.polygons, 4);
    assert_eq!(summary.lines, 52 * 4);
    assert_eq!(surface.flush_count, 1);
}

#[test]
fn test_header_row_drawn_as_closed_polygons() {
    let (surface, _) = record(&reference_config());
    let tiling = Tiling::new(10.0).unwrap();
    let header: Vec<_> = LatticeWalker::new(&tiling, CanvasBounds::new(100, 100))
        .take_while(|cell| cell.is_header())
        .collect();
    assert_eq!(header.len(), 4);

    // the header outlines come first, in walk order
    for (cell, command) in header.iter().zip(surface.commands.iter()) {
        match command {
            DrawCommand::Polygon { points, stroke, fill } => {
                assert_eq!(points.as_slice(), cell.vertices.as_slice());
                assert!(stroke.is_some());
                assert!(fill.is_none());
            }
            other => panic!("expected a header polygon, got {other:?}"),
        }
    }
    assert!(matches!(surface.commands[4], DrawCommand::Line { .. }));
}

#[test]
fn test_body_rows_stroke_four_edges_each() {
    let (surface, _) = record(&reference_config());
    let tiling = Tiling::new(10.0).unwrap();
    let body: Vec<_> = LatticeWalker::new(&tiling, CanvasBounds::new(100, 100))
        .filter(|cell| !cell.is_header())
        .collect();
    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines.len(), body.len() * 4);

    for (cell, strokes) in body.iter().zip(lines.chunks(4)) {
        for (i, (start, end)) in strokes.iter().enumerate() {
            assert_eq!(*start, cell.vertices[i]);
            assert_eq!(*end, cell.vertices[i + 1]);
        }
    }
}

#[test]
fn test_owned_edges_stroke_three_per_hexagon() {
    let config = OverlayConfig {
        edge_selection: EdgeSelection::Owned,
        ..reference_config()
    };
    let (_, summary) = record(&config);
    assert_eq!(summary.hexagons, 56);
    assert_eq!(summary.lines, 52 * 3);
}

#[test]
fn test_render_file_writes_sampled_overlay() {
    println!("Rendering a sampled overlay over a two-tone image");
    let dir = std::env::temp_dir().join(format!("hex_overlay_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let base_path = dir.join("base.png");
    let out_path = dir.join("overlay.png");

    let base = RgbImage::from_fn(120, 90, |x, _| {
        if x < 60 { Rgb([200, 30, 30]) } else { Rgb([30, 30, 200]) }
    });
    base.save(&base_path).unwrap();

    let config = OverlayConfig {
        radius: 12.0,
        stroke_width: 2,
        fill_opacity: 255,
        canvas: CanvasSource::Image { path: base_path.clone() },
        output_path: out_path.clone(),
        seed: Some(17),
        ..OverlayConfig::default()
    };
    let summary = render_file(&config).unwrap();
    println!("   {} hexagons, {} fallback fills", summary.hexagons, summary.fallback_fills);
    assert_gt!(summary.hexagons, 0);

    let rendered = image::open(&out_path).unwrap().to_rgb8();
    assert_eq!(rendered.dimensions(), (120, 90));
    // the overlay changed the image
    assert_ne!(rendered, base);

    // same seed, same output
    let second = render_file(&config).unwrap();
    assert_eq!(second, summary);
    assert_eq!(image::open(&out_path).unwrap().to_rgb8(), rendered);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_render_file_reports_missing_image() {
    let config = OverlayConfig {
        canvas: CanvasSource::Image {
            path: "/nonexistent/base.png".into(),
        },
        ..OverlayConfig::default()
    };
    assert!(render_file(&config).is_err());
}
