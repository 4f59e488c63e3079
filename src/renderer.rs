/// One overlay pass: walk, sample, select edges, paint
///
/// Each hexagon is finished (fill, outline, label) before the walk moves on,
/// which the shared-edge rules depend on.

use ab_glyph::FontArc;
use image::{DynamicImage, Rgb, Rgba, RgbaImage};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{CanvasSource, OverlayConfig, RenderMode};
use crate::edges::{EdgeSelection, StrokePlan, select_edges};
use crate::error::{HexError, Result};
use crate::geometry::Tiling;
use crate::lattice::{CanvasBounds, LatticeCell, LatticeWalker};
use crate::pixel_source::PixelSource;
use crate::sampler::ColorSampler;
use crate::surface::{RasterSurface, Stroke, Surface};

/// Counts from a finished pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub hexagons: usize,
    pub rows: usize,
    pub polygons: usize,
    pub lines: usize,
    pub labels: usize,
    /// Sampled hexagons that got the black fallback
    pub fallback_fills: usize,
}

#[derive(Debug, Clone)]
pub struct HexRenderer {
    tiling: Tiling,
    bounds: CanvasBounds,
    stroke: Stroke,
    mode: RenderMode,
    edge_selection: EdgeSelection,
    label_size: Option<f32>,
    sampler: ColorSampler,
}

impl HexRenderer {
    pub fn new(config: &OverlayConfig, bounds: CanvasBounds) -> Result<Self> {
        config.validate()?;
        let tiling = Tiling::new(config.radius)?
            .with_origin(config.origin_point())?
            .with_anchor(config.vertex_anchor);
        Ok(Self {
            tiling,
            bounds,
            stroke: Stroke::new(Rgb(config.stroke_color), config.stroke_width),
            mode: config.render_mode(),
            edge_selection: config.edge_selection,
            label_size: config.labels.then_some(config.label_size),
            sampler: ColorSampler::default(),
        })
    }

    pub fn with_sampler(mut self, sampler: ColorSampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn tiling(&self) -> &Tiling {
        &self.tiling
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Paint the whole lattice onto `surface` and flush it once.
    ///
    /// Sampled fills read from `source`, which must be given in
    /// `RenderMode::Sampled`.
    pub fn render<S, R>(
        &self,
        surface: &mut S,
        source: Option<&dyn PixelSource>,
        rng: &mut R,
    ) -> Result<RenderSummary>
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let fill_source = match (self.mode, source) {
            (RenderMode::Outline, _) => None,
            (RenderMode::Sampled { opacity }, Some(source)) => Some((source, opacity)),
            (RenderMode::Sampled { .. }, None) => {
                return Err(HexError::InvalidConfig(
                    "sampled fills need a source image".to_string(),
                ));
            }
        };

        let mut summary = RenderSummary::default();
        for cell in LatticeWalker::new(&self.tiling, self.bounds) {
            let fill = match fill_source {
                Some((source, opacity)) => {
                    let sample = self.sampler.sample(source, &cell.hexagon, rng);
                    if sample.is_fallback() {
                        summary.fallback_fills += 1;
                    }
                    let [r, g, b] = sample.color.0;
                    Some(Rgba([r, g, b, opacity]))
                }
                None => None,
            };
            self.draw_cell(surface, &cell, fill, &mut summary);
            summary.hexagons += 1;
            if cell.ends_row {
                summary.rows += 1;
            }
        }
        surface.flush();

        info!(
            "rendered {} hexagons in {} rows ({} polygons, {} lines, {} fallback fills)",
            summary.hexagons, summary.rows, summary.polygons, summary.lines, summary.fallback_fills
        );
        Ok(summary)
    }

    fn draw_cell<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        cell: &LatticeCell,
        fill: Option<Rgba<u8>>,
        summary: &mut RenderSummary,
    ) {
        let stroke = self.stroke.visible();
        // a fill covers the borders neighbours already stroked, so filled
        // cells restroke their whole outline
        let plan = match fill {
            Some(_) => StrokePlan::Closed(cell.vertices),
            None => select_edges(cell.index, &cell.vertices, self.edge_selection),
        };
        match plan {
            StrokePlan::Closed(vertices) => {
                if stroke.is_some() || fill.is_some() {
                    surface.polygon(&vertices, stroke, fill);
                    summary.polygons += 1;
                }
            }
            StrokePlan::Segments(edges) => {
                if let Some(stroke) = stroke {
                    for edge in &edges {
                        surface.line(edge.start, edge.end, stroke);
                    }
                    summary.lines += edges.len();
                }
            }
        }

        if let Some(size) = self.label_size {
            surface.text(cell.hexagon.centroid(), &cell.ordinal.to_string(), size, self.stroke.color);
            summary.labels += 1;
        }
    }
}

fn load_font(config: &OverlayConfig) -> Result<Option<FontArc>> {
    let Some(path) = config.font_path.as_ref() else {
        return Ok(None);
    };
    let bytes = std::fs::read(path)?;
    let font = FontArc::try_from_vec(bytes)
        .map_err(|e| HexError::Font(format!("{}: {}", path.display(), e)))?;
    Ok(Some(font))
}

fn load_canvas(canvas: &CanvasSource) -> Result<RgbaImage> {
    match canvas {
        CanvasSource::Blank {
            width,
            height,
            background,
        } => {
            let [r, g, b] = *background;
            Ok(RgbaImage::from_pixel(*width, *height, Rgba([r, g, b, u8::MAX])))
        }
        CanvasSource::Image { path } => {
            debug!("loading base image {}", path.display());
            Ok(image::open(path)?.to_rgba8())
        }
    }
}

/// Load the canvas named in `config`, draw the overlay, and save it to
/// `config.output_path`.
pub fn render_file(config: &OverlayConfig) -> Result<RenderSummary> {
    let base = load_canvas(&config.canvas)?;
    let bounds = CanvasBounds::new(base.width(), base.height());
    let renderer = HexRenderer::new(config, bounds)?;
    let font = load_font(config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut surface = RasterSurface::new(base.clone()).with_font(font);
    let summary = renderer.render(&mut surface, Some(&base), &mut rng)?;

    DynamicImage::ImageRgba8(surface.into_image())
        .to_rgb8()
        .save(&config.output_path)?;
    info!("saved overlay to {}", config.output_path.display());
    Ok(summary)
}
