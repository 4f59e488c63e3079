use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    A4_HEIGHT_INCHES, A4_WIDTH_INCHES, DEFAULT_BACKGROUND, DEFAULT_LABEL_SIZE, DEFAULT_OUTPUT_PATH,
    DEFAULT_RADIUS_INCHES, DEFAULT_RESOLUTION_DPI, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
};
use crate::edges::EdgeSelection;
use crate::error::{HexError, Result};
use crate::geometry::{Point, VertexAnchor};

/// Radius in pixels for a hexagon edge of `inches` printed at `resolution` dpi
pub fn physical_radius(inches: f64, resolution: u32) -> f64 {
    inches * resolution as f64
}

/// What the overlay is drawn on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CanvasSource {
    /// A fresh canvas of one color
    Blank {
        width: u32,
        height: u32,
        #[serde(default = "default_background")]
        background: [u8; 3],
    },
    /// An existing image, which is also the source for sampled fills
    Image { path: PathBuf },
}

fn default_background() -> [u8; 3] {
    DEFAULT_BACKGROUND
}

impl CanvasSource {
    /// Blank A4 page at `resolution` dpi
    pub fn a4(resolution: u32) -> Self {
        CanvasSource::Blank {
            width: (A4_WIDTH_INCHES * resolution as f64) as u32,
            height: (A4_HEIGHT_INCHES * resolution as f64) as u32,
            background: DEFAULT_BACKGROUND,
        }
    }
}

/// How hexagon interiors are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Outlines only, no sampling
    Outline,
    /// Interiors filled with the sampled color at this alpha
    Sampled { opacity: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Hexagon edge length in pixels
    pub radius: f64,
    pub stroke_width: u32,
    pub stroke_color: [u8; 3],
    /// 0 disables sampled fills
    pub fill_opacity: u8,
    /// Lattice translation in pixels
    pub origin: [f64; 2],
    pub vertex_anchor: VertexAnchor,
    pub edge_selection: EdgeSelection,
    pub labels: bool,
    pub label_size: f32,
    pub canvas: CanvasSource,
    pub font_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Fixed seed for reproducible fills
    pub seed: Option<u64>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::a4(DEFAULT_RESOLUTION_DPI)
    }
}

impl OverlayConfig {
    /// Blank A4 page with the stock 0.65 inch hexagons
    pub fn a4(resolution: u32) -> Self {
        Self {
            radius: physical_radius(DEFAULT_RADIUS_INCHES, resolution),
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: DEFAULT_STROKE_COLOR,
            fill_opacity: 0,
            origin: [0.0, 0.0],
            vertex_anchor: VertexAnchor::default(),
            edge_selection: EdgeSelection::default(),
            labels: false,
            label_size: DEFAULT_LABEL_SIZE,
            canvas: CanvasSource::a4(resolution),
            font_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: OverlayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn origin_point(&self) -> Point {
        Point::new(self.origin[0], self.origin[1])
    }

    pub fn render_mode(&self) -> RenderMode {
        match self.fill_opacity {
            0 => RenderMode::Outline,
            opacity => RenderMode::Sampled { opacity },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(HexError::InvalidGeometry(format!(
                "radius must be finite and positive, got {}",
                self.radius
            )));
        }
        if !self.origin_point().is_finite() {
            return Err(HexError::InvalidGeometry(format!(
                "origin must be finite, got {:?}",
                self.origin
            )));
        }
        if let CanvasSource::Blank { width, height, .. } = self.canvas {
            if width == 0 || height == 0 {
                return Err(HexError::InvalidConfig(format!(
                    "blank canvas must have a non-zero size, got {width}x{height}"
                )));
            }
        }
        if self.labels && !(self.label_size.is_finite() && self.label_size > 0.0) {
            return Err(HexError::InvalidConfig(format!(
                "label size must be positive, got {}",
                self.label_size
            )));
        }
        Ok(())
    }
}
