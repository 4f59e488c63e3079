pub mod constants;
pub mod math_utils;
pub mod error;
pub mod logging;
pub mod geometry;
pub mod lattice;
pub mod edges;
pub mod pixel_source;
pub mod sampler;
pub mod surface;
pub mod config;
pub mod renderer;

pub use config::{CanvasSource, OverlayConfig, RenderMode};
pub use edges::{Edge, EdgeSelection, StrokePlan, select_edges};
pub use error::{HexError, Result};
pub use geometry::{Hexagon, LatticeIndex, Point, Tiling, VertexAnchor, lattice_center};
pub use lattice::{CanvasBounds, LatticeCell, LatticeWalker};
pub use pixel_source::{Pixel, PixelSource};
pub use renderer::{HexRenderer, RenderSummary, render_file};
pub use sampler::{ColorSampler, Sample, sample_color};
pub use surface::{RasterSurface, RecordingSurface, Stroke, Surface};
