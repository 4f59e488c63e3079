// Lattice geometry
pub const HEXAGON_SIDES: usize = 6;
pub const VERTEX_ANGLE_STEP_DEG: u32 = 60;
pub const SIN_60: f64 = 0.866_025_403_784_438_6; // sin(60°), also the apothem per unit edge
pub const COLUMN_WIDTH_FACTOR: f64 = 3.0; // column spacing in edge lengths
pub const ROW_OFFSET_FACTOR: f64 = 0.5; // odd rows shift by half a column
pub const HEADER_ROW: i64 = -1;

// Edges stroked per non-header hexagon
pub const LEADING_EDGE_COUNT: usize = 4;

// Color sampling caps
pub const SAMPLE_TARGET: usize = 100;
pub const SAMPLE_MAX_ATTEMPTS: usize = 200;

// Defaults for a rendering pass
pub const DEFAULT_RESOLUTION_DPI: u32 = 300;
pub const DEFAULT_RADIUS_INCHES: f64 = 0.65;
pub const DEFAULT_STROKE_WIDTH: u32 = 3;
pub const DEFAULT_STROKE_COLOR: [u8; 3] = [0, 0, 0];
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];
pub const DEFAULT_LABEL_SIZE: f32 = 24.0;
pub const DEFAULT_OUTPUT_PATH: &str = "hexagons.png";

// A4 paper in inches
pub const A4_WIDTH_INCHES: f64 = 8.3;
pub const A4_HEIGHT_INCHES: f64 = 11.7;

// Edge keys quantise coordinates to this many steps per pixel
pub const EDGE_KEY_SCALE: f64 = 1000.0;
