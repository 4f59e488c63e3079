/// Hexagon geometry for the offset-row lattice
///
/// Hexagons are flat-topped with columns `3r` apart and rows `sin(60°)·r`
/// apart, odd rows shifted right by half a column so the rows interlock.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COLUMN_WIDTH_FACTOR, HEADER_ROW, HEXAGON_SIDES, ROW_OFFSET_FACTOR, SIN_60, VERTEX_ANGLE_STEP_DEG,
};
use crate::error::{HexError, Result};
use crate::math_utils::{row_parity, unit_at_degrees};

/// A position in image pixel space
pub type Point = DVec2;

/// Where a hexagon's nominal center sits relative to the drawn outline.
///
/// Vertices are built by walking the outline edge by edge starting from the
/// nominal center, which leaves that center on vertex 5 rather than in the
/// middle of the cell. `Corner` keeps that placement so output matches
/// earlier renders; `Centroid` shifts the outline so the nominal center is
/// the true centroid. Both produce the same shape and vertex order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexAnchor {
    #[default]
    Corner,
    Centroid,
}

/// (row, col) position of a hexagon in the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeIndex {
    pub row: i64,
    pub col: i64,
}

impl LatticeIndex {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// First cell of the walk: header row, column 0
    pub fn header() -> Self {
        Self::new(HEADER_ROW, 0)
    }

    pub fn is_header(&self) -> bool {
        self.row == HEADER_ROW
    }

    pub fn next_col(&self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    pub fn next_row(&self) -> Self {
        Self::new(self.row + 1, 0)
    }
}

/// Center of the hexagon at `(row, col)` for edge length `radius`, with the
/// lattice origin at (0, 0).
pub fn lattice_center(row: i64, col: i64, radius: f64) -> Point {
    let shift = ROW_OFFSET_FACTOR * row_parity(row) as f64;
    let x = (col as f64 + shift) * COLUMN_WIDTH_FACTOR * radius;
    let y = row as f64 * SIN_60 * radius;
    Point::new(x, y)
}

fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(HexError::InvalidGeometry(format!(
            "radius must be finite and positive, got {radius}"
        )));
    }
    Ok(())
}

fn validate_point(label: &str, point: Point) -> Result<()> {
    if !point.is_finite() {
        return Err(HexError::InvalidGeometry(format!(
            "{label} must be finite, got ({}, {})",
            point.x, point.y
        )));
    }
    Ok(())
}

/// A regular hexagon with edge length `radius`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hexagon {
    radius: f64,
    center: Point,
    anchor: VertexAnchor,
}

impl Hexagon {
    pub fn new(radius: f64, center: Point) -> Result<Self> {
        validate_radius(radius)?;
        validate_point("hexagon center", center)?;
        Ok(Self {
            radius,
            center,
            anchor: VertexAnchor::default(),
        })
    }

    pub fn with_anchor(mut self, anchor: VertexAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Nominal center; the color sampler draws around this point
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn anchor(&self) -> VertexAnchor {
        self.anchor
    }

    /// Distance from the middle of the cell to the middle of an edge
    pub fn apothem(&self) -> f64 {
        SIN_60 * self.radius
    }

    /// Offset from the walk's starting point to the middle of the outline
    fn centroid_offset(&self) -> Point {
        Point::new(0.5 * self.radius, SIN_60 * self.radius)
    }

    /// True centroid of the drawn outline
    pub fn centroid(&self) -> Point {
        match self.anchor {
            VertexAnchor::Corner => self.center + self.centroid_offset(),
            VertexAnchor::Centroid => self.center,
        }
    }

    /// The 6 outline vertices in angle-ascending order.
    ///
    /// Each vertex is the previous one plus `radius` along 0°, 60°, ... 300°.
    pub fn vertices(&self) -> [Point; HEXAGON_SIDES] {
        let mut cursor = match self.anchor {
            VertexAnchor::Corner => self.center,
            VertexAnchor::Centroid => self.center - self.centroid_offset(),
        };
        let mut vertices = [Point::ZERO; HEXAGON_SIDES];
        for (step, vertex) in vertices.iter_mut().enumerate() {
            cursor += unit_at_degrees(step as u32 * VERTEX_ANGLE_STEP_DEG) * self.radius;
            *vertex = cursor;
        }
        vertices
    }
}

/// The lattice: a fixed edge length plus an origin that translates every cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tiling {
    radius: f64,
    origin: Point,
    anchor: VertexAnchor,
}

impl Tiling {
    pub fn new(radius: f64) -> Result<Self> {
        validate_radius(radius)?;
        Ok(Self {
            radius,
            origin: Point::ZERO,
            anchor: VertexAnchor::default(),
        })
    }

    pub fn with_origin(mut self, origin: Point) -> Result<Self> {
        validate_point("lattice origin", origin)?;
        self.origin = origin;
        Ok(self)
    }

    pub fn with_anchor(mut self, anchor: VertexAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn anchor(&self) -> VertexAnchor {
        self.anchor
    }

    pub fn col_width(&self) -> f64 {
        COLUMN_WIDTH_FACTOR * self.radius
    }

    pub fn row_height(&self) -> f64 {
        SIN_60 * self.radius
    }

    pub fn center(&self, index: LatticeIndex) -> Point {
        lattice_center(index.row, index.col, self.radius) + self.origin
    }

    pub fn hexagon(&self, index: LatticeIndex) -> Hexagon {
        // radius and origin were validated on construction
        Hexagon {
            radius: self.radius,
            center: self.center(index),
            anchor: self.anchor,
        }
    }
}
