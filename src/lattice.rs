/// Row-major walk over the hexagon lattice, clipped to a canvas
///
/// The walk starts at the header row (-1), column 0, and visits columns in
/// ascending order. A row ends on the first hexagon with any vertex past the
/// right edge; the walk ends on a row whose hexagons lie entirely below the
/// bottom edge. That final row is still emitted.

use log::debug;

use crate::constants::HEXAGON_SIDES;
use crate::geometry::{Hexagon, LatticeIndex, Point, Tiling};

/// Size of the target canvas in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBounds {
    pub width: u32,
    pub height: u32,
}

impl CanvasBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True as soon as part of the outline leaves the canvas on the right
    pub fn any_past_right(&self, vertices: &[Point]) -> bool {
        let width = self.width as f64;
        vertices.iter().any(|v| v.x > width)
    }

    /// True only once the whole outline is below the canvas
    pub fn all_past_bottom(&self, vertices: &[Point]) -> bool {
        let height = self.height as f64;
        vertices.iter().all(|v| v.y > height)
    }
}

/// One hexagon emitted by the walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeCell {
    pub index: LatticeIndex,
    /// 1-based position in walk order
    pub ordinal: usize,
    pub hexagon: Hexagon,
    pub vertices: [Point; HEXAGON_SIDES],
    /// Last hexagon of its row
    pub ends_row: bool,
}

impl LatticeCell {
    pub fn is_header(&self) -> bool {
        self.index.is_header()
    }
}

pub struct LatticeWalker<'a> {
    tiling: &'a Tiling,
    bounds: CanvasBounds,
    next: Option<LatticeIndex>,
    emitted: usize,
}

impl<'a> LatticeWalker<'a> {
    pub fn new(tiling: &'a Tiling, bounds: CanvasBounds) -> Self {
        Self {
            tiling,
            bounds,
            next: Some(LatticeIndex::header()),
            emitted: 0,
        }
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn is_finished(&self) -> bool {
        self.next.is_none()
    }
}

impl Iterator for LatticeWalker<'_> {
    type Item = LatticeCell;

    fn next(&mut self) -> Option<LatticeCell> {
        let index = self.next?;
        let hexagon = self.tiling.hexagon(index);
        let vertices = hexagon.vertices();

        let ends_row = self.bounds.any_past_right(&vertices);
        self.next = if !ends_row {
            Some(index.next_col())
        } else if self.bounds.all_past_bottom(&vertices) {
            debug!("lattice walk finished at row {} after {} hexagons", index.row, self.emitted + 1);
            None
        } else {
            debug!("row {} wrapped after {} columns", index.row, index.col + 1);
            Some(index.next_row())
        };

        self.emitted += 1;
        Some(LatticeCell {
            index,
            ordinal: self.emitted,
            hexagon,
            vertices,
            ends_row,
        })
    }
}
