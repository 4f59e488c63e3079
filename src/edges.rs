/// Choosing which hexagon edges to stroke
///
/// Neighbouring hexagons share borders. Because the lattice is walked
/// row-major with ascending columns, the top and upper-left borders of a
/// cell always belong to a hexagon that was visited earlier. These rules are
/// only valid for that scan order.

use serde::{Deserialize, Serialize};

use crate::constants::{EDGE_KEY_SCALE, HEXAGON_SIDES, LEADING_EDGE_COUNT};
use crate::geometry::{LatticeIndex, Point};

/// Which edges a non-header hexagon strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSelection {
    /// First four edges in vertex order: upper-right, lower-right, bottom,
    /// lower-left. Upper-right borders get stroked twice, which also covers
    /// cells at the right margin whose upper-right neighbour is never visited.
    #[default]
    Leading,
    /// Only the three lower edges, so every shared border is stroked once.
    Owned,
}

impl EdgeSelection {
    fn picks(&self) -> std::ops::Range<usize> {
        match self {
            EdgeSelection::Leading => 0..LEADING_EDGE_COUNT,
            EdgeSelection::Owned => 1..LEADING_EDGE_COUNT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

/// Orientation-independent, quantised identity of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey([(i64, i64); 2]);

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Two edges covering the same segment share a key, whichever way round
    /// they were built.
    pub fn key(&self) -> EdgeKey {
        let quantise = |p: Point| {
            (
                (p.x * EDGE_KEY_SCALE).round() as i64,
                (p.y * EDGE_KEY_SCALE).round() as i64,
            )
        };
        let (a, b) = (quantise(self.start), quantise(self.end));
        EdgeKey(if a <= b { [a, b] } else { [b, a] })
    }
}

/// What to stroke for one hexagon
#[derive(Debug, Clone, PartialEq)]
pub enum StrokePlan {
    /// Whole outline as one closed polygon
    Closed([Point; HEXAGON_SIDES]),
    /// Individual segments
    Segments(Vec<Edge>),
}

impl StrokePlan {
    /// Edges this plan strokes, closed outlines expanded to all six
    pub fn edges(&self) -> Vec<Edge> {
        match self {
            StrokePlan::Closed(vertices) => hexagon_edges(vertices).to_vec(),
            StrokePlan::Segments(edges) => edges.clone(),
        }
    }
}

/// All six edges, `vertex[i]` to `vertex[i + 1]`, closing `vertex[5]` back
/// to `vertex[0]`.
pub fn hexagon_edges(vertices: &[Point; HEXAGON_SIDES]) -> [Edge; HEXAGON_SIDES] {
    std::array::from_fn(|i| Edge::new(vertices[i], vertices[(i + 1) % HEXAGON_SIDES]))
}

/// The header row has nothing above it, so its hexagons are stroked whole.
pub fn select_edges(
    index: LatticeIndex,
    vertices: &[Point; HEXAGON_SIDES],
    selection: EdgeSelection,
) -> StrokePlan {
    if index.is_header() {
        return StrokePlan::Closed(*vertices);
    }
    let edges = hexagon_edges(vertices);
    StrokePlan::Segments(edges[selection.picks()].to_vec())
}
