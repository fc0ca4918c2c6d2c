//! Pairwise edges ranked by length.

use std::cmp::Ordering;

use super::point::Point3;

/// An undirected edge between two point indices, `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub distance: f64,
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Total order used for ranking: distance, then `a`, then `b`.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.a.cmp(&other.a))
            .then(self.b.cmp(&other.b))
    }

    /// The two endpoint points, looked up in the slice the edge was ranked from.
    pub fn endpoints(&self, points: &[Point3]) -> (Point3, Point3) {
        (points[self.a], points[self.b])
    }
}

/// Every unordered pair of points, shortest first.
///
/// Equal distances are common with integer coordinates; ties fall back to the
/// index pair so the ranking is fully deterministic. Fewer than two points
/// yield no edges.
pub fn rank_edges(points: &[Point3]) -> Vec<Edge> {
    let n = points.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (a, p) in points.iter().enumerate() {
        for (b, q) in points.iter().enumerate().skip(a + 1) {
            edges.push(Edge {
                distance: p.distance(q),
                a,
                b,
            });
        }
    }
    edges.sort_unstable_by(Edge::rank_cmp);
    edges
}
