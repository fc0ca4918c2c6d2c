//! Incremental connectivity over a distance-ranked edge stream
//!
//! Points in 3-D space are joined shortest-edge-first, and a [`UnionFind`]
//! tracks which points have become connected ("circuits").
//!
//! # Pipeline
//!
//! 1. [`parse_points`] turns `x,y,z` lines into [`Point3`]s; line order is
//!    vertex order.
//! 2. [`rank_edges`] produces all `n * (n - 1) / 2` pairs ordered by
//!    (distance, a, b).
//! 3. One of two consumers walks the ranking:
//!    - [`circuit_sizes`] takes a fixed budget of edges *by position*. An
//!      edge whose endpoints are already connected still uses up one unit of
//!      budget.
//!    - [`final_connection`] skips redundant edges and stops at the edge that
//!      leaves a single circuit, i.e. the last edge Kruskal's algorithm would
//!      add to a minimum spanning tree.
//!
//! Both consumers own a fresh [`UnionFind`] per call. The `*_from_edges`
//! variants accept an existing ranking so it can be reused between calls.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::connectivity::{
//!     circuit_sizes, final_connection, parse_points, product_of_largest,
//! };
//!
//! let points = parse_points("0,0,0\n1,0,0\n10,0,0\n12,0,0\n30,0,0").unwrap();
//!
//! // Two shortest edges: 0-1 (1.0) and 2-3 (2.0)
//! let sizes = circuit_sizes(&points, 2);
//! assert_eq!(sizes, vec![2, 2, 1]);
//! assert_eq!(product_of_largest(&sizes, 3), 4);
//!
//! // 30,0,0 is the last point to join
//! let (a, b) = final_connection(&points).unwrap();
//! assert_eq!((a.x, b.x), (12, 30));
//! ```

mod edge;
mod point;
mod union_find;

pub use edge::{Edge, rank_edges};
pub use point::{Point3, PointParseError, parse_points};
pub use union_find::UnionFind;

/// Circuit sizes, largest first, after consuming the `budget` shortest edges.
pub fn circuit_sizes(points: &[Point3], budget: usize) -> Vec<usize> {
    circuit_sizes_from_edges(points.len(), &rank_edges(points), budget)
}

/// [`circuit_sizes`] over a precomputed ranking of a `vertex_count`-point set.
///
/// Exactly `min(budget, edges.len())` edges are consumed, merging or not.
/// The returned sizes always sum to `vertex_count`.
pub fn circuit_sizes_from_edges(vertex_count: usize, edges: &[Edge], budget: usize) -> Vec<usize> {
    let mut circuits = UnionFind::new(vertex_count);
    for edge in edges.iter().take(budget) {
        circuits.union(edge.a, edge.b);
    }
    circuits.set_sizes()
}

/// Product of the `count` largest sizes, or 0 when there are fewer than `count`.
///
/// `sizes` must already be sorted largest first.
pub fn product_of_largest(sizes: &[usize], count: usize) -> u64 {
    match sizes.get(..count) {
        Some(largest) => largest.iter().map(|&s| s as u64).product(),
        None => 0,
    }
}

/// Endpoints of the edge that first connects every point into one circuit.
///
/// `None` for fewer than two points.
pub fn final_connection(points: &[Point3]) -> Option<(Point3, Point3)> {
    final_edge(points.len(), &rank_edges(points)).map(|edge| edge.endpoints(points))
}

/// [`final_connection`] over a precomputed ranking, returning the edge itself.
///
/// Edges whose endpoints are already connected are skipped. Returns `None`
/// if `vertex_count <= 1` or the edges run out before everything is connected.
pub fn final_edge(vertex_count: usize, edges: &[Edge]) -> Option<Edge> {
    if vertex_count <= 1 {
        return None;
    }
    let mut circuits = UnionFind::new(vertex_count);
    edges
        .iter()
        .find(|edge| circuits.union(edge.a, edge.b) && circuits.set_count() == 1)
        .copied()
}
