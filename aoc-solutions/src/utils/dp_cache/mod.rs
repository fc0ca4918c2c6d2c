//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoization for dynamic programming problems where values depend on other
//! values in a directed acyclic graph (DAG). A problem is described by a
//! [`DpProblem`] (or a [`ClosureProblem`]), and values live in a pluggable
//! [`Backend`].
//!
//! # Backend Types
//!
//! - [`VecBackend`]: Dense, sequential `usize` indices (auto-growing)
//! - [`HashMapBackend`]: Arbitrary hashable index types
//!
//! # Cycles
//!
//! Dependencies are resolved iteratively. A dependency cycle is detected and
//! reported as [`DpError::Cycle`] instead of overflowing the stack.
//!
//! # Example: Trait-based API with Builder
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] }
//!         else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 }
//!         else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(VecBackend::new())
//!     .problem(Fibonacci)
//!     .build();
//! assert_eq!(cache.get(&10).unwrap(), 55);
//! ```
//!
//! # Example: 2D Grid with HashMapBackend
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         if r == 0 && c == 0 { vec![] }
//!         else if r == 0 { vec![(0, c - 1)] }
//!         else if c == 0 { vec![(r - 1, 0)] }
//!         else { vec![(r - 1, c), (r, c - 1)] }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(HashMapBackend::new())
//!     .problem(GridPaths)
//!     .build();
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70); // C(8,4) = 70 paths
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, Slot, VecBackend};
pub use cache::{DpCache, DpCacheBuilder, DpError};
pub use problem::{ClosureProblem, DpProblem};
