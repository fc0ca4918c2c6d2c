//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use thiserror::Error;

use super::backend::{Backend, Slot};
use super::problem::DpProblem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DpError {
    #[error("dependency cycle detected")]
    Cycle,
}

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Each value is computed at most once. Dependencies are resolved with an
/// explicit worklist, so deep dependency chains do not grow the call stack.
///
/// # Type Parameters
///
/// - `I`: Index type
/// - `K`: Value type
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Cycles
///
/// An index that (transitively) depends on itself makes [`DpCache::get`]
/// return [`DpError::Cycle`]. Values finished before the cycle was found
/// stay cached.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{ClosureProblem, DpCache, VecBackend};
///
/// let factorial = ClosureProblem::new(
///     |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
///     |n: &usize, deps: Vec<u64>| if *n == 0 { 1 } else { (*n as u64) * deps[0] },
/// );
/// let cache = DpCache::with_problem(VecBackend::new(), factorial);
///
/// assert_eq!(cache.get(&5).unwrap(), 120);
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

/// An index waiting on the worklist. `deps` is filled in once the index has
/// been expanded and its unresolved dependencies pushed above it.
struct Frame<I> {
    index: I,
    deps: Option<Vec<I>>,
}

impl<I> Frame<I> {
    fn new(index: I) -> Self {
        Self { index, deps: None }
    }
}

impl DpCache<(), (), (), ()> {
    pub fn builder() -> DpCacheBuilder<(), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for `index`, computing it and any missing
    /// dependencies first.
    pub fn get(&self, index: &I) -> Result<K, DpError> {
        let mut stack = vec![Frame::new(index.clone())];

        while let Some(frame) = stack.pop() {
            let done = self
                .backend
                .borrow()
                .get(&frame.index)
                .map(|slot| matches!(slot, Slot::Done(_)));

            match (done, frame.deps) {
                // Reached twice through different parents
                (Some(true), _) => {}
                (_, Some(deps)) => {
                    let values: Vec<K> = {
                        let backend = self.backend.borrow();
                        deps.iter()
                            .filter_map(|dep| match backend.get(dep) {
                                Some(Slot::Done(value)) => Some(value.clone()),
                                _ => None,
                            })
                            .collect()
                    };
                    debug_assert_eq!(values.len(), deps.len());
                    let value = self.problem.compute(&frame.index, values);
                    self.backend
                        .borrow_mut()
                        .set(frame.index, Slot::Done(value));
                }
                (Some(false), None) => return Err(self.abort(&stack)),
                (None, None) => {
                    let deps = self.problem.deps(&frame.index);
                    let mut backend = self.backend.borrow_mut();
                    backend.set(frame.index.clone(), Slot::Pending);

                    let mut unresolved = Vec::new();
                    for dep in &deps {
                        match backend.get(dep) {
                            Some(Slot::Done(_)) => {}
                            Some(Slot::Pending) => {
                                backend.remove(&frame.index);
                                drop(backend);
                                return Err(self.abort(&stack));
                            }
                            None => unresolved.push(Frame::new(dep.clone())),
                        }
                    }

                    stack.push(Frame {
                        index: frame.index,
                        deps: Some(deps),
                    });
                    stack.extend(unresolved);
                }
            }
        }

        match self.backend.borrow().get(index) {
            Some(Slot::Done(value)) => Ok(value.clone()),
            _ => Err(DpError::Cycle),
        }
    }

    /// Whether `index` has already been computed.
    pub fn is_cached(&self, index: &I) -> bool {
        matches!(self.backend.borrow().get(index), Some(Slot::Done(_)))
    }

    /// Forget every index left pending on the worklist.
    fn abort(&self, stack: &[Frame<I>]) -> DpError {
        let mut backend = self.backend.borrow_mut();
        for frame in stack.iter().filter(|frame| frame.deps.is_some()) {
            backend.remove(&frame.index);
        }
        DpError::Cycle
    }
}

/// Builder for [`DpCache`]; both a backend and a problem must be supplied.
pub struct DpCacheBuilder<B, P> {
    backend: B,
    problem: P,
}

impl<B, P> DpCacheBuilder<B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
        }
    }

    pub fn build<I, K>(self) -> DpCache<I, K, B, P>
    where
        I: Clone,
        K: Clone,
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache::with_problem(self.backend, self.problem)
    }
}
