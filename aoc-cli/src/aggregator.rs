//! Puts streamed solver results back into (year, day, part) order
//!
//! Two min-heaps: the keys still owed, and results that arrived early and are
//! held until every key before them has been emitted.

use crate::executor::{SolverResult, WorkItem};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Ordering key of a result, ascending by year, day then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl ResultKey {
    /// One key per part of every work item
    pub fn expected(work_items: &[WorkItem]) -> Vec<ResultKey> {
        work_items
            .iter()
            .flat_map(|w| {
                w.parts.clone().map(move |part| ResultKey {
                    year: w.year,
                    day: w.day,
                    part,
                })
            })
            .collect()
    }
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Reversed so the smallest key sits on top of a `BinaryHeap`
struct Held(SolverResult);

impl Held {
    fn key(&self) -> ResultKey {
        ResultKey::from(&self.0)
    }
}

impl Ord for Held {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Held {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Held {}

impl PartialEq for Held {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    held: BinaryHeap<Held>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            held: BinaryHeap::new(),
        }
    }

    /// Accept a result and return every result now ready, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.held.push(Held(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(top)) = (self.expected.peek(), self.held.peek()) {
            if top.key() != *next {
                break;
            }
            self.expected.pop();
            if let Some(Held(result)) = self.held.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Everything still held, in order; used once the channel has closed
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut rest: Vec<_> = self.held.drain().map(|held| held.0).collect();
        rest.sort_by_key(|r| ResultKey::from(r));
        rest
    }

    /// Whether every expected key has been emitted
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
