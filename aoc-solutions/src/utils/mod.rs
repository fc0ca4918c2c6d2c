//! Helpers shared between puzzle solutions

pub mod connectivity;
pub mod dp_cache;
pub mod grid;
