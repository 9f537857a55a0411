//! Shared utilities.
//!
//! - [`BitSet`] - the fixed-capacity node set used by every algorithm engine

mod bitset;

pub use bitset::{BitSet, BitSetIter};
