#![deny(missing_docs)]
//! Locality-preserving node renumbering: a greedy travelling-salesman tour
//! over the physical links decides the new ids, so nodes that are wired
//! together end up numerically close.

mod auxiliary;
mod permutation;
mod renumber;
mod tour;

pub use auxiliary::{sentinel_for, AuxiliaryGraph, DEFAULT_SENTINEL};
pub use permutation::{stride_order, Permutation};
pub use renumber::{renumber, renumber_regular, renumbered_path, Renumbering};
pub use tour::{greedy_tour, tour_cost};
