#![deny(missing_docs)]
//! Shared vocabulary for the topology workspace: the error taxonomy, node
//! identifiers and the deterministic RNG handle used by every generator and
//! optimizer.

pub mod errors;
pub mod float_serde;
pub mod rng;

pub use errors::{ErrorInfo, TopoError};
pub use rng::{derive_substream_seed, RngHandle};

/// Node identifier. Nodes carry no attributes: a node is its position in
/// `[0, n)`, and renumbering is a permutation of that index space.
pub type NodeId = usize;

/// Weight assigned to edges whose weight is not given explicitly.
pub const DEFAULT_WEIGHT: f64 = 1.0;
