#![deny(missing_docs)]

//! Graph model for interconnection topologies: simple undirected graphs over
//! integer node ids, random regular generation, the double-edge swap used by
//! the optimizer, and the `source destination [weight]` edge-list format.

mod edgelist;
mod generators;
mod graph;
mod hash;
mod rewire;
mod serialization;

pub use edgelist::{
    parse_edge_list, parse_edge_list_with_nodes, read_edge_list_file, write_edge_list,
    write_edge_list_file, MAX_NODES,
};
pub use generators::{generate_regular, validate_regular_parameters};
pub use graph::{DegreeStats, Edge, Graph};
pub use hash::canonical_hash;
pub use rewire::{
    apply_double_edge_swap, double_edge_swap_dry_run, undo_double_edge_swap, SwapDryRun,
    SwapOutcome,
};
pub use serialization::{graph_from_json, graph_to_json};
