use topo_core::derive_substream_seed;

/// Seed for restart `index` of a run mastered by `master_seed`.
pub fn restart_seed(master_seed: u64, index: usize) -> u64 {
    derive_substream_seed(master_seed, index as u64)
}

/// Seed for the graph generator of restart `index`, kept apart from the
/// stream that drives the swaps.
pub fn generator_seed(master_seed: u64, index: usize) -> u64 {
    derive_substream_seed(master_seed ^ 0xA5A5_A5A5_A5A5_A5A5, index as u64)
}
