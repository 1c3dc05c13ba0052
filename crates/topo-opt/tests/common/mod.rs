#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use topo_core::errors::{ErrorInfo, TopoError};
use topo_metrics::Partitioner;

/// Cuts the node range in halves (`[0, n/2)` and `[n/2, n)`) and reports
/// how many edges cross.
#[derive(Default)]
pub struct HalfSplitPartitioner {
    pub calls: AtomicUsize,
}

impl Partitioner for HalfSplitPartitioner {
    fn partition(&self, metis_graph: &str, _parts: usize) -> Result<String, TopoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut lines = metis_graph.lines();
        let n: usize = lines
            .next()
            .and_then(|header| header.split_whitespace().next())
            .and_then(|token| token.parse().ok())
            .unwrap();
        let half = n / 2;
        let mut cut = 0;
        for (node, line) in lines.enumerate() {
            for token in line.split_whitespace() {
                let next: usize = token.parse::<usize>().unwrap() - 1;
                if node < half && next >= half {
                    cut += 1;
                }
            }
        }
        Ok(format!("  Edgecut: {cut}, communication volume: 0.\n"))
    }
}

pub struct FailingPartitioner;

impl Partitioner for FailingPartitioner {
    fn partition(&self, _metis_graph: &str, _parts: usize) -> Result<String, TopoError> {
        Err(TopoError::Partitioner(ErrorInfo::new("exit-status", "boom")))
    }
}

/// Panics if consulted; ASPL runs must never reach it.
pub struct UnreachablePartitioner;

impl Partitioner for UnreachablePartitioner {
    fn partition(&self, _metis_graph: &str, _parts: usize) -> Result<String, TopoError> {
        panic!("partitioner called for an ASPL objective");
    }
}

/// Reports the same cut for every graph, so every trial ties.
pub struct ConstantPartitioner(pub usize);

impl Partitioner for ConstantPartitioner {
    fn partition(&self, _metis_graph: &str, _parts: usize) -> Result<String, TopoError> {
        Ok(format!("  Edgecut: {}, communication volume: 0.\n", self.0))
    }
}

/// Reports a smaller cut on every call, so every trial is worse.
#[derive(Default)]
pub struct ShrinkingPartitioner {
    pub calls: AtomicUsize,
}

impl Partitioner for ShrinkingPartitioner {
    fn partition(&self, _metis_graph: &str, _parts: usize) -> Result<String, TopoError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "  Edgecut: {}, communication volume: 0.\n",
            1_000_000 - call
        ))
    }
}
