use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::{NodeId, DEFAULT_WEIGHT};

use crate::graph::{Edge, Graph};

/// Largest node count accepted when the size is inferred from the file.
pub const MAX_NODES: usize = 1 << 24;

const NODES_HEADER: &str = "nodes";

/// Parses `src dst [weight]` lines into a graph.
///
/// Blank lines and anything after `#` are ignored; a missing weight means 1.
/// A `# nodes N` comment fixes the node count, otherwise it is `max id + 1`.
pub fn parse_edge_list(text: &str) -> Result<Graph, TopoError> {
    parse_edge_list_with_nodes(text, None)
}

/// Parses an edge list, optionally fixing the node count up front.
///
/// With an explicit `node_count`, ids outside `[0, node_count)` are rejected
/// and any `# nodes N` header is ignored. Without one, the header decides the
/// count when present and `max id + 1` otherwise. Isolated nodes above the
/// largest listed id survive only through the header. Inferred counts above
/// [`MAX_NODES`] are rejected.
pub fn parse_edge_list_with_nodes(
    text: &str,
    node_count: Option<usize>,
) -> Result<Graph, TopoError> {
    let mut parsed: Vec<(usize, Edge)> = Vec::new();
    let mut max_id: Option<(NodeId, usize)> = None;
    let mut header: Option<usize> = None;
    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let mut parts = raw.splitn(2, '#');
        let content = parts.next().unwrap_or("").trim();
        if let Some(declared) = parts.next().and_then(parse_header) {
            let declared = declared.ok_or_else(|| {
                malformed("bad-node-header", "`# nodes` needs a node count", line_no, raw)
            })?;
            if node_count.is_none() && declared > MAX_NODES {
                return Err(too_large(declared, line_no, raw));
            }
            header = Some(declared);
        }
        if content.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.len() < 2 || tokens.len() > 3 {
            return Err(malformed(
                "field-count",
                "expected `source destination [weight]`",
                line_no,
                raw,
            ));
        }
        let src = parse_node(tokens[0], line_no, raw)?;
        let dst = parse_node(tokens[1], line_no, raw)?;
        let weight = match tokens.get(2) {
            Some(token) => token
                .parse::<f64>()
                .map_err(|_| malformed("bad-weight", "weight is not a number", line_no, raw))?,
            None => DEFAULT_WEIGHT,
        };
        let top = src.max(dst);
        if node_count.is_none() && top >= MAX_NODES {
            return Err(too_large(top, line_no, raw));
        }
        if max_id.map_or(true, |(current, _)| top > current) {
            max_id = Some((top, line_no));
        }
        parsed.push((line_no, Edge::with_weight(src, dst, weight)));
    }

    let n = match (node_count, header, max_id) {
        (Some(n), _, _) | (None, Some(n), _) => n,
        (None, None, None) => 0,
        (None, None, Some((id, line_no))) => id.checked_add(1).ok_or_else(|| {
            TopoError::MalformedInput(
                ErrorInfo::new("node-id-overflow", "node id leaves no room for a node count")
                    .with_context("line", line_no)
                    .with_context("id", id),
            )
        })?,
    };
    let mut graph = Graph::new(n);
    for (line_no, edge) in parsed {
        graph
            .add_edge(edge.u, edge.v, edge.weight)
            .map_err(|err| match err {
                TopoError::MalformedInput(info) => {
                    TopoError::MalformedInput(info.with_context("line", line_no))
                }
                other => other,
            })?;
    }
    Ok(graph)
}

/// Renders the graph as one `u v [weight]` line per edge in canonical order.
///
/// A leading `# nodes N` comment records the node count so isolated nodes
/// survive a round trip. The weight column is only written for edges whose
/// weight differs from 1, so unweighted graphs keep the plain two-column form.
pub fn write_edge_list(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.edge_count() * 8 + 16);
    let _ = writeln!(out, "# {NODES_HEADER} {}", graph.node_count());
    for edge in graph.edges() {
        if edge.weight == DEFAULT_WEIGHT {
            let _ = writeln!(out, "{} {}", edge.u, edge.v);
        } else {
            let _ = writeln!(out, "{} {} {}", edge.u, edge.v, edge.weight);
        }
    }
    out
}

/// Reads and parses an edge-list file.
pub fn read_edge_list_file(path: &Path) -> Result<Graph, TopoError> {
    let text =
        fs::read_to_string(path).map_err(|err| TopoError::io("edges-read", err, path.display()))?;
    parse_edge_list(&text).map_err(|err| match err {
        TopoError::MalformedInput(info) => {
            TopoError::MalformedInput(info.with_context("path", path.display()))
        }
        other => other,
    })
}

/// Writes the graph to `path` in edge-list form, creating parent directories.
pub fn write_edge_list_file(graph: &Graph, path: &Path) -> Result<(), TopoError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| TopoError::io("edges-mkdir", err, parent.display()))?;
    }
    fs::write(path, write_edge_list(graph))
        .map_err(|err| TopoError::io("edges-write", err, path.display()))
}

fn parse_node(token: &str, line_no: usize, raw: &str) -> Result<NodeId, TopoError> {
    token
        .parse::<NodeId>()
        .map_err(|_| malformed("bad-node-id", "node id is not a non-negative integer", line_no, raw))
}

/// `Some` when the comment is a `nodes N` header; `Some(None)` marks a bad count.
fn parse_header(comment: &str) -> Option<Option<usize>> {
    let mut tokens = comment.split_whitespace();
    if tokens.next() != Some(NODES_HEADER) {
        return None;
    }
    let count = tokens.next().and_then(|token| token.parse::<usize>().ok());
    Some(count.filter(|_| tokens.next().is_none()))
}

fn too_large(count: usize, line_no: usize, raw: &str) -> TopoError {
    TopoError::MalformedInput(
        ErrorInfo::new("node-id-too-large", "node count exceeds the supported graph size")
            .with_context("line", line_no)
            .with_context("text", raw.trim())
            .with_context("max_nodes", MAX_NODES)
            .with_hint(format!("got {count}; pass an explicit node count to go beyond")),
    )
}

fn malformed(code: &str, message: &str, line_no: usize, raw: &str) -> TopoError {
    TopoError::MalformedInput(
        ErrorInfo::new(code, message)
            .with_context("line", line_no)
            .with_context("text", raw.trim()),
    )
}
