//! 最小生成树
//!
//! Prim 算法，候选边放入二叉最小堆。过期候选（目标顶点已在树中）
//! 不会被主动删除，而是在出堆时丢弃。
//!
//! 生成树定义在图的无向底图上：顶点加入树后，它的出边和入边都成为
//! 候选，方向统一为由树内指向树外。

use crate::collection::{ArrayHeap, Collection};
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::Weight;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// 生成树中的一条边，方向为加入树时的走向
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// 最小生成树结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    pub start: String,
    /// 按选中顺序排列的树边
    pub edges: Vec<TreeEdge>,
    /// 是否覆盖了全部顶点
    pub complete: bool,
    /// 出堆时被丢弃的过期候选数
    pub stale_skipped: usize,
}

impl SpanningTree {
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }
}

/// 堆中的候选边，按 [`Edge::cmp_weight`] 排序
///
/// 入堆前已确认边带有权重，因此任意两个候选都可比较。
#[derive(Debug)]
struct Candidate<'a> {
    edge: &'a Edge,
    /// 树内一端
    from: &'a str,
    /// 树外一端
    to: &'a str,
}

impl<'a> Candidate<'a> {
    fn new(edge: &'a Edge, tree_side: &str) -> Result<Self> {
        edge.require_weight()?;
        let to = edge.other_endpoint(tree_side);
        Ok(Self {
            edge,
            from: edge.other_endpoint(to),
            to,
        })
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.edge.cmp_weight(other.edge) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.edge.cmp_weight(other.edge)
    }
}

/// 在不修改图的前提下得到的生成树
struct Grown {
    edges: Vec<TreeEdge>,
    /// 每条树边在图中存储时的 (源, 目标)
    stored: Vec<(String, String)>,
    stale_skipped: usize,
}

/// 把与 `label` 相连的全部边放入堆
fn push_candidates<'a>(
    graph: &'a Graph,
    incoming: &HashMap<&str, Vec<&'a Edge>>,
    label: &str,
    heap: &mut ArrayHeap<Candidate<'a>>,
) -> Result<()> {
    let outgoing = graph
        .incident_edges(label)
        .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
    let incoming = incoming.get(label).into_iter().flatten().copied();
    for edge in outgoing.chain(incoming) {
        heap.insert(Candidate::new(edge, label)?);
    }
    Ok(())
}

fn grow_tree(graph: &Graph, start: &str) -> Result<Grown> {
    let incoming = graph.incoming_index();
    let total = graph.vertex_count();

    let mut reached: HashSet<&str> = HashSet::with_capacity(total);
    reached.insert(start);

    let mut heap = ArrayHeap::with_capacity(graph.edge_count());
    push_candidates(graph, &incoming, start, &mut heap)?;

    let mut edges = Vec::with_capacity(total.saturating_sub(1));
    let mut stored = Vec::with_capacity(total.saturating_sub(1));
    let mut stale_skipped = 0;

    while reached.len() < total {
        let candidate = match heap.extract_min() {
            Ok(c) => c,
            Err(_) => break,
        };
        if reached.contains(candidate.to) {
            stale_skipped += 1;
            continue;
        }

        reached.insert(candidate.to);
        push_candidates(graph, &incoming, candidate.to, &mut heap)?;

        let weight = candidate.edge.require_weight()?;
        tracing::trace!(from = %candidate.from, to = %candidate.to, weight, "tree edge");
        edges.push(TreeEdge {
            from: candidate.from.to_string(),
            to: candidate.to.to_string(),
            weight,
        });
        stored.push((
            candidate.edge.src().to_string(),
            candidate.edge.dst().to_string(),
        ));
    }

    tracing::debug!(
        tree_edges = edges.len(),
        stale_skipped,
        pending = heap.len(),
        "spanning tree grown"
    );
    Ok(Grown {
        edges,
        stored,
        stale_skipped,
    })
}

/// 从 `start` 出发构造最小生成树
///
/// 成功时清除原有标记，再标记树中的顶点与边；失败时图保持不变。
/// 图的无向底图从 `start` 不连通时，返回覆盖可达部分的树并将
/// `complete` 置为 false。
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn span_tree(graph: &mut Graph, start: &str) -> Result<SpanningTree> {
    if !graph.contains_vertex(start) {
        return Err(Error::VertexNotFound(start.to_string()));
    }

    let grown = grow_tree(graph, start)?;

    graph.clear_vertex_marks();
    graph.clear_edge_marks();
    graph.mark_vertex(start);
    for (edge, (src, dst)) in grown.edges.iter().zip(&grown.stored) {
        graph.mark_vertex(&edge.to);
        graph.mark_edge(src, dst);
    }

    let total = graph.vertex_count();
    let reached = grown.edges.len() + 1;
    let complete = reached == total;
    if !complete {
        tracing::warn!(
            start = %start,
            reached,
            total,
            "graph is not connected from start, spanning tree covers only reachable vertices"
        );
    }

    Ok(SpanningTree {
        start: start.to_string(),
        edges: grown.edges,
        complete,
        stale_skipped: grown.stale_skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(rep: &[(&str, &str, f64)]) -> Graph {
        let mut graph = Graph::new();
        for &(from, to, w) in rep {
            for label in [from, to] {
                if !graph.contains_vertex(label) {
                    graph.add_vertex(label).unwrap();
                }
            }
            graph.add_edge(from, to, w).unwrap();
        }
        graph
    }

    #[test]
    fn test_span_tree_uses_cheaper_detour() {
        let mut graph = build(&[("A", "B", 5.0), ("A", "C", 1.0), ("B", "C", 2.0)]);
        let tree = span_tree(&mut graph, "A").unwrap();

        assert!(tree.complete);
        assert_eq!(tree.edges.len(), 2);
        assert_eq!(tree.total_weight(), 3.0);
        assert!(tree.contains("A", "C"));
        assert!(tree.contains("C", "B"));
        assert!(!tree.contains("A", "B"));

        // 图中存储的 B>C 被标记
        assert!(graph.get_edge("B", "C").unwrap().is_marked());
        assert!(graph.get_edge("A", "C").unwrap().is_marked());
        assert!(!graph.get_edge("A", "B").unwrap().is_marked());
    }

    #[test]
    fn test_span_tree_larger_graph() {
        let mut graph = build(&[
            ("A", "B", 4.0),
            ("A", "H", 8.0),
            ("B", "C", 8.0),
            ("B", "H", 11.0),
            ("C", "D", 7.0),
            ("C", "F", 4.0),
            ("C", "I", 2.0),
            ("D", "E", 9.0),
            ("D", "F", 14.0),
            ("E", "F", 10.0),
            ("F", "G", 2.0),
            ("G", "H", 1.0),
            ("G", "I", 6.0),
            ("H", "I", 7.0),
        ]);
        let tree = span_tree(&mut graph, "A").unwrap();

        assert!(tree.complete);
        assert_eq!(tree.edges.len(), 8);
        assert_eq!(tree.total_weight(), 37.0);
        assert!(tree.stale_skipped > 0);
        assert_eq!(graph.edges().filter(|e| e.is_marked()).count(), 8);
    }

    #[test]
    fn test_span_tree_disconnected() {
        let mut graph = build(&[("A", "B", 1.0), ("C", "D", 1.0)]);
        let tree = span_tree(&mut graph, "A").unwrap();

        assert!(!tree.complete);
        assert_eq!(tree.edges.len(), 1);
        assert!(tree.contains("A", "B"));
    }

    #[test]
    fn test_span_tree_single_vertex() {
        let mut graph = Graph::from_labels(["A"]).unwrap();
        let tree = span_tree(&mut graph, "A").unwrap();

        assert!(tree.complete);
        assert!(tree.edges.is_empty());
        assert_eq!(tree.total_weight(), 0.0);
    }

    #[test]
    fn test_span_tree_errors() {
        let mut graph = build(&[("A", "B", 1.0)]);
        assert!(matches!(span_tree(&mut graph, "X"), Err(Error::VertexNotFound(_))));

        graph.add_vertex("C").unwrap();
        graph.add_edge("C", "A", None).unwrap();
        assert!(matches!(
            span_tree(&mut graph, "A"),
            Err(Error::MissingWeight { .. })
        ));
    }

    #[test]
    fn test_span_tree_failure_keeps_marks() {
        let mut graph = build(&[("A", "B", 1.0), ("C", "D", 1.0)]);
        graph.add_edge("B", "C", None).unwrap();
        graph.mark_vertex("D");
        graph.mark_edge("C", "D");

        assert!(matches!(
            span_tree(&mut graph, "A"),
            Err(Error::MissingWeight { .. })
        ));
        assert!(!graph.is_vertex_marked("A"));
        assert!(!graph.is_vertex_marked("B"));
        assert!(graph.is_vertex_marked("D"));
        assert!(!graph.get_edge("A", "B").unwrap().is_marked());
        assert!(graph.get_edge("C", "D").unwrap().is_marked());
    }

    #[test]
    fn test_span_tree_hub_with_many_incoming_edges() {
        let n = 20_000;
        let mut graph = Graph::from_labels((0..n).map(|i| i.to_string())).unwrap();
        for i in 1..n {
            graph.add_edge(&i.to_string(), "0", (i % 7) as f64 + 1.0).unwrap();
        }

        let tree = span_tree(&mut graph, "0").unwrap();
        assert!(tree.complete);
        assert_eq!(tree.edges.len(), n - 1);
        assert!(tree.edges.iter().all(|e| e.from == "0"));
        assert_eq!(graph.edges().filter(|e| e.is_marked()).count(), n - 1);
    }

    #[test]
    fn test_span_tree_clears_previous_marks() {
        let mut graph = build(&[("A", "B", 5.0), ("A", "C", 1.0), ("B", "C", 2.0)]);
        span_tree(&mut graph, "A").unwrap();
        let tree = span_tree(&mut graph, "B").unwrap();

        assert!(tree.complete);
        assert_eq!(tree.total_weight(), 3.0);
        assert_eq!(graph.edges().filter(|e| e.is_marked()).count(), 2);
    }
}
