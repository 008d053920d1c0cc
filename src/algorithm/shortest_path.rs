//! 单源最短路径
//!
//! Dijkstra 算法的数组松弛形式，O(V²)。每轮线性扫描选出距离最小的
//! 未定顶点（距离相同时取枚举顺序靠前者），然后松弛其直接后继。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Distance;
use serde::Serialize;

/// 结果表中的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRow {
    /// 顶点标签
    pub vertex: String,
    /// 与起点的距离
    pub distance: Distance,
    /// 最短路径上的直接前驱
    pub predecessor: Option<String>,
}

/// 最短路径结果表，行按顶点枚举顺序排列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub start: String,
    pub rows: Vec<PathRow>,
}

impl ShortestPaths {
    pub fn get(&self, label: &str) -> Option<&PathRow> {
        self.rows.iter().find(|r| r.vertex == label)
    }

    pub fn distance(&self, label: &str) -> Option<Distance> {
        self.get(label).map(|r| r.distance)
    }

    pub fn predecessor(&self, label: &str) -> Option<&str> {
        self.get(label)?.predecessor.as_deref()
    }

    /// 由前驱链重构从起点到 `label` 的路径，不可达时返回 None
    pub fn path_to(&self, label: &str) -> Option<Vec<String>> {
        let row = self.get(label)?;
        if !row.distance.is_finite() {
            return None;
        }

        let mut path = vec![row.vertex.clone()];
        let mut current = row;
        while let Some(prev) = current.predecessor.as_deref() {
            // 前驱链长度不会超过顶点数
            if path.len() > self.rows.len() {
                return None;
            }
            path.push(prev.to_string());
            current = self.get(prev)?;
        }
        path.reverse();
        Some(path)
    }
}

/// 计算从 `start` 出发到每个顶点的最短距离及前驱
///
/// 边权重必须非负；负权重不会导致失败，但结果没有意义。
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn shortest_paths(graph: &Graph, start: &str) -> Result<ShortestPaths> {
    let source = graph
        .get_vertex(start)
        .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;

    // 初始化
    let mut rows = Vec::with_capacity(graph.vertex_count());
    let mut included = Vec::with_capacity(graph.vertex_count());
    for vertex in graph.vertices() {
        let label = vertex.label();
        let row = if label == start {
            PathRow {
                vertex: label.to_string(),
                distance: Distance::ZERO,
                predecessor: None,
            }
        } else if let Some(edge) = source.edge_to(label) {
            PathRow {
                vertex: label.to_string(),
                distance: Distance::Finite(edge.require_weight()?),
                predecessor: Some(start.to_string()),
            }
        } else {
            PathRow {
                vertex: label.to_string(),
                distance: Distance::Unreachable,
                predecessor: None,
            }
        };
        included.push(label == start);
        rows.push(row);
    }

    // 计算
    let mut relaxations = 0usize;
    while let Some(first) = included.iter().position(|done| !done) {
        let mut f = first;
        for i in first + 1..rows.len() {
            if !included[i] && rows[i].distance < rows[f].distance {
                f = i;
            }
        }
        // 最小者不可达时其余未定顶点同样不可达，它们的出边不会引起更新
        if !rows[f].distance.is_finite() {
            break;
        }
        included[f] = true;

        let finalized = rows[f].vertex.clone();
        let base = rows[f].distance;
        for i in 0..rows.len() {
            if included[i] {
                continue;
            }
            if let Some(edge) = graph.get_edge(&finalized, &rows[i].vertex) {
                let candidate = base + edge.require_weight()?;
                if candidate < rows[i].distance {
                    rows[i].distance = candidate;
                    rows[i].predecessor = Some(finalized.clone());
                    relaxations += 1;
                }
            }
        }
        tracing::trace!(vertex = %finalized, distance = %base, "finalized");
    }

    tracing::debug!(start = %start, relaxations, "shortest paths finished");
    Ok(ShortestPaths {
        start: start.to_string(),
        rows,
    })
}
