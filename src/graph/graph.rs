//! 图数据结构
//!
//! 以标签为键的有向带权图，邻接表存储出边

use super::edge::Edge;
use super::vertex::Vertex;
use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::types::Weight;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// 有向图
///
/// 顶点按插入顺序枚举，算法中“实现定义的枚举顺序”即为此顺序。
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 标签到顶点的映射
    vertices: IndexMap<String, Vertex>,
    /// 边数量
    edge_count: usize,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 由一组标签创建只含顶点的图
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for label in labels {
            graph.add_vertex(label)?;
        }
        Ok(graph)
    }

    /// 清除所有顶点标记
    pub fn clear_vertex_marks(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.clear_mark();
        }
    }

    /// 清除所有边标记
    pub fn clear_edge_marks(&mut self) {
        for vertex in self.vertices.values_mut() {
            for edge in vertex.edges_mut() {
                edge.clear_mark();
            }
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，标签重复时拒绝
    pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        if self.vertices.contains_key(&label) {
            return Err(Error::VertexAlreadyExists(label));
        }
        tracing::trace!(label = %label, "add vertex");
        self.vertices.insert(label.clone(), Vertex::new(label));
        Ok(())
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// 获取顶点
    pub fn get_vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.get(label)
    }

    /// 删除顶点及所有指向它或由它发出的边
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let removed = match self.vertices.shift_remove(label) {
            Some(v) => v,
            None => return false,
        };

        let mut dropped = removed.out_degree();
        for vertex in self.vertices.values_mut() {
            if vertex.remove_edge_to(label) {
                dropped += 1;
            }
        }
        self.edge_count -= dropped;

        tracing::debug!(label = %label, edges_removed = dropped, "remove vertex");
        true
    }

    /// 重命名顶点，同时更新索引与所有相关边的端点
    pub fn relabel_vertex(&mut self, old: &str, new: impl Into<String>) -> Result<()> {
        let new = new.into();
        if !self.vertices.contains_key(old) {
            return Err(Error::VertexNotFound(old.to_string()));
        }
        if old == new {
            return Ok(());
        }
        if self.vertices.contains_key(&new) {
            return Err(Error::VertexAlreadyExists(new));
        }

        let index = match self.vertices.get_index_of(old) {
            Some(i) => i,
            None => return Err(Error::VertexNotFound(old.to_string())),
        };
        let mut rebuilt = IndexMap::with_capacity(self.vertices.len());
        for (i, (label, mut vertex)) in std::mem::take(&mut self.vertices).into_iter().enumerate() {
            for edge in vertex.edges_mut() {
                edge.rename_endpoint(old, &new);
            }
            if i == index {
                vertex.set_label(new.clone());
                rebuilt.insert(new.clone(), vertex);
            } else {
                rebuilt.insert(label, vertex);
            }
        }
        self.vertices = rebuilt;
        Ok(())
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 标记顶点，顶点不存在时返回 false
    pub fn mark_vertex(&mut self, label: &str) -> bool {
        match self.vertices.get_mut(label) {
            Some(v) => {
                v.set_mark();
                true
            }
            None => false,
        }
    }

    pub fn is_vertex_marked(&self, label: &str) -> bool {
        self.vertices.get(label).map(|v| v.is_marked()).unwrap_or(false)
    }

    // ==================== 边操作 ====================

    /// 添加边，两端顶点必须已存在，重复边被拒绝
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: impl Into<Option<Weight>>,
    ) -> Result<()> {
        if !self.vertices.contains_key(to) {
            return Err(Error::VertexNotFound(to.to_string()));
        }
        let vertex = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| Error::VertexNotFound(from.to_string()))?;
        if vertex.edge_to(to).is_some() {
            return Err(Error::EdgeAlreadyExists {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let weight = weight.into();
        vertex.add_edge_to(to, weight);
        self.edge_count += 1;
        tracing::trace!(from = %from, to = %to, weight = ?weight, "add edge");
        Ok(())
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.get_edge(from, to).is_some()
    }

    /// 获取边
    pub fn get_edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.vertices.get(from)?.edge_to(to)
    }

    pub fn get_edge_mut(&mut self, from: &str, to: &str) -> Option<&mut Edge> {
        self.vertices.get_mut(from)?.edge_to_mut(to)
    }

    /// 删除边，返回是否删除
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let removed = self
            .vertices
            .get_mut(from)
            .map(|v| v.remove_edge_to(to))
            .unwrap_or(false);
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    /// 标记边，边不存在时返回 false
    pub fn mark_edge(&mut self, from: &str, to: &str) -> bool {
        match self.get_edge_mut(from, to) {
            Some(e) => {
                e.set_mark();
                true
            }
            None => false,
        }
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ==================== 遍历 ====================

    /// 按枚举顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// 按枚举顺序遍历顶点标签
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.keys().map(String::as_str)
    }

    /// 遍历图中所有边
    ///
    /// 每个顶点不含重复出边，因此结果中每条边只出现一次。
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices.values().flat_map(|v| v.incident_edges())
    }

    /// 获取顶点的出边，顶点不存在时返回 None
    pub fn incident_edges(&self, label: &str) -> Option<impl Iterator<Item = &Edge> + '_> {
        self.vertices.get(label).map(|v| v.incident_edges())
    }

    /// 获取顶点的直接后继，顶点不存在时返回 None
    pub fn neighboring_vertices(&self, label: &str) -> Option<impl Iterator<Item = &str> + '_> {
        self.vertices.get(label).map(|v| v.neighboring_vertices())
    }

    /// 一次遍历得到每个顶点的入边，列表内按边的枚举顺序排列
    ///
    /// 没有入边的顶点不出现在结果中。
    pub fn incoming_index(&self) -> HashMap<&str, Vec<&Edge>> {
        let mut index: HashMap<&str, Vec<&Edge>> = HashMap::with_capacity(self.vertices.len());
        for edge in self.edges() {
            index.entry(edge.dst()).or_default().push(edge);
        }
        index
    }
}

impl Collection for Graph {
    fn len(&self) -> usize {
        self.vertex_count()
    }

    /// 删除所有顶点和边
    fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }
}

/// 顶点标签（按枚举顺序）相同且边集及权重相同即相等
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edge_count == other.edge_count
            && self.labels().eq(other.labels())
            && self.edges().all(|e| {
                other
                    .get_edge(e.src(), e.dst())
                    .map(|o| o.weight() == e.weight())
                    .unwrap_or(false)
            })
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Vertices: ", self.vertex_count())?;
        for label in self.labels() {
            write!(f, " {}", label)?;
        }
        writeln!(f)?;
        write!(f, "{} Edges: ", self.edge_count)?;
        for edge in self.edges() {
            write!(f, " {}", edge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::from_labels(["A", "B", "C"]).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 2.0).unwrap();
        graph.add_edge("A", "C", 5.0).unwrap();
        graph.add_edge("C", "A", 4.0).unwrap();
        graph
    }

    fn counted_edges(graph: &Graph) -> usize {
        graph.vertices().map(|v| v.out_degree()).sum()
    }

    #[test]
    fn test_graph_basic() {
        let graph = sample();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(counted_edges(&graph), 4);
        assert!(graph.contains_edge("A", "B"));
        assert!(!graph.contains_edge("B", "A"));
        assert_eq!(graph.get_edge("B", "C").and_then(|e| e.weight()), Some(2.0));
        assert!(graph.get_edge("X", "A").is_none());
        assert!(graph.get_vertex("X").is_none());
    }

    #[test]
    fn test_graph_add_edge_rules() {
        let mut graph = sample();

        assert!(matches!(graph.add_vertex("A"), Err(Error::VertexAlreadyExists(_))));
        assert!(matches!(
            graph.add_edge("A", "B", 3.0),
            Err(Error::EdgeAlreadyExists { .. })
        ));
        assert!(matches!(graph.add_edge("A", "X", 1.0), Err(Error::VertexNotFound(_))));
        assert!(matches!(graph.add_edge("X", "A", 1.0), Err(Error::VertexNotFound(_))));
        assert_eq!(graph.edge_count(), 4);

        graph.add_edge("B", "A", None).unwrap();
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.get_edge("B", "A").unwrap().weight(), None);
    }

    #[test]
    fn test_graph_remove_vertex() {
        let mut graph = sample();

        assert!(graph.remove_vertex("C"));
        assert!(!graph.remove_vertex("C"));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(counted_edges(&graph), 1);
        assert!(graph.edges().all(|e| e.src() != "C" && e.dst() != "C"));
    }

    #[test]
    fn test_graph_remove_edge() {
        let mut graph = sample();

        assert!(graph.remove_edge("A", "C"));
        assert!(!graph.remove_edge("A", "C"));
        assert!(!graph.remove_edge("X", "C"));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(counted_edges(&graph), 3);
    }

    #[test]
    fn test_graph_neighbors_and_incident_edges() {
        let graph = sample();

        let neighbors: Vec<&str> = graph.neighboring_vertices("A").unwrap().collect();
        assert_eq!(neighbors, vec!["B", "C"]);

        // 每次调用得到新的序列
        assert_eq!(graph.incident_edges("A").unwrap().count(), 2);
        assert_eq!(graph.incident_edges("A").unwrap().count(), 2);
        assert!(graph.incident_edges("X").is_none());

        let index = graph.incoming_index();
        let into_c: Vec<&str> = index["C"].iter().map(|e| e.src()).collect();
        assert_eq!(into_c, vec!["A", "B"]);
        assert_eq!(index["A"].len(), 1);
        assert!(!index.contains_key("X"));
        assert_eq!(index.values().map(Vec::len).sum::<usize>(), graph.edge_count());
    }

    #[test]
    fn test_graph_marks() {
        let mut graph = sample();

        assert!(graph.mark_vertex("A"));
        assert!(!graph.mark_vertex("X"));
        assert!(graph.mark_edge("A", "B"));
        assert!(graph.is_vertex_marked("A"));

        graph.clear_vertex_marks();
        graph.clear_vertex_marks();
        graph.clear_edge_marks();
        assert!(graph.vertices().all(|v| !v.is_marked()));
        assert!(graph.edges().all(|e| !e.is_marked()));
    }

    #[test]
    fn test_graph_relabel() {
        let mut graph = sample();

        graph.relabel_vertex("C", "D").unwrap();
        assert!(!graph.contains_vertex("C"));
        assert_eq!(graph.labels().collect::<Vec<_>>(), vec!["A", "B", "D"]);
        assert!(graph.contains_edge("B", "D"));
        assert!(graph.contains_edge("D", "A"));
        assert_eq!(graph.get_vertex("D").unwrap().label(), "D");
        assert_eq!(graph.edge_count(), 4);

        assert!(matches!(graph.relabel_vertex("A", "B"), Err(Error::VertexAlreadyExists(_))));
        assert!(matches!(graph.relabel_vertex("Q", "R"), Err(Error::VertexNotFound(_))));
    }

    #[test]
    fn test_graph_display_and_equality() {
        let graph = sample();
        assert_eq!(
            graph.to_string(),
            "3 Vertices:  A B C\n4 Edges:  A>B:1 A>C:5 B>C:2 C>A:4"
        );

        let mut other = sample();
        assert_eq!(graph, other);
        other.get_edge_mut("A", "B").unwrap().set_weight(Some(7.0));
        assert_ne!(graph, other);

        other.clear();
        assert!(other.is_empty());
        assert_eq!(other.edge_count(), 0);
    }
}
