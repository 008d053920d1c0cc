//! 顶点定义
//!
//! 顶点持有标签、标记位以及全部出边

use super::edge::Edge;
use crate::types::Weight;
use std::fmt;

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点标签
    label: String,
    /// 标记
    marked: bool,
    /// 出边列表（每条边的源顶点都是自身）
    edges: Vec<Edge>,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            marked: false,
            edges: Vec::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn set_mark(&mut self) {
        self.marked = true;
    }

    pub fn clear_mark(&mut self) {
        self.marked = false;
    }

    /// 获取出度
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// 获取指向 `to` 的边
    pub fn edge_to(&self, to: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.dst() == to)
    }

    pub fn edge_to_mut(&mut self, to: &str) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.dst() == to)
    }

    /// 遍历出边
    pub fn incident_edges(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// 遍历直接后继顶点的标签
    pub fn neighboring_vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.edges.iter().map(move |e| e.other_endpoint(&self.label))
    }

    pub(crate) fn add_edge_to(&mut self, to: &str, weight: Option<Weight>) {
        let edge = Edge::new(self.label.clone(), to, weight);
        self.edges.push(edge);
    }

    /// 删除指向 `to` 的边，返回是否删除
    pub(crate) fn remove_edge_to(&mut self, to: &str) -> bool {
        match self.edges.iter().position(|e| e.dst() == to) {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn edges_mut(&mut self) -> std::slice::IterMut<'_, Edge> {
        self.edges.iter_mut()
    }

    pub(crate) fn set_label(&mut self, label: String) {
        for edge in self.edges.iter_mut() {
            edge.rename_endpoint(&self.label, &label);
        }
        self.label = label;
    }
}

/// 标签相同即相等
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Vertex {}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
