//! 结果打印器
//!
//! 提供表格和纯文本两种格式的算法结果输出

use crate::algorithm::{AlgorithmOutput, ShortestPaths, SpanningTree};
use crate::graph::Graph;
use prettytable::{format, row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintMode {
    /// 表格模式
    #[default]
    Table,
    /// 纯文本模式
    Plain,
}

/// 结果打印器
#[derive(Debug, Default)]
pub struct Printer {
    mode: PrintMode,
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 打印算法结果
    pub fn format_output(&self, output: &AlgorithmOutput) -> String {
        match output {
            AlgorithmOutput::TopoSort(order) => self.format_sort(order),
            AlgorithmOutput::ShortestPaths(paths) => self.format_paths(paths),
            AlgorithmOutput::SpanningTree(tree) => self.format_tree(tree),
        }
    }

    /// 最短路径表
    pub fn format_paths(&self, paths: &ShortestPaths) -> String {
        match self.mode {
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Vertex", "Distance", "Predecessor"]);
                for r in &paths.rows {
                    table.add_row(row![
                        r.vertex,
                        r.distance,
                        r.predecessor.as_deref().unwrap_or("-")
                    ]);
                }
                format!("Paths from {}:\n{}", paths.start, table)
            }
            PrintMode::Plain => {
                let mut output = String::from("Paths:\n");
                for r in &paths.rows {
                    output.push_str(&format!(
                        "{} {} {}\n",
                        r.vertex,
                        r.distance,
                        r.predecessor.as_deref().unwrap_or("-")
                    ));
                }
                output
            }
        }
    }

    /// 生成树的边与总权重
    pub fn format_tree(&self, tree: &SpanningTree) -> String {
        let mut output = match self.mode {
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["From", "To", "Weight"]);
                for e in &tree.edges {
                    table.add_row(row![e.from, e.to, e.weight]);
                }
                format!("Tree from {}:\n{}", tree.start, table)
            }
            PrintMode::Plain => {
                let edges: Vec<String> = tree
                    .edges
                    .iter()
                    .map(|e| format!("{}>{}:{}", e.from, e.to, e.weight))
                    .collect();
                format!("Tree: {}\n", edges.join(" "))
            }
        };

        output.push_str(&format!("Total weight: {}\n", tree.total_weight()));
        if !tree.complete {
            output.push_str(&format!(
                "Note: not every vertex is connected to {}\n",
                tree.start
            ));
        }
        output
    }

    /// 拓扑序
    pub fn format_sort(&self, order: &[String]) -> String {
        format!("Sort: {}\n", order.join(" "))
    }

    /// 当前图
    pub fn format_graph(&self, graph: &Graph, start: Option<&str>) -> String {
        match self.mode {
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Property", "Value"]);
                table.add_row(row!["Vertex Count", graph.vertex_count()]);
                table.add_row(row!["Edge Count", graph.edge_count()]);
                table.add_row(row!["Start Label", start.unwrap_or("-")]);
                format!("{}{}\n", table, graph)
            }
            PrintMode::Plain => format!("{}\n", graph),
        }
    }
}
