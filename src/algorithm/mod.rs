//! 图算法模块
//!
//! 包含拓扑排序、单源最短路径和最小生成树

mod shortest_path;
mod spanning_tree;
mod topo_sort;

pub use shortest_path::{shortest_paths, PathRow, ShortestPaths};
pub use spanning_tree::{span_tree, SpanningTree, TreeEdge};
pub use topo_sort::{topo_sort, topo_stack};

use crate::error::{Error, Result};
use crate::graph::Graph;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 可运行的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// 拓扑排序
    TopoSort,
    /// 单源最短路径
    ShortestPaths,
    /// 最小生成树
    SpanningTree,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::ShortestPaths,
        Algorithm::SpanningTree,
        Algorithm::TopoSort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::TopoSort => "topo-sort",
            Algorithm::ShortestPaths => "shortest-paths",
            Algorithm::SpanningTree => "spanning-tree",
        }
    }

    /// 在图上运行算法；拓扑排序不使用起点
    pub fn run(&self, graph: &mut Graph, start: &str) -> Result<AlgorithmOutput> {
        match self {
            Algorithm::TopoSort => Ok(AlgorithmOutput::TopoSort(topo_sort(graph))),
            Algorithm::ShortestPaths => {
                shortest_paths(graph, start).map(AlgorithmOutput::ShortestPaths)
            }
            Algorithm::SpanningTree => span_tree(graph, start).map(AlgorithmOutput::SpanningTree),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "topo-sort" | "topo" | "toposort" | "sort" => Ok(Algorithm::TopoSort),
            "shortest-paths" | "paths" | "dijkstra" => Ok(Algorithm::ShortestPaths),
            "spanning-tree" | "tree" | "mst" | "prim" => Ok(Algorithm::SpanningTree),
            other => Err(Error::Parse(format!("未知算法: {}", other))),
        }
    }
}

/// 算法运行结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "algorithm", content = "result", rename_all = "kebab-case")]
pub enum AlgorithmOutput {
    TopoSort(Vec<String>),
    ShortestPaths(ShortestPaths),
    SpanningTree(SpanningTree),
}

impl AlgorithmOutput {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmOutput::TopoSort(_) => Algorithm::TopoSort,
            AlgorithmOutput::ShortestPaths(_) => Algorithm::ShortestPaths,
            AlgorithmOutput::SpanningTree(_) => Algorithm::SpanningTree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("mst".parse::<Algorithm>().unwrap(), Algorithm::SpanningTree);
        assert_eq!("Shortest_Paths".parse::<Algorithm>().unwrap(), Algorithm::ShortestPaths);
        assert_eq!("topo-sort".parse::<Algorithm>().unwrap(), Algorithm::TopoSort);
        assert!(matches!("bfs".parse::<Algorithm>(), Err(Error::Parse(_))));

        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn test_algorithm_run() {
        let mut graph = Graph::from_labels(["A", "B", "C"]).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();
        graph.add_edge("A", "C", 1.0).unwrap();

        let output = Algorithm::TopoSort.run(&mut graph, "A").unwrap();
        assert_eq!(output, AlgorithmOutput::TopoSort(vec!["A".into(), "B".into(), "C".into()]));
        assert_eq!(output.algorithm(), Algorithm::TopoSort);

        let output = Algorithm::SpanningTree.run(&mut graph, "A").unwrap();
        assert_eq!(output.algorithm(), Algorithm::SpanningTree);

        assert!(Algorithm::ShortestPaths.run(&mut graph, "Q").is_err());
    }

    #[test]
    fn test_algorithm_output_json() {
        let output = AlgorithmOutput::TopoSort(vec!["A".into()]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["algorithm"], "topo-sort");
        assert_eq!(json["result"][0], "A");
    }
}
