//! GraphDemo - 有向带权图与图算法
//!
//! 以标签标识顶点的有向带权图，支持：
//! - 拓扑排序（迭代深度优先遍历）
//! - 单源最短路径（数组松弛，O(V²)）
//! - 最小生成树（Prim，基于数组二叉堆）
//! - 文本图描述导入与交互式命令行

pub mod algorithm;
pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod logging;
pub mod session;
pub mod types;

// 重导出常用类型
pub use algorithm::{Algorithm, AlgorithmOutput, ShortestPaths, SpanningTree};
pub use collection::{ArrayHeap, Collection, Stack};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};
pub use import::{parse_graph, GraphImporter};
pub use session::GraphSession;
pub use types::{Distance, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
