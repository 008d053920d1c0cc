//! 运行配置

use crate::cli::PrintMode;
use crate::error::{Error, Result};
use crate::graph::Graph;
use std::path::PathBuf;

/// 默认顶点数上限
pub const DEFAULT_MAX_VERTICES: usize = 10_000;

/// 默认边数上限
pub const DEFAULT_MAX_EDGES: usize = 100_000;

/// 运行算法前检查的图规模上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLimits {
    pub max_vertices: usize,
    pub max_edges: usize,
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            max_edges: DEFAULT_MAX_EDGES,
        }
    }
}

impl RunLimits {
    /// 不限制规模
    pub fn unlimited() -> Self {
        Self {
            max_vertices: usize::MAX,
            max_edges: usize::MAX,
        }
    }

    /// 检查图规模
    pub fn check(&self, graph: &Graph) -> Result<()> {
        if graph.vertex_count() > self.max_vertices {
            return Err(Error::LimitExceeded {
                what: "顶点数",
                actual: graph.vertex_count(),
                limit: self.max_vertices,
            });
        }
        if graph.edge_count() > self.max_edges {
            return Err(Error::LimitExceeded {
                what: "边数",
                actual: graph.edge_count(),
                limit: self.max_edges,
            });
        }
        Ok(())
    }
}

/// 命令行程序配置
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub limits: RunLimits,
    pub print_mode: PrintMode,
    /// 交互历史文件
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// 默认历史文件位置：`<data_dir>/graphdemo/history.txt`
    pub fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("graphdemo").join("history.txt"))
    }
}
