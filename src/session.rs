//! 图会话
//!
//! 保存当前的图与起点，供交互界面与批处理程序运行算法。

use crate::algorithm::{Algorithm, AlgorithmOutput};
use crate::config::RunLimits;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::import::{GraphDescription, GraphImporter, ImportStats};
use std::path::Path;

/// 当前图及其起点
#[derive(Debug, Default)]
pub struct GraphSession {
    graph: Option<Graph>,
    start_label: Option<String>,
    limits: RunLimits,
    last_import: ImportStats,
}

impl GraphSession {
    pub fn new(limits: RunLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// 由描述创建图；失败时丢弃原有的图
    pub fn create_graph(&mut self, rep: &str, start: &str) -> Result<&Graph> {
        self.install(GraphDescription::new(rep.trim(), start.trim()))
    }

    /// 从文件创建图；失败时丢弃原有的图
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&Graph> {
        let loaded = GraphDescription::load_file(path.as_ref());
        match loaded {
            Ok(desc) => self.install(desc),
            Err(e) => {
                self.discard();
                Err(e)
            }
        }
    }

    fn install(&mut self, desc: GraphDescription) -> Result<&Graph> {
        let mut importer = GraphImporter::new();
        match importer.build(&desc) {
            Ok(graph) => {
                self.last_import = importer.stats().clone();
                tracing::info!(
                    vertices = graph.vertex_count(),
                    edges = graph.edge_count(),
                    start = %desc.start,
                    "graph created"
                );
                self.start_label = Some(desc.start);
                Ok(&*self.graph.insert(graph))
            }
            Err(e) => {
                self.discard();
                Err(e)
            }
        }
    }

    fn discard(&mut self) {
        self.graph = None;
        self.start_label = None;
        self.last_import = ImportStats::default();
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    pub fn start_label(&self) -> Option<&str> {
        self.start_label.as_deref()
    }

    /// 最近一次成功导入的统计
    pub fn last_import(&self) -> &ImportStats {
        &self.last_import
    }

    /// 图的文本描述
    pub fn describe(&self) -> Result<String> {
        self.graph.as_ref().map(|g| g.to_string()).ok_or(Error::NoGraph)
    }

    /// 在当前图上运行算法
    pub fn run(&mut self, algorithm: Algorithm) -> Result<AlgorithmOutput> {
        let (graph, start) = match (self.graph.as_mut(), self.start_label.as_deref()) {
            (Some(graph), Some(start)) => (graph, start),
            _ => return Err(Error::NoGraph),
        };
        self.limits.check(graph)?;
        algorithm.run(graph, start)
    }

    /// 依次运行全部算法
    pub fn run_all(&mut self) -> Result<Vec<AlgorithmOutput>> {
        Algorithm::ALL.iter().map(|&algo| self.run(algo)).collect()
    }
}
