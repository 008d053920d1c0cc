//! 图描述导入模块
//!
//! 文本格式：以空白分隔的记录，`label` 表示孤立顶点，
//! `from>to:weight` 表示一条有向带权边（权重可省略）。
//! 文件格式：第一行为图描述，第二行为起点标签。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Weight;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub duration_ms: u64,
}

/// 图描述：记录文本与起点标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription {
    pub rep: String,
    pub start: String,
}

impl GraphDescription {
    pub fn new(rep: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            rep: rep.into(),
            start: start.into(),
        }
    }

    /// 从文件读取：第一行图描述，第二行起点
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut lines = BufReader::new(file).lines();

        let rep = lines.next().transpose()?.unwrap_or_default();
        let start = lines.next().transpose()?.unwrap_or_default();
        Ok(Self::new(rep.trim(), start.trim()))
    }
}

/// 一条解析后的记录
#[derive(Debug, Clone, PartialEq)]
enum Record<'a> {
    Vertex(&'a str),
    Edge {
        from: &'a str,
        to: &'a str,
        weight: Option<Weight>,
    },
}

fn parse_record(token: &str) -> Result<Record<'_>> {
    let arrow = match token.find('>') {
        Some(pos) => pos,
        None => return Ok(Record::Vertex(token)),
    };
    let colon = match token.find(':') {
        Some(pos) if pos > arrow => pos,
        _ => return Err(Error::Parse(format!("'>' 或 ':' 位置有误: {}", token))),
    };

    let from = &token[..arrow];
    let to = &token[arrow + 1..colon];
    if from.is_empty() || to.is_empty() {
        return Err(Error::Parse(format!("顶点标签为空: {}", token)));
    }

    let weight = parse_weight(&token[colon + 1..])
        .map_err(|reason| Error::Parse(format!("{}: {}", reason, token)))?;
    Ok(Record::Edge { from, to, weight })
}

/// 空串表示无权重；权重必须是有限的非负数
fn parse_weight(text: &str) -> std::result::Result<Option<Weight>, &'static str> {
    if text.is_empty() {
        return Ok(None);
    }
    let weight: Weight = text.parse().map_err(|_| "权重不是数字")?;
    if !weight.is_finite() {
        return Err("权重必须是有限数");
    }
    if weight < 0.0 {
        return Err("不支持负权重");
    }
    Ok(Some(weight))
}

/// 图导入器
#[derive(Debug, Default)]
pub struct GraphImporter {
    stats: ImportStats,
}

impl GraphImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次导入的统计
    pub fn stats(&self) -> &ImportStats {
        &self.stats
    }

    /// 解析图描述并构造图
    ///
    /// 边的端点不存在时自动创建；重复的孤立顶点或重复边会被拒绝。
    pub fn parse(&mut self, rep: &str) -> Result<Graph> {
        let started = Instant::now();
        let mut stats = ImportStats::default();
        let mut graph = Graph::new();

        for token in rep.split_whitespace() {
            match parse_record(token)? {
                Record::Vertex(label) => {
                    graph.add_vertex(label)?;
                    stats.vertices_imported += 1;
                }
                Record::Edge { from, to, weight } => {
                    for label in [from, to] {
                        if !graph.contains_vertex(label) {
                            graph.add_vertex(label)?;
                            stats.vertices_imported += 1;
                        }
                    }
                    graph.add_edge(from, to, weight)?;
                    stats.edges_imported += 1;
                }
            }
        }

        stats.duration_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            duration_ms = stats.duration_ms,
            "graph imported"
        );
        self.stats = stats;
        Ok(graph)
    }

    /// 构造图并检查起点存在
    pub fn build(&mut self, desc: &GraphDescription) -> Result<Graph> {
        let graph = self.parse(&desc.rep)?;
        if !graph.contains_vertex(&desc.start) {
            return Err(Error::VertexNotFound(desc.start.clone()));
        }
        Ok(graph)
    }

    /// 从文件读取并构造图
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(Graph, GraphDescription)> {
        let desc = GraphDescription::load_file(path)?;
        let graph = self.build(&desc)?;
        Ok((graph, desc))
    }
}

/// 解析图描述
pub fn parse_graph(rep: &str) -> Result<Graph> {
    GraphImporter::new().parse(rep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_graph() {
        let mut importer = GraphImporter::new();
        let graph = importer.parse("A>B:1 B>C:2.5 A>C:5 D").unwrap();

        assert_eq!(graph.labels().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.get_edge("B", "C").unwrap().weight(), Some(2.5));
        assert_eq!(importer.stats().vertices_imported, 4);
        assert_eq!(importer.stats().edges_imported, 3);
    }

    #[test]
    fn test_parse_record_forms() {
        assert_eq!(parse_record("X").unwrap(), Record::Vertex("X"));
        assert_eq!(
            parse_record("A>B:").unwrap(),
            Record::Edge {
                from: "A",
                to: "B",
                weight: None
            }
        );
    }

    #[test]
    fn test_parse_graph_errors() {
        assert!(matches!(parse_graph("A A"), Err(Error::VertexAlreadyExists(_))));
        assert!(matches!(parse_graph("A>B:1 A"), Err(Error::VertexAlreadyExists(_))));
        assert!(matches!(
            parse_graph("A>B:1 A>B:2"),
            Err(Error::EdgeAlreadyExists { .. })
        ));
        assert!(matches!(parse_graph("A>B"), Err(Error::Parse(_))));
        assert!(matches!(parse_graph("A:1>B"), Err(Error::Parse(_))));
        assert!(matches!(parse_graph(">B:1"), Err(Error::Parse(_))));
        assert!(matches!(parse_graph("A>B:x"), Err(Error::Parse(_))));
        assert!(matches!(parse_graph("A>B:-3"), Err(Error::Parse(_))));
        assert!(matches!(parse_graph("A>B:inf"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_build_requires_start() {
        let mut importer = GraphImporter::new();
        let desc = GraphDescription::new("A>B:1", "Z");
        assert!(matches!(importer.build(&desc), Err(Error::VertexNotFound(_))));

        let desc = GraphDescription::new("A>B:1", "A");
        assert_eq!(importer.build(&desc).unwrap().vertex_count(), 2);
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "A>B:1 B>C:2 A>C:5").unwrap();
        writeln!(file, "A  ").unwrap();

        let mut importer = GraphImporter::new();
        let (graph, desc) = importer.load_file(file.path()).unwrap();
        assert_eq!(desc.start, "A");
        assert_eq!(graph.edge_count(), 3);

        let missing = importer.load_file("/nonexistent/graph.txt");
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
