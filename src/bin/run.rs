//! graphdemo 批处理工具
//!
//! 从文件或命令行参数构造图，运行一个或全部算法后退出

use anyhow::{bail, Context as _};
use clap::Parser;
use graphdemo::algorithm::{Algorithm, AlgorithmOutput};
use graphdemo::cli::{PrintMode, Printer};
use graphdemo::config::{RunLimits, DEFAULT_MAX_EDGES, DEFAULT_MAX_VERTICES};
use graphdemo::logging::init_tracing;
use graphdemo::session::GraphSession;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "graphdemo-run")]
#[command(about = "在图上运行拓扑排序、最短路径或最小生成树")]
#[command(version)]
struct Args {
    /// 图文件（第一行图描述，第二行起点）
    #[arg(short, long, conflicts_with_all = ["graph", "start"])]
    input: Option<PathBuf>,

    /// 图描述，例如 "A>B:1 B>C:2 D"
    #[arg(short, long, requires = "start")]
    graph: Option<String>,

    /// 起点标签
    #[arg(short, long)]
    start: Option<String>,

    /// 算法名 (topo-sort, shortest-paths, spanning-tree) 或 all
    #[arg(short, long, default_value = "all")]
    algorithm: String,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 以纯文本而非表格输出
    #[arg(long)]
    plain: bool,

    /// 顶点数上限
    #[arg(long, env = "GRAPHDEMO_MAX_VERTICES", default_value_t = DEFAULT_MAX_VERTICES)]
    max_vertices: usize,

    /// 边数上限
    #[arg(long, env = "GRAPHDEMO_MAX_EDGES", default_value_t = DEFAULT_MAX_EDGES)]
    max_edges: usize,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 日志级别 (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, args.log_level.as_deref())?;

    let algorithm: Option<Algorithm> = if args.algorithm.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(args.algorithm.parse()?)
    };

    let mut session = GraphSession::new(RunLimits {
        max_vertices: args.max_vertices,
        max_edges: args.max_edges,
    });

    match (&args.input, &args.graph, &args.start) {
        (Some(path), _, _) => {
            session
                .load_file(path)
                .with_context(|| format!("无法从 {} 构造图", path.display()))?;
        }
        (None, Some(rep), Some(start)) => {
            session.create_graph(rep, start).context("无法构造图")?;
        }
        _ => bail!("需要 --input <文件> 或 --graph <描述> --start <起点>"),
    }

    tracing::info!(
        vertices = session.last_import().vertices_imported,
        edges = session.last_import().edges_imported,
        duration_ms = session.last_import().duration_ms,
        "graph imported"
    );

    let started = Instant::now();
    let outputs: Vec<AlgorithmOutput> = match algorithm {
        Some(algo) => vec![session.run(algo)?],
        None => session.run_all()?,
    };
    tracing::info!(
        algorithms = outputs.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "run finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    } else {
        let printer = Printer::new(if args.plain {
            PrintMode::Plain
        } else {
            PrintMode::Table
        });
        for output in &outputs {
            println!("{}", printer.format_output(output));
        }
    }

    Ok(())
}
