//! graphdemo CLI 工具
//!
//! 菜单驱动的交互式命令行界面

use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;
use graphdemo::cli::{
    execute_menu_command, menu_text, parse_command, CommandResult, MenuHelper, PrintMode, Printer,
};
use graphdemo::config::{Config, RunLimits, DEFAULT_MAX_EDGES, DEFAULT_MAX_VERTICES};
use graphdemo::logging::init_tracing;
use graphdemo::session::GraphSession;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "graphdemo-cli")]
#[command(about = "有向带权图算法演示")]
#[command(version)]
struct Args {
    /// 启动时载入的图文件（第一行图描述，第二行起点）
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 顶点数上限
    #[arg(long, env = "GRAPHDEMO_MAX_VERTICES", default_value_t = DEFAULT_MAX_VERTICES)]
    max_vertices: usize,

    /// 边数上限
    #[arg(long, env = "GRAPHDEMO_MAX_EDGES", default_value_t = DEFAULT_MAX_EDGES)]
    max_edges: usize,

    /// 以纯文本而非表格输出
    #[arg(long)]
    plain: bool,

    /// 历史文件
    #[arg(long)]
    history: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 日志级别 (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            limits: RunLimits {
                max_vertices: self.max_vertices,
                max_edges: self.max_edges,
            },
            print_mode: if self.plain {
                PrintMode::Plain
            } else {
                PrintMode::Table
            },
            history_file: self.history.clone().or_else(Config::default_history_file),
        }
    }
}

type LineEditor = Editor<MenuHelper, DefaultHistory>;

/// 读取一行；Ctrl-C 或 Ctrl-D 视为结束输入
fn read_line(editor: &mut LineEditor, prompt: &str) -> Option<String> {
    match editor.readline(prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                let _ = editor.add_history_entry(line.as_str());
            }
            Some(line)
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
        Err(e) => {
            tracing::warn!(error = %e, "readline failed");
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, args.log_level.as_deref())?;

    let config = args.config();
    let printer = Printer::new(config.print_mode);
    let mut session = GraphSession::new(config.limits);

    let mut editor: LineEditor = Editor::new().context("无法初始化行编辑器")?;
    editor.set_helper(Some(MenuHelper::new()));
    if let Some(path) = &config.history_file {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        // 首次运行时历史文件不存在
        let _ = editor.load_history(path);
    }

    println!("GraphDemo CLI v{}", graphdemo::VERSION);

    if let Some(file) = &args.file {
        let loaded = session.load_file(file).map(|_| ());
        match loaded.and_then(|()| session.describe()) {
            Ok(view) => {
                let stats = session.last_import();
                println!(
                    "已载入 {} ({} ms)\n{}",
                    file.display(),
                    stats.duration_ms,
                    view
                );
            }
            Err(e) => println!("{} {}", "Error:".red().bold(), e),
        }
    }

    loop {
        println!("{}", menu_text());
        let input = match read_line(&mut editor, graphdemo::cli::commands::PROMPT) {
            Some(input) => input,
            None => break,
        };

        let cmd = match parse_command(&input) {
            Some(cmd) => cmd,
            None => {
                println!("{}", "Error: Number must be 1 to 7".red());
                continue;
            }
        };

        let result = execute_menu_command(cmd, &mut session, &printer, |prompt| {
            read_line(&mut editor, prompt)
        });
        match result {
            CommandResult::Continue => {}
            CommandResult::Exit => break,
            CommandResult::Message(msg) => println!("{}", msg),
            CommandResult::Error(msg) => println!("{} {}", "Error:".red().bold(), msg),
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(e) = editor.save_history(path) {
            tracing::debug!(error = %e, path = %path.display(), "failed to save history");
        }
    }

    println!("再见！");
    Ok(())
}
