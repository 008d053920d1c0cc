//! 日志初始化
//!
//! 过滤规则优先级：`RUST_LOG`、`GRAPHDEMO_LOG`、命令行参数、默认 `graphdemo=warn`。
//! 日志输出到 stderr。

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 日志级别环境变量
pub const LOG_ENV: &str = "GRAPHDEMO_LOG";

/// 由命令行参数得出过滤规则
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("graphdemo={}", level),
        (true, None) => "graphdemo=debug".to_string(),
        (false, None) => "graphdemo=warn".to_string(),
    }
}

/// 初始化 tracing
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
