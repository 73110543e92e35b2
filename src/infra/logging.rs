//! tracing 日志初始化：stderr + 轮转日志文件
//!
//! 通过 RUST_LOG 环境变量控制日志级别，例如 `RUST_LOG=debug hwbot run`

use super::log_file::RotatingFile;
use anyhow::{anyhow, Result};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 默认过滤规则
pub const DEFAULT_FILTER: &str = "homework_bot=debug,hwbot=info";

/// 初始化全局 subscriber
///
/// `log_file` 为 `None` 时只输出到 stderr。
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let file_layer = match log_file {
        Some(path) => {
            let file = RotatingFile::with_defaults(path)
                .map_err(|e| anyhow!("Cannot open log file {}: {}", path.display(), e))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_line_number(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Cannot initialize logging: {}", e))
}
