//! Run 命令 - 持续轮询，直到收到 Ctrl-C / SIGTERM

use super::build_poller;
use crate::config::BotConfig;
use crate::poller::Shutdown;
use anyhow::{anyhow, Result};
use clap::Args;
use tracing::info;

/// Run 命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// 轮询间隔（秒，至少 1），默认取 RETRY_PERIOD
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// 初始游标（Unix 秒），默认当前时间
    #[arg(long)]
    pub from_date: Option<i64>,

    /// 只记录日志，不发送消息
    #[arg(long)]
    pub dry_run: bool,
}

/// 处理 run 命令
pub async fn handle_run(args: RunArgs, config: BotConfig) -> Result<()> {
    let (handle, shutdown) = Shutdown::channel();

    let mut worker = tokio::task::spawn_blocking(move || -> Result<()> {
        let mut poller = build_poller(&config, args.from_date, args.interval, args.dry_run)?;
        poller.run(&shutdown);
        Ok(())
    });

    tokio::select! {
        res = &mut worker => {
            return res.map_err(|e| anyhow!("Poller task failed: {}", e))?;
        }
        _ = shutdown_signal() => {
            info!("Signal received, finishing current cycle");
            handle.trigger();
        }
    }

    worker
        .await
        .map_err(|e| anyhow!("Poller task failed: {}", e))??;
    info!("Bot stopped");
    Ok(())
}

/// 等待 Ctrl-C，Unix 上同时等待 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
