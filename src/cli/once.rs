//! Once 命令 - 只执行一个周期并打印结果，用于调试

use super::build_poller;
use crate::config::BotConfig;
use crate::poller::CycleOutcome;
use anyhow::{anyhow, Result};
use clap::Args;
use serde::Serialize;

/// Once 命令参数
#[derive(Args, Debug)]
pub struct OnceArgs {
    /// 请求游标（Unix 秒），默认当前时间
    #[arg(long)]
    pub from_date: Option<i64>,

    /// 只记录日志，不发送消息
    #[arg(long)]
    pub dry_run: bool,

    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
}

/// Once 命令输出
#[derive(Debug, Serialize)]
pub struct OnceOutput {
    pub outcome: CycleOutcome,
    pub cursor: i64,
}

/// 处理 once 命令
pub async fn handle_once(args: OnceArgs, config: BotConfig) -> Result<()> {
    let json = args.json;
    let output = tokio::task::spawn_blocking(move || -> Result<OnceOutput> {
        let mut poller = build_poller(&config, args.from_date, None, args.dry_run)?;
        let outcome = poller.poll_once();
        Ok(OnceOutput {
            outcome,
            cursor: poller.cursor().timestamp(),
        })
    })
    .await
    .map_err(|e| anyhow!("Poll task failed: {}", e))??;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &output.outcome {
            CycleOutcome::StatusSent(message) => println!("已发送状态: {}", message),
            CycleOutcome::StatusUnchanged => println!("状态未变化"),
            CycleOutcome::NoNewHomework => println!("没有新的作业状态"),
            CycleOutcome::ErrorSent(message) | CycleOutcome::ErrorSuppressed(message) => {
                println!("出错: {}", message)
            }
        }
        println!("游标: {}", output.cursor);
    }

    Ok(())
}
