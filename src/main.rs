//! Homework Bot CLI
//!
//! 轮询作业审核状态并推送到 Telegram

use anyhow::Result;
use clap::{Parser, Subcommand};
use homework_bot::{
    cli::{handle_check_config, handle_once, handle_run, OnceArgs, RunArgs},
    infra::logging,
    BotConfig,
};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

#[derive(Parser)]
#[command(name = "hwbot")]
#[command(about = "Homework Bot - 轮询作业审核状态并推送到 Telegram")]
#[command(version)]
struct Cli {
    /// 日志文件路径（默认取 HWBOT_LOG_FILE 或 homework_bot.log）
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 持续轮询并发送通知
    Run(RunArgs),
    /// 只执行一个周期
    Once(OnceArgs),
    /// 校验配置
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let dotenv = BotConfig::load_dotenv();
    let config = BotConfig::from_env();

    let log_file = cli.log_file.clone().unwrap_or_else(|| match &config {
        Ok(config) => config.log_file.clone(),
        Err(_) => BotConfig::log_file_from_env(),
    });
    logging::init(Some(&log_file))?;

    match dotenv {
        Ok(Some(path)) => info!(path = %path.display(), "Loaded .env file"),
        Ok(None) => debug!("No .env file found"),
        Err(e) => warn!(error = %e, "Ignoring unreadable .env file"),
    }

    // 缺少必需配置时在进入循环前中止
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(critical = true, error = %e, "Required configuration missing, aborting");
            return Err(e.into());
        }
    };

    match cli.command {
        Commands::Run(args) => handle_run(args, config).await?,
        Commands::Once(args) => handle_once(args, config).await?,
        Commands::CheckConfig => handle_check_config(&config),
    }

    Ok(())
}
