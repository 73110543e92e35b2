//! CheckConfig 命令 - 校验配置后退出

use super::mask_secret;
use crate::config::BotConfig;

/// 打印已加载的配置（token 打码）
pub fn handle_check_config(config: &BotConfig) {
    println!("配置有效:");
    println!("  PRACTICUM_TOKEN:  {}", mask_secret(&config.practicum_token));
    println!("  TELEGRAM_TOKEN:   {}", mask_secret(&config.telegram_token));
    println!("  TELEGRAM_CHAT_ID: {}", config.telegram_chat_id);
    println!("  端点:             {}", config.endpoint);
    println!("  轮询间隔:         {}秒", config.retry_period.as_secs());
    println!("  请求超时:         {}秒", config.request_timeout_secs);
    println!("  日志文件:         {}", config.log_file.display());
}
