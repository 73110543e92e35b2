//! CLI command handling

pub mod check;
pub mod once;
pub mod run;

pub use check::*;
pub use once::*;
pub use run::*;

use crate::config::BotConfig;
use crate::notification::{NotificationDispatcher, TelegramChannel};
use crate::poller::StatusPoller;
use crate::practicum::{PollCursor, PracticumClient};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

/// 根据配置组装轮询器
///
/// 内部创建 `reqwest::blocking` 客户端，必须在阻塞线程上调用。
pub fn build_poller(
    config: &BotConfig,
    from_date: Option<i64>,
    interval: Option<u64>,
    dry_run: bool,
) -> Result<StatusPoller> {
    let source = PracticumClient::new(config.practicum())?;

    let mut dispatcher = NotificationDispatcher::new().with_dry_run(dry_run);
    dispatcher.register_channel(Arc::new(TelegramChannel::new(config.telegram())?));

    let cursor = from_date.map(PollCursor::new).unwrap_or_else(PollCursor::now);
    let interval = interval
        .map(Duration::from_secs)
        .unwrap_or(config.retry_period);

    Ok(StatusPoller::new(Box::new(source), dispatcher, cursor, interval))
}

/// 隐藏 token，只保留末尾 4 个字符
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdefgh"), "****efgh");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret(""), "");
    }
}
