//! Telegram 渠道（Bot API sendMessage）

use crate::notification::channel::{NotificationChannel, SendResult};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Bot API 基础 URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Telegram 渠道配置
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token
    pub bot_token: String,
    /// Chat ID
    pub chat_id: String,
    /// Bot API 基础 URL
    pub api_url: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_url: TELEGRAM_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram 渠道
pub struct TelegramChannel {
    client: reqwest::blocking::Client,
    config: TelegramConfig,
}

impl TelegramChannel {
    /// 创建 Telegram 渠道
    pub fn new(config: TelegramConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow!("Cannot create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_url.trim_end_matches('/'),
            self.config.bot_token
        )
    }
}

impl NotificationChannel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    fn send(&self, text: &str) -> Result<SendResult> {
        let request = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text,
        };

        // URL 中含 bot token，错误信息里去掉 URL
        let response = self
            .client
            .post(self.send_message_url())
            .json(&request)
            .send()
            .map_err(|e| anyhow!("Telegram request failed: {}", e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| anyhow!("Failed to read Telegram response: {}", e.without_url()))?;

        match serde_json::from_str::<BotApiResponse>(&body) {
            Ok(resp) if resp.ok => {
                debug!(chat_id = %self.config.chat_id, message = %text, "Bot sent message to chat");
                Ok(SendResult::Sent)
            }
            Ok(resp) => Ok(SendResult::Failed(format!(
                "Telegram API error ({}): {}",
                status,
                resp.description.unwrap_or_else(|| "unknown error".to_string())
            ))),
            Err(_) => Ok(SendResult::Failed(format!(
                "Telegram API error ({}): unexpected response body",
                status
            ))),
        }
    }
}
