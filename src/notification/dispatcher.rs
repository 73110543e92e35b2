//! 通知分发器 - 把消息路由到已注册的渠道
//!
//! 发送失败只记日志，不会传播给调用方。

use super::channel::{NotificationChannel, SendResult};
use std::sync::Arc;
use tracing::{debug, error, info};

/// 通知分发器
pub struct NotificationDispatcher {
    /// 所有注册的渠道
    channels: Vec<Arc<dyn NotificationChannel>>,
    /// 是否为 dry-run 模式
    dry_run: bool,
}

impl NotificationDispatcher {
    /// 创建新的分发器
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 注册渠道
    pub fn register_channel(&mut self, channel: Arc<dyn NotificationChannel>) {
        info!(channel = channel.name(), "Registering notification channel");
        self.channels.push(channel);
    }

    /// 发送消息到所有渠道，返回每个渠道的结果
    pub fn dispatch(&self, text: &str) -> Vec<(String, SendResult)> {
        let mut results = Vec::with_capacity(self.channels.len());

        for channel in &self.channels {
            let name = channel.name().to_string();

            if self.dry_run {
                info!(channel = %name, message = %text, "[DRY-RUN] Would send message");
                results.push((name, SendResult::Skipped("dry-run".to_string())));
                continue;
            }

            let result = match channel.send(text) {
                Ok(SendResult::Failed(reason)) => {
                    error!(channel = %name, error = %reason, "Failed to send message");
                    SendResult::Failed(reason)
                }
                Ok(r) => {
                    debug!(channel = %name, message = %text, "Message dispatched");
                    r
                }
                Err(e) => {
                    error!(channel = %name, error = %e, "Failed to send message");
                    SendResult::Failed(e.to_string())
                }
            };

            results.push((name, result));
        }

        results
    }

    /// 获取已注册的渠道数量
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// 获取已注册的渠道名称
    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }
}

impl Default for NotificationDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
