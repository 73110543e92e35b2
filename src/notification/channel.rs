//! 通知渠道 trait 定义

use anyhow::Result;

/// 发送结果
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    /// 发送成功
    Sent,
    /// 跳过（dry-run 等）
    Skipped(String),
    /// 发送失败
    Failed(String),
}

/// 通知渠道 trait
///
/// `Err` 表示请求本身没有完成；渠道明确拒绝的消息返回 `Ok(SendResult::Failed)`。
pub trait NotificationChannel: Send + Sync {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 同步发送纯文本消息
    fn send(&self, text: &str) -> Result<SendResult>;
}
