//! 通知去重器 - 只记住最近一次发送的文本
//!
//! 状态消息和错误消息各用一个实例，互不影响。
//! 与上一次发送的文本完全相同时跳过；文本变化或 `reset` 之后重新发送。

use tracing::debug;

/// 通知去重器
#[derive(Debug, Default)]
pub struct NotificationDeduplicator {
    /// 去重对象（用于日志），如 "status" / "error"
    label: &'static str,
    /// 最近一次发送的内容
    last: Option<String>,
}

impl NotificationDeduplicator {
    pub fn new(label: &'static str) -> Self {
        Self { label, last: None }
    }

    /// 检查是否应该发送通知
    ///
    /// 返回 `true` 时同时记下该内容，调用方应随后发送。
    pub fn should_send(&mut self, content: &str) -> bool {
        if self.last.as_deref() == Some(content) {
            debug!(label = self.label, "Notification deduplicated (same as last sent)");
            return false;
        }

        self.last = Some(content.to_string());
        true
    }

    /// 最近一次发送的内容
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// 清空记录
    pub fn reset(&mut self) {
        if self.last.take().is_some() {
            debug!(label = self.label, "Deduplication window cleared");
        }
    }
}
