//! 通知层 - 渠道、分发与去重
//!
//! # 使用示例
//! ```ignore
//! use homework_bot::notification::{NotificationDispatcher, TelegramChannel, TelegramConfig};
//!
//! let mut dispatcher = NotificationDispatcher::new();
//! dispatcher.register_channel(Arc::new(TelegramChannel::new(TelegramConfig::new(token, chat_id))?));
//! dispatcher.dispatch("Изменился статус проверки работы ...");
//! ```

pub mod channel;
pub mod channels;
pub mod deduplicator;
pub mod dispatcher;

pub use channel::{NotificationChannel, SendResult};
pub use channels::{TelegramChannel, TelegramConfig};
pub use deduplicator::NotificationDeduplicator;
pub use dispatcher::NotificationDispatcher;
