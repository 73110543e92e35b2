//! Homework Bot - 轮询 Yandex Practicum 作业审核状态并推送到 Telegram

pub mod cli;
pub mod config;
pub mod error;
pub mod infra;
pub mod notification;
pub mod poller;
pub mod practicum;

pub use config::BotConfig;
pub use error::{ConfigError, PollError};
pub use notification::{
    NotificationChannel, NotificationDeduplicator, NotificationDispatcher, SendResult,
    TelegramChannel, TelegramConfig,
};
pub use poller::{CycleOutcome, Shutdown, ShutdownHandle, StatusPoller};
pub use practicum::{
    check_response, parse_status, HomeworkRecord, HomeworkSnapshot, HomeworkSource, HomeworkStatus,
    PollCursor, PracticumClient, PracticumConfig,
};
