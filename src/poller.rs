//! 状态轮询器 - 拉取、校验、翻译、去重、发送
//!
//! 每个周期：
//! 1. 用当前游标请求数据源
//! 2. 校验响应并翻译最新一条作业
//! 3. 文本与上一次发送的状态不同时才发送
//! 4. 成功时把游标推进到服务端给出的 `current_date`
//!
//! 任意一步出错都会转换成一条诊断消息，与上一次发送的错误文本相同则不再发送，
//! 游标保持不变，下个周期重新请求同一个时间窗口。

use crate::error::PollError;
use crate::notification::{NotificationDeduplicator, NotificationDispatcher};
use crate::practicum::{check_response, parse_status, HomeworkSource, PollCursor};
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;
use tracing::{debug, error, info};

/// 错误通知前缀
pub const ERROR_PREFIX: &str = "Сбой в работе программы";

/// 单个周期的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum CycleOutcome {
    /// 状态变化，已发送
    StatusSent(String),
    /// 状态与上次相同，未发送
    StatusUnchanged,
    /// 没有新的作业记录
    NoNewHomework,
    /// 出错，已发送诊断消息
    ErrorSent(String),
    /// 出错，但与上次的诊断消息相同，未发送
    ErrorSuppressed(String),
}

impl CycleOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, CycleOutcome::ErrorSent(_) | CycleOutcome::ErrorSuppressed(_))
    }
}

/// 停止信号的发送端
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: Sender<()>,
}

impl ShutdownHandle {
    /// 请求停止；轮询器在当前周期结束后的等待阶段退出
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

/// 停止信号的接收端
///
/// 所有 [`ShutdownHandle`] 都被丢弃也视为停止。
#[derive(Debug)]
pub struct Shutdown {
    rx: Receiver<()>,
}

impl Shutdown {
    pub fn channel() -> (ShutdownHandle, Shutdown) {
        let (tx, rx) = mpsc::channel();
        (ShutdownHandle { tx }, Shutdown { rx })
    }

    /// 最多等待 `timeout`，收到停止信号返回 `true`
    pub fn wait(&self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => true,
        }
    }
}

/// 状态轮询器
///
/// 独占游标和两个去重窗口（状态、错误），进程重启后全部重置。
pub struct StatusPoller {
    source: Box<dyn HomeworkSource>,
    dispatcher: NotificationDispatcher,
    cursor: PollCursor,
    last_status: NotificationDeduplicator,
    last_error: NotificationDeduplicator,
    interval: Duration,
}

impl StatusPoller {
    pub fn new(
        source: Box<dyn HomeworkSource>,
        dispatcher: NotificationDispatcher,
        cursor: PollCursor,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            dispatcher,
            cursor,
            last_status: NotificationDeduplicator::new("status"),
            last_error: NotificationDeduplicator::new("error"),
            interval,
        }
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    /// 最近一次发送的状态消息
    pub fn last_status(&self) -> Option<&str> {
        self.last_status.last()
    }

    /// 最近一次发送的诊断消息
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.last()
    }

    /// 拉取 → 校验 → 翻译，返回 (消息, 新游标)
    fn fetch_latest(&self) -> Result<(String, i64), PollError> {
        let response = self.source.fetch(self.cursor.timestamp())?;
        let snapshot = check_response(&response)?;
        let message = parse_status(snapshot.latest())?;
        Ok((message, snapshot.current_date()))
    }

    /// 执行一个完整周期（不含等待）
    pub fn poll_once(&mut self) -> CycleOutcome {
        match self.fetch_latest() {
            Ok((message, current_date)) => {
                self.advance(current_date);
                self.last_error.reset();

                if self.last_status.should_send(&message) {
                    info!(message = %message, "Homework status changed");
                    self.dispatcher.dispatch(&message);
                    CycleOutcome::StatusSent(message)
                } else {
                    debug!("No new status");
                    CycleOutcome::StatusUnchanged
                }
            }
            Err(PollError::EmptyResult { current_date }) => {
                self.advance(current_date);
                self.last_error.reset();
                debug!("No new homework in response");
                CycleOutcome::NoNewHomework
            }
            Err(e) => self.handle_error(e),
        }
    }

    fn handle_error(&mut self, e: PollError) -> CycleOutcome {
        let message = format!("{}: {}", ERROR_PREFIX, e);
        error!(
            source = self.source.name(),
            kind = e.kind(),
            cursor = %self.cursor,
            "{}",
            message
        );

        if self.last_error.should_send(&message) {
            self.dispatcher.dispatch(&message);
            CycleOutcome::ErrorSent(message)
        } else {
            debug!(kind = e.kind(), "Same error already reported");
            CycleOutcome::ErrorSuppressed(message)
        }
    }

    fn advance(&mut self, current_date: i64) {
        let next = PollCursor::new(current_date);
        if next != self.cursor {
            debug!(from = %self.cursor, to = %next, "Advancing cursor");
        }
        self.cursor = next;
    }

    /// 循环执行，直到收到停止信号
    ///
    /// 停止信号只在周期之间的等待阶段生效，已开始的周期（包括发送）总会完成。
    pub fn run(&mut self, shutdown: &Shutdown) {
        info!(
            source = self.source.name(),
            cursor = %self.cursor,
            interval_secs = self.interval.as_secs(),
            "Status poller started"
        );

        let mut cycles: u64 = 0;
        loop {
            cycles += 1;
            let outcome = self.poll_once();
            debug!(cycle = cycles, outcome = ?outcome, cursor = %self.cursor, "Cycle finished");

            if shutdown.wait(self.interval) {
                info!(cycles, "Shutdown requested, status poller stopping");
                break;
            }
        }
    }
}
