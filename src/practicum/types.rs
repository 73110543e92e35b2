//! Practicum API 数据类型

use crate::error::PollError;
use std::fmt;
use std::str::FromStr;

/// 轮询游标：下一次请求的 `from_date` 下界（Unix 秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollCursor(i64);

impl PollCursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// 以当前时间初始化
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    pub fn timestamp(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PollCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单条作业记录
///
/// 保留原始 JSON，字段检查由 [`super::verdict::parse_status`] 负责，
/// 这样缺失字段和未知状态可以各自报出明确的错误。
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkRecord(serde_json::Value);

impl HomeworkRecord {
    pub fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

/// 通过校验的 API 响应
///
/// 只能通过 [`HomeworkSnapshot::new`] 构造，作业列表保证非空。
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkSnapshot {
    /// 作业列表，最新的在前
    homeworks: Vec<HomeworkRecord>,
    /// 服务端给出的下一个游标
    current_date: i64,
}

impl HomeworkSnapshot {
    /// 空列表返回 [`PollError::EmptyResult`]
    pub fn new(homeworks: Vec<HomeworkRecord>, current_date: i64) -> Result<Self, PollError> {
        if homeworks.is_empty() {
            return Err(PollError::EmptyResult { current_date });
        }
        Ok(Self {
            homeworks,
            current_date,
        })
    }

    /// 最新的一条作业
    pub fn latest(&self) -> &HomeworkRecord {
        &self.homeworks[0]
    }

    pub fn homeworks(&self) -> &[HomeworkRecord] {
        &self.homeworks
    }

    pub fn current_date(&self) -> i64 {
        self.current_date
    }
}

/// 审核状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// 固定的审核结论文本
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(PollError::UnknownStatus(other.to_string())),
        }
    }
}
