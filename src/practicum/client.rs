//! Practicum API 客户端 - 对 homework_statuses 端点的单次请求

use crate::error::PollError;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// 默认端点
pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// 默认超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 作业状态数据源
///
/// 实现方只负责一次请求，不做重试；重试由轮询循环按固定间隔完成。
pub trait HomeworkSource: Send {
    /// 数据源名称（用于日志）
    fn name(&self) -> &str;

    /// 拉取 `from_date` 之后的状态快照，返回原始 JSON
    fn fetch(&self, from_date: i64) -> Result<serde_json::Value, PollError>;
}

/// Practicum 客户端配置
#[derive(Debug, Clone)]
pub struct PracticumConfig {
    /// OAuth token
    pub token: String,
    /// 端点 URL
    pub endpoint: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
}

impl PracticumConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: PRACTICUM_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Practicum API 客户端
pub struct PracticumClient {
    client: reqwest::blocking::Client,
    config: PracticumConfig,
}

impl PracticumClient {
    /// 创建新客户端
    pub fn new(config: PracticumConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Cannot create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }
}

impl HomeworkSource for PracticumClient {
    fn name(&self) -> &str {
        "practicum"
    }

    fn fetch(&self, from_date: i64) -> Result<serde_json::Value, PollError> {
        debug!(endpoint = %self.config.endpoint, from_date, "Requesting homework statuses");

        let start = std::time::Instant::now();
        let response = self
            .client
            .get(&self.config.endpoint)
            .header("Authorization", format!("OAuth {}", self.config.token))
            .query(&[("from_date", from_date)])
            .send()
            .map_err(|e| PollError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            "Homework statuses request completed"
        );

        if status != StatusCode::OK {
            return Err(PollError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| PollError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| PollError::Decode(e.to_string()))
    }
}
