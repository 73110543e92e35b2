//! 启动配置 - 从环境变量读取（可由 `.env` 文件补充）
//!
//! 必需变量：`PRACTICUM_TOKEN`、`TELEGRAM_TOKEN`、`TELEGRAM_CHAT_ID`。
//! 可选变量：`PRACTICUM_ENDPOINT`、`RETRY_PERIOD`、`REQUEST_TIMEOUT`、`HWBOT_LOG_FILE`。
//! 空字符串视为未设置。

use crate::error::ConfigError;
use crate::notification::TelegramConfig;
use crate::practicum::{PracticumConfig, PRACTICUM_ENDPOINT};
use std::path::PathBuf;
use std::time::Duration;

/// 默认轮询间隔（秒）
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// 默认 HTTP 超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 默认日志文件
pub const DEFAULT_LOG_FILE: &str = "homework_bot.log";

const REQUIRED: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Bot 配置
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub retry_period: Duration,
    pub request_timeout_secs: u64,
    pub log_file: PathBuf,
}

impl BotConfig {
    /// 把当前目录（或上级目录）的 `.env` 合并进进程环境
    ///
    /// 找不到文件返回 `Ok(None)`。日志初始化之前调用，结果由调用方记录。
    pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
        match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// 从进程环境加载
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意查找函数加载，便于测试
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED
            .iter()
            .copied()
            .filter(|name| get(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let required = |name: &'static str| get(name).ok_or_else(|| ConfigError::Missing(vec![name]));

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| PRACTICUM_ENDPOINT.to_string()),
            retry_period: Duration::from_secs(parse_secs(
                "RETRY_PERIOD",
                get("RETRY_PERIOD"),
                DEFAULT_RETRY_PERIOD_SECS,
            )?),
            request_timeout_secs: parse_secs(
                "REQUEST_TIMEOUT",
                get("REQUEST_TIMEOUT"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            log_file: get("HWBOT_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }

    /// 日志文件路径，必需变量缺失时也能确定
    pub fn log_file_from_env() -> PathBuf {
        std::env::var("HWBOT_LOG_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    pub fn practicum(&self) -> PracticumConfig {
        PracticumConfig {
            token: self.practicum_token.clone(),
            endpoint: self.endpoint.clone(),
            timeout_secs: self.request_timeout_secs,
        }
    }

    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig {
            timeout_secs: self.request_timeout_secs,
            ..TelegramConfig::new(self.telegram_token.clone(), self.telegram_chat_id.clone())
        }
    }
}

/// 正整数秒数
fn parse_secs(name: &'static str, value: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::Invalid { name, value: raw }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const FULL: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "p-token"),
        ("TELEGRAM_TOKEN", "t-token"),
        ("TELEGRAM_CHAT_ID", "12345"),
    ];

    #[test]
    fn test_required_only_uses_defaults() {
        let config = BotConfig::from_lookup(lookup(&FULL)).unwrap();
        assert_eq!(config.practicum_token, "p-token");
        assert_eq!(config.telegram_token, "t-token");
        assert_eq!(config.telegram_chat_id, "12345");
        assert_eq!(config.endpoint, PRACTICUM_ENDPOINT);
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_missing_all_reports_every_name() {
        let err = BotConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(REQUIRED.to_vec()));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = BotConfig::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "  "),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["TELEGRAM_TOKEN"]));
    }

    #[test]
    fn test_optional_overrides() {
        let mut pairs = FULL.to_vec();
        pairs.extend([
            ("PRACTICUM_ENDPOINT", "http://127.0.0.1:9000/api/"),
            ("RETRY_PERIOD", "60"),
            ("REQUEST_TIMEOUT", "5"),
            ("HWBOT_LOG_FILE", "/tmp/bot.log"),
        ]);
        let config = BotConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/api/");
        assert_eq!(config.retry_period, Duration::from_secs(60));
        assert_eq!(config.practicum().timeout_secs, 5);
        assert_eq!(config.telegram().timeout_secs, 5);
        assert_eq!(config.telegram().chat_id, "12345");
        assert_eq!(config.log_file, PathBuf::from("/tmp/bot.log"));
    }

    #[test]
    fn test_invalid_retry_period() {
        let mut pairs = FULL.to_vec();
        pairs.push(("RETRY_PERIOD", "ten"));
        let err = BotConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "RETRY_PERIOD",
                value: "ten".to_string()
            }
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut pairs = FULL.to_vec();
        pairs.push(("REQUEST_TIMEOUT", "0"));
        assert!(matches!(
            BotConfig::from_lookup(lookup(&pairs)),
            Err(ConfigError::Invalid { name: "REQUEST_TIMEOUT", .. })
        ));
    }
}
