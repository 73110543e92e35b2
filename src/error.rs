//! 错误类型 - 轮询周期与启动配置的封闭错误集合
//!
//! Display 文本是俄语，因为错误消息会原样转发到 Telegram 聊天。

/// 单个轮询周期内可能出现的错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollError {
    /// 请求无法完成（网络、DNS、超时、读取响应体失败）
    #[error("Ошибка при запросе к основному API: {0}")]
    Transport(String),

    /// 响应码不是 200
    #[error("Эндпоинт API недоступен, код ответа: {0}")]
    HttpStatus(u16),

    /// 响应体不是合法 JSON
    #[error("Ошибка декодирования формата JSON: {0}")]
    Decode(String),

    /// 结构或类型不符合预期
    #[error("Неверный тип данных в ответе API: {what} не является {expected}")]
    TypeMismatch {
        what: &'static str,
        expected: &'static str,
    },

    /// 响应缺少必需的键
    #[error("Отсутствует ключ \"{0}\" в ответе API")]
    MissingKey(&'static str),

    /// 作业记录缺少必需的字段
    #[error("Отсутствует поле \"{0}\" в описании работы")]
    MissingField(&'static str),

    /// 未知的审核状态
    #[error("Неизвестный статус работы: {0}")]
    UnknownStatus(String),

    /// 没有新的作业记录（不是真正的失败）
    #[error("Новых статусов нет")]
    EmptyResult { current_date: i64 },
}

impl PollError {
    /// 用于日志的短标签
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::Transport(_) => "transport",
            PollError::HttpStatus(_) => "http_status",
            PollError::Decode(_) => "decode",
            PollError::TypeMismatch { .. } => "type_mismatch",
            PollError::MissingKey(_) => "missing_key",
            PollError::MissingField(_) => "missing_field",
            PollError::UnknownStatus(_) => "unknown_status",
            PollError::EmptyResult { .. } => "empty_result",
        }
    }
}

/// 启动配置错误，出现即中止进程
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Некорректное значение переменной {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(PollError::EmptyResult { current_date: 1 }.kind(), "empty_result");
        assert_eq!(PollError::HttpStatus(500).kind(), "http_status");
        assert_eq!(PollError::MissingKey("homeworks").kind(), "missing_key");
        assert_eq!(PollError::UnknownStatus("unknown".into()).kind(), "unknown_status");
    }

    #[test]
    fn test_http_status_message_carries_code() {
        let text = PollError::HttpStatus(503).to_string();
        assert!(text.contains("503"));
    }

    #[test]
    fn test_missing_config_lists_all_names() {
        let err = ConfigError::Missing(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "Отсутствуют обязательные переменные окружения: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }
}
