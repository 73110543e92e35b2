//! 状态翻译 - 把作业记录转换为发往聊天的文本

use super::types::{HomeworkRecord, HomeworkStatus};
use crate::error::PollError;

/// 从作业记录中提取状态并生成通知文本
///
/// 返回 `Изменился статус проверки работы "<name>". <verdict>`
pub fn parse_status(record: &HomeworkRecord) -> Result<String, PollError> {
    let map = record.raw().as_object().ok_or(PollError::TypeMismatch {
        what: "описание работы",
        expected: "словарём",
    })?;

    let homework_name = string_field(map, "homework_name")?;
    let status: HomeworkStatus = string_field(map, "status")?.parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name,
        status.verdict()
    ))
}

fn string_field<'a>(
    map: &'a serde_json::Map<String, serde_json::Value>,
    key: &'static str,
) -> Result<&'a str, PollError> {
    map.get(key)
        .ok_or(PollError::MissingField(key))?
        .as_str()
        .ok_or(PollError::TypeMismatch {
            what: key,
            expected: "строкой",
        })
}
