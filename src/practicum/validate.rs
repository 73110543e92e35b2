//! 响应校验 - 检查 API 响应是否符合文档约定的结构

use super::types::{HomeworkRecord, HomeworkSnapshot};
use crate::error::PollError;
use serde_json::Value;

/// 校验 API 响应
///
/// 检查顺序：顶层是对象 → `homeworks` 存在且为数组 → `current_date` 为整数 → 数组非空。
/// 空数组返回 [`PollError::EmptyResult`]，携带 `current_date` 以便调用方推进游标。
pub fn check_response(response: &Value) -> Result<HomeworkSnapshot, PollError> {
    let map = response.as_object().ok_or(PollError::TypeMismatch {
        what: "ответ API",
        expected: "словарём",
    })?;

    let homeworks = map
        .get("homeworks")
        .ok_or(PollError::MissingKey("homeworks"))?
        .as_array()
        .ok_or(PollError::TypeMismatch {
            what: "homeworks",
            expected: "списком",
        })?;

    let current_date = map
        .get("current_date")
        .ok_or(PollError::MissingKey("current_date"))?
        .as_i64()
        .ok_or(PollError::TypeMismatch {
            what: "current_date",
            expected: "целым числом",
        })?;

    HomeworkSnapshot::new(
        homeworks.iter().cloned().map(HomeworkRecord::new).collect(),
        current_date,
    )
}
