//! Yandex Practicum 作业状态 API
//!
//! - `client`: 单次 HTTP 请求，区分传输错误、HTTP 状态错误和 JSON 解码错误
//! - `validate`: 检查响应结构
//! - `verdict`: 把最新一条作业翻译成通知文本

pub mod client;
pub mod types;
pub mod validate;
pub mod verdict;

pub use client::{HomeworkSource, PracticumClient, PracticumConfig, PRACTICUM_ENDPOINT};
pub use types::{HomeworkRecord, HomeworkSnapshot, HomeworkStatus, PollCursor};
pub use validate::check_response;
pub use verdict::parse_status;
