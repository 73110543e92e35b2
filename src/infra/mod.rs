//! 基础设施层 - 日志初始化与日志文件

pub mod log_file;
pub mod logging;

pub use log_file::RotatingFile;
