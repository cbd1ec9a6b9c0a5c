//! # 统一错误处理模块
//!
//! 定义 dockbatch 的致命错误类型，使用 `thiserror` 派生。
//!
//! 单个配体的对接失败不属于此处的错误，而是 `models::Outcome` 的取值，
//! 由批量执行器记录后继续处理下一个配体。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// dockbatch 统一错误类型
#[derive(Error, Debug)]
pub enum DockBatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse config file: {path}\nReason: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file {path} is missing required key '{key}'")]
    MissingConfigKey { path: String, key: String },

    // ─────────────────────────────────────────────────────────────
    // 日志错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to set up logging: {0}")]
    LoggingSetup(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DockBatchError>;
