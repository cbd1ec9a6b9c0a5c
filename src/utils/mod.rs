//! # 工具函数模块
//!
//! 提供美化输出、进度条、日志上下文、对接命令构造与子进程监管。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/` 模块使用
//! - 子模块: logging, output, progress, supervisor, unidock

pub mod logging;
pub mod output;
pub mod progress;
pub mod supervisor;
pub mod unidock;
