//! # 数据模型模块
//!
//! 定义对接配置和单配体处理结果。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/`, `utils/` 使用
//! - 无外部模块依赖

pub mod config;
pub mod outcome;

pub use config::{DockingConfig, REQUIRED_KEYS};
pub use outcome::{Outcome, SkipList};
