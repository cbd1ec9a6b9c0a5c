//! # 批量对接模块
//!
//! 提供配体收集、顺序对接执行与清单重写。
//!
//! ## 功能
//! - 收集匹配的配体文件列表
//! - 顺序执行，单个失败不影响其余配体
//! - 跳过列表与耗时统计
//! - 失败后重写配体清单
//!
//! ## 依赖关系
//! - 被 `commands/dock.rs` 使用
//! - 使用 `utils/` 中的命令构造、子进程监管与进度条

pub mod collector;
pub mod manifest;
pub mod runner;

pub use collector::LigandCollector;
pub use manifest::finalize;
pub use runner::{BatchReport, BatchRunner};
