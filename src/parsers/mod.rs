//! # 解析器模块
//!
//! 读取对接配置文件和配体清单。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: config, manifest

pub mod config;
pub mod manifest;

pub use config::load_config;
pub use manifest::read_manifest;
