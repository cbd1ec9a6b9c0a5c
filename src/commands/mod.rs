//! # 命令执行模块
//!
//! 实现批量对接的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `batch/`, `utils/`
//! - 子模块: dock

pub mod dock;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    dock::execute(cli.dock)
}
