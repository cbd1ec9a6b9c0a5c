//! # dockbatch - 批量分子对接驱动
//!
//! 对目录中的每个配体调用一次外部对接程序（默认 Uni-Dock），
//! 单个配体失败时记录并跳过，最后用成功的配体重写配体清单。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (配置与清单解析)
//!   │     ├── batch/     (配体收集、顺序执行、清单重写)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (日志、输出、子进程监管)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    // 跳过的配体不影响退出码，只有致命错误返回 1
    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
