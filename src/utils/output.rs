//! # 美化输出工具
//!
//! 提供统一的终端输出样式。终端输出只面向用户，日志文件由 `utils/logging.rs` 负责。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/` 使用
//! - 使用 `colored`, `tabled` crate

use crate::models::SkipList;

use colored::Colorize;
use tabled::{Table, Tabled};

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 跳过列表表格行
#[derive(Tabled)]
struct SkipRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Ligand")]
    ligand: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 打印跳过配体汇总表
pub fn print_skip_table(skip: &SkipList) {
    if skip.is_empty() {
        return;
    }

    let rows: Vec<SkipRow> = skip
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| SkipRow {
            index: i + 1,
            ligand: e.path.display().to_string(),
            reason: e.reason.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
