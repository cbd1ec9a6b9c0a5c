//! # 批量对接参数定义
//!
//! 所有参数都有默认值，不带任何参数运行时使用固定的配置文件、配体目录和日志文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/dock.rs`

use crate::batch::collector::{DEFAULT_LIGAND_DIR, DEFAULT_PATTERN};
use crate::batch::manifest::DEFAULT_MANIFEST;
use crate::utils::logging::{DEFAULT_ERROR_LOG, DEFAULT_INFO_LOG};
use crate::utils::unidock::DEFAULT_EXECUTABLE;

use clap::Args;
use std::path::PathBuf;

/// 批量对接参数
#[derive(Args, Debug)]
pub struct DockArgs {
    // ─────────────────────────────────────────────────────────────
    // Inputs
    // ─────────────────────────────────────────────────────────────
    /// Docking configuration file (JSON)
    #[arg(long, env = "DOCKBATCH_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// Directory containing ligand files
    #[arg(long, default_value = DEFAULT_LIGAND_DIR)]
    pub ligand_dir: PathBuf,

    /// Ligand file pattern (comma-separated for multiple patterns)
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Search ligand directory recursively
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Read ligands from the manifest file instead of scanning the directory
    #[arg(long, default_value_t = false)]
    pub from_manifest: bool,

    // ─────────────────────────────────────────────────────────────
    // Outputs
    // ─────────────────────────────────────────────────────────────
    /// Manifest of ligands still pending, rewritten when any ligand is skipped
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Informational log file
    #[arg(long, default_value = DEFAULT_INFO_LOG)]
    pub log_file: PathBuf,

    /// Error-only log file
    #[arg(long, default_value = DEFAULT_ERROR_LOG)]
    pub error_log: PathBuf,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// Docking executable
    #[arg(long, default_value = DEFAULT_EXECUTABLE)]
    pub executable: String,

    /// Launcher placed before the executable (e.g. 'srun --gres=gpu:1')
    #[arg(long)]
    pub launcher: Option<String>,

    /// Only log the commands, do not run them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
