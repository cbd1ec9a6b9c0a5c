//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。dockbatch 只有一个功能，不使用子命令。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: dock

pub mod dock;

use clap::Parser;

/// dockbatch - 批量分子对接驱动
#[derive(Parser)]
#[command(name = "dockbatch")]
#[command(version)]
#[command(about = "Run a docking executable over a directory of ligands, skipping failures", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub dock: dock::DockArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["dockbatch"]).unwrap();
        let args = cli.dock;
        if std::env::var_os("DOCKBATCH_CONFIG").is_none() {
            assert_eq!(args.config, PathBuf::from("config.json"));
        }
        assert_eq!(args.ligand_dir, PathBuf::from("ligands"));
        assert_eq!(args.pattern, "*.pdbqt");
        assert_eq!(args.manifest, PathBuf::from("ligand_list.txt"));
        assert_eq!(args.log_file, PathBuf::from("unidock_log.txt"));
        assert_eq!(args.error_log, PathBuf::from("error.log"));
        assert_eq!(args.executable, "unidock");
        assert!(args.launcher.is_none());
        assert!(!args.dry_run && !args.from_manifest && !args.recursive);
    }

    #[test]
    fn test_override_flags() {
        let cli = Cli::try_parse_from([
            "dockbatch",
            "--ligand-dir",
            "trial",
            "--launcher",
            "srun --gres=gpu:1",
            "--from-manifest",
        ])
        .unwrap();
        assert_eq!(cli.dock.ligand_dir, PathBuf::from("trial"));
        assert_eq!(cli.dock.launcher.as_deref(), Some("srun --gres=gpu:1"));
        assert!(cli.dock.from_manifest);
    }
}
