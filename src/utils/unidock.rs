//! # Uni-Dock 命令行构造工具
//!
//! 根据对接配置为单个配体生成固定格式的命令行。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `models/config.rs`

use crate::models::DockingConfig;

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// 默认对接程序名
pub const DEFAULT_EXECUTABLE: &str = "unidock";

/// 对接命令模板：可选的启动器前缀 + 对接程序
#[derive(Debug, Clone)]
pub struct DockCommand {
    /// 实际启动的程序（无启动器时即对接程序本身）
    program: OsString,
    /// 位于对接参数之前的参数（启动器参数与对接程序名）
    leading_args: Vec<OsString>,
}

impl DockCommand {
    /// 直接调用对接程序
    pub fn new(executable: impl Into<OsString>) -> Self {
        Self {
            program: executable.into(),
            leading_args: Vec::new(),
        }
    }

    /// 通过启动器调用对接程序，例如 `srun --gres=gpu:1 unidock ...`
    ///
    /// `launcher` 按空白切分；为空时等价于 [`DockCommand::new`]。
    pub fn with_launcher(launcher: &str, executable: impl Into<OsString>) -> Self {
        let mut parts = launcher.split_whitespace();
        match parts.next() {
            Some(program) => parts
                .fold(Self::new(program), |cmd, arg| cmd.leading_arg(arg))
                .leading_arg(executable),
            None => Self::new(executable),
        }
    }

    /// 在对接参数之前追加一个参数
    pub fn leading_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.leading_args.push(arg.into());
        self
    }

    /// 生成单个配体的完整参数列表（不含程序名）
    pub fn args_for(&self, ligand: &Path, config: &DockingConfig) -> Vec<OsString> {
        let mut args = self.leading_args.clone();

        args.push("--receptor".into());
        args.push(config.receptor.as_os_str().to_owned());
        args.push("--gpu_batch".into());
        args.push(ligand.as_os_str().to_owned());
        args.push("--search_mode".into());
        args.push(config.search_mode.as_str().into());
        args.push("--scoring".into());
        args.push(config.scoring.as_str().into());

        for (kind, values) in [
            ("center", config.search_box.center()),
            ("size", config.search_box.size()),
        ] {
            for (axis, value) in ["x", "y", "z"].iter().zip(values) {
                args.push(format!("--{}_{}", kind, axis).into());
                args.push(value.to_string().into());
            }
        }

        args.push("--num_modes".into());
        args.push(config.num_modes.to_string().into());
        args.push("--dir".into());
        args.push(config.dir.as_os_str().to_owned());

        args
    }

    /// 生成可执行的 `Command`
    pub fn build(&self, ligand: &Path, config: &DockingConfig) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args_for(ligand, config));
        cmd
    }

    /// 人类可读的命令行（用于 dry-run 日志）
    pub fn render(&self, ligand: &Path, config: &DockingConfig) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args_for(ligand, config))
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for DockCommand {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}
