//! # 批量对接执行器
//!
//! 依次为每个配体调用一次对接程序，单个配体失败不会中断批处理。
//!
//! ## 功能
//! - 顺序执行，一次只运行一个子进程
//! - 每个配体写一条日志（成功或跳过）
//! - 失败配体记入跳过列表
//! - 整个循环计时一次并在结束时写入日志
//!
//! ## 依赖关系
//! - 被 `commands/dock.rs` 调用
//! - 使用 `utils/unidock.rs` 构造命令，`utils/supervisor.rs` 执行
//! - 使用 `utils/progress.rs` 创建进度条

use crate::models::{DockingConfig, Outcome, SkipList};
use crate::utils::progress;
use crate::utils::supervisor::{self, Execution};
use crate::utils::unidock::DockCommand;

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{error, info};

/// 批处理结果
#[derive(Debug)]
pub struct BatchReport {
    /// 本次处理的全部配体（原始顺序）
    pub ligands: Vec<PathBuf>,
    /// 成功数量
    pub succeeded: usize,
    /// 失败配体
    pub skipped: SkipList,
    /// 整个循环耗时
    pub elapsed: Duration,
}

impl BatchReport {
    /// 总处理数量
    pub fn total(&self) -> usize {
        self.ligands.len()
    }

    /// 未被跳过的配体（保持原始顺序）
    pub fn survivors(&self) -> Vec<&Path> {
        self.ligands
            .iter()
            .map(PathBuf::as_path)
            .filter(|p| !self.skipped.contains(p))
            .collect()
    }
}

/// 批量对接执行器
pub struct BatchRunner<'a> {
    config: &'a DockingConfig,
    command: DockCommand,
    dry_run: bool,
    show_progress: bool,
}

impl<'a> BatchRunner<'a> {
    /// 创建新的批量执行器
    pub fn new(config: &'a DockingConfig, command: DockCommand) -> Self {
        Self {
            config,
            command,
            dry_run: false,
            show_progress: true,
        }
    }

    /// 只记录命令行，不执行
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 是否显示进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 顺序处理配体列表
    pub fn run(&self, ligands: Vec<PathBuf>) -> BatchReport {
        let pb = if self.show_progress {
            progress::create_progress_bar(ligands.len() as u64, "Docking")
        } else {
            progress::create_hidden_bar()
        };

        let mut skipped = SkipList::new();
        let mut succeeded = 0;

        let start = Instant::now();

        for ligand in &ligands {
            pb.set_message(display_name(ligand));

            if self.dry_run {
                info!("Would run: {}", self.command.render(ligand, self.config));
                pb.inc(1);
                continue;
            }

            let outcome = self.run_one(ligand, &pb);
            if outcome.is_success() {
                succeeded += 1;
            } else {
                skipped.record(ligand, summarize(&outcome));
            }

            pb.inc(1);
        }

        let elapsed = start.elapsed();
        pb.finish_and_clear();

        info!("Elapsed time: {:.2} seconds", elapsed.as_secs_f64());

        BatchReport {
            ligands,
            succeeded,
            skipped,
            elapsed,
        }
    }

    /// 对单个配体执行一次对接并记录日志
    pub fn run_one(&self, ligand: &Path, pb: &ProgressBar) -> Outcome {
        let name = display_name(ligand);
        let Execution { outcome, stdout } =
            supervisor::supervise(self.command.build(ligand, self.config));

        // 对接程序的输出直接回显到终端
        if !stdout.trim().is_empty() {
            pb.suspend(|| println!("{}", stdout.trim_end()));
        }

        match &outcome {
            Outcome::Success => {
                info!("Processed ligand: {}", name);
            }
            Outcome::ToolFailure { stderr, .. } => {
                error!("Error in file {}: {}", ligand.display(), stderr.trim_end());
                info!("Skipping ligand: {}", name);
            }
            Outcome::CrashOrException { reason } => {
                error!("Unexpected error in file {}: {}", ligand.display(), reason);
                info!("Skipping ligand: {}", name);
            }
        }

        outcome
    }
}

/// 配体文件名（日志用）
fn display_name(ligand: &Path) -> String {
    ligand
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ligand.display().to_string())
}

/// 跳过原因摘要：工具失败时取 stderr 最后一行
fn summarize(outcome: &Outcome) -> String {
    match outcome {
        Outcome::ToolFailure { code, stderr } => {
            match stderr.lines().rev().find(|l| !l.trim().is_empty()) {
                Some(line) => format!("exit code {}: {}", code, line.trim()),
                None => format!("exit code {}", code),
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logging::LogContext;
    use crate::utils::unidock::tests::sample_config;
    use std::fs;

    /// 通过 `sh -c` 模拟对接程序：`$4` 是 `--gpu_batch` 后的配体路径
    #[cfg(unix)]
    fn fake_unidock(script: &str) -> DockCommand {
        DockCommand::new("sh")
            .leading_arg("-c")
            .leading_arg(script)
            .leading_arg("fake-unidock")
    }

    fn ligands(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|n| {
                let p = dir.join(n);
                fs::write(&p, "REMARK ligand\n").unwrap();
                p
            })
            .collect()
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let info_log = dir.path().join("unidock_log.txt");
        let error_log = dir.path().join("error.log");
        let files = ligands(dir.path(), &["A.pdbqt", "B.pdbqt", "C.pdbqt"]);

        let config = sample_config();
        let script = r#"case "$4" in *B.pdbqt) echo "B exploded" >&2; exit 1;; esac; echo "docked $4""#;
        let ctx = LogContext::init(&info_log, &error_log).unwrap();
        let report = BatchRunner::new(&config, fake_unidock(script))
            .show_progress(false)
            .run(files.clone());
        ctx.close().unwrap();

        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped.contains(&files[1]));
        assert!(!report.skipped.contains(&files[0]));
        assert!(!report.skipped.contains(&files[2]));
        assert_eq!(report.survivors(), vec![files[0].as_path(), files[2].as_path()]);

        let info_text = fs::read_to_string(&info_log).unwrap();
        let error_text = fs::read_to_string(&error_log).unwrap();
        assert!(info_text.contains("Processed ligand: A.pdbqt"));
        assert!(info_text.contains("Skipping ligand: B.pdbqt"));
        assert!(info_text.contains("Processed ligand: C.pdbqt"));
        assert_eq!(info_text.matches("Elapsed time:").count(), 1);
        let expected = format!("Error in file {}: B exploded", files[1].display());
        assert!(error_text.contains(&expected), "{}", error_text);
        assert_eq!(error_text.lines().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_crash_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        let files = ligands(dir.path(), &["A.pdbqt", "B.pdbqt"]);
        let config = sample_config();

        let script = r#"case "$4" in *A.pdbqt) kill -SEGV $$;; esac; exit 0"#;
        let report = BatchRunner::new(&config, fake_unidock(script))
            .show_progress(false)
            .run(files.clone());

        assert_eq!(report.succeeded, 1);
        assert_eq!(report.skipped.len(), 1);
        let entry = &report.skipped.entries()[0];
        assert_eq!(entry.path, files[0]);
        assert!(entry.reason.contains("SIGSEGV"), "{}", entry.reason);
    }

    #[test]
    fn test_missing_executable_skips_everything() {
        let dir = tempfile::tempdir().unwrap();
        let files = ligands(dir.path(), &["A.pdbqt", "B.pdbqt", "C.pdbqt"]);
        let config = sample_config();

        let missing = DockCommand::new("dockbatch-no-such-unidock-7f3a");
        let report = BatchRunner::new(&config, missing)
            .show_progress(false)
            .run(files.clone());

        assert_eq!(report.succeeded, 0);
        assert_eq!(report.skipped.len(), 3);
        assert!(report.survivors().is_empty());
        let skipped: Vec<_> = report
            .skipped
            .entries()
            .iter()
            .map(|e| e.path.as_path())
            .collect();
        let expected: Vec<_> = files.iter().map(PathBuf::as_path).collect();
        assert_eq!(skipped, expected);
    }

    #[test]
    fn test_zero_ligands() {
        let dir = tempfile::tempdir().unwrap();
        let info_log = dir.path().join("unidock_log.txt");
        let error_log = dir.path().join("error.log");
        let config = sample_config();

        let ctx = LogContext::init(&info_log, &error_log).unwrap();
        let missing = DockCommand::new("dockbatch-no-such-unidock-7f3a");
        let report = BatchRunner::new(&config, missing)
            .show_progress(false)
            .run(Vec::new());
        ctx.close().unwrap();

        assert_eq!(report.total(), 0);
        assert!(report.skipped.is_empty());
        assert!(report.elapsed < Duration::from_secs(1));
        let info_text = fs::read_to_string(&info_log).unwrap();
        assert!(info_text.contains("Elapsed time: 0.00 seconds"));
    }

    #[test]
    fn test_dry_run_executes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let info_log = dir.path().join("unidock_log.txt");
        let error_log = dir.path().join("error.log");
        let files = ligands(dir.path(), &["A.pdbqt"]);
        let config = sample_config();

        let ctx = LogContext::init(&info_log, &error_log).unwrap();
        let missing = DockCommand::new("dockbatch-no-such-unidock-7f3a");
        let report = BatchRunner::new(&config, missing)
            .dry_run(true)
            .show_progress(false)
            .run(files);
        ctx.close().unwrap();

        assert!(report.skipped.is_empty());
        assert_eq!(report.succeeded, 0);
        let info_text = fs::read_to_string(&info_log).unwrap();
        assert!(info_text.contains("Would run: dockbatch-no-such-unidock-7f3a --receptor"));
    }

    #[test]
    fn test_summarize_uses_last_stderr_line() {
        let failure = Outcome::ToolFailure {
            code: 1,
            stderr: "loading receptor\nParse error on line 12\n\n".to_string(),
        };
        assert_eq!(summarize(&failure), "exit code 1: Parse error on line 12");
    }
}
