//! # 批量对接命令实现
//!
//! ## 流程
//! 1. 加载配置（失败即终止，不会调用对接程序）
//! 2. 建立日志上下文
//! 3. 收集配体（扫描目录或读取清单）
//! 4. 顺序对接，记录跳过列表
//! 5. 有跳过时重写清单
//! 6. 打印汇总并关闭日志
//!
//! ## 依赖关系
//! - 使用 `cli/dock.rs` 定义的参数
//! - 使用 `parsers/`, `batch/`, `utils/`

use crate::batch::{self, BatchReport, BatchRunner, LigandCollector};
use crate::cli::dock::DockArgs;
use crate::error::Result;
use crate::models::DockingConfig;
use crate::parsers;
use crate::utils::logging::LogContext;
use crate::utils::output;
use crate::utils::unidock::DockCommand;

use std::path::PathBuf;
use tracing::warn;

/// 执行批量对接
pub fn execute(args: DockArgs) -> Result<()> {
    output::print_header("Batch Docking");

    let config = parsers::load_config(&args.config)?;
    output::print_info(&format!(
        "Receptor '{}', results in '{}'",
        config.receptor.display(),
        config.dir.display()
    ));

    let logs = LogContext::init(&args.log_file, &args.error_log)?;

    let report = match run_batch(&args, &config) {
        Ok(report) => report,
        Err(e) => {
            warn_on_close_error(logs.close());
            return Err(e);
        }
    };

    let finalized = batch::finalize(&report.ligands, &report.skipped, &args.manifest);
    logs.close()?;
    let rewritten = finalized?;

    print_summary(&report, rewritten, &args);
    Ok(())
}

/// 收集配体并执行对接循环
fn run_batch(args: &DockArgs, config: &DockingConfig) -> Result<BatchReport> {
    let ligands = collect_ligands(args)?;
    output::print_info(&format!("Found {} ligands", ligands.len()));

    let command = match &args.launcher {
        Some(launcher) => DockCommand::with_launcher(launcher, &args.executable),
        None => DockCommand::new(&args.executable),
    };

    let runner = BatchRunner::new(config, command)
        .dry_run(args.dry_run)
        .show_progress(!args.no_progress);

    Ok(runner.run(ligands))
}

/// 配体来源：目录扫描或上次运行的清单
fn collect_ligands(args: &DockArgs) -> Result<Vec<PathBuf>> {
    if args.from_manifest {
        return parsers::read_manifest(&args.manifest);
    }

    let collector = LigandCollector::new(&args.ligand_dir)
        .with_pattern(&args.pattern)?
        .recursive(args.recursive);

    if !collector.dir().is_dir() {
        warn!("Ligand directory not found: {}", collector.dir().display());
        output::print_warning(&format!(
            "Ligand directory '{}' not found",
            collector.dir().display()
        ));
    }

    Ok(collector.collect())
}

/// 致命错误路径上关闭日志；关闭失败只提示，不覆盖原错误
fn warn_on_close_error(result: Result<()>) -> bool {
    match result {
        Ok(()) => false,
        Err(e) => {
            output::print_warning(&format!("Failed to close log files: {}", e));
            true
        }
    }
}

fn print_summary(report: &BatchReport, rewritten: bool, args: &DockArgs) {
    output::print_separator();
    output::print_skip_table(&report.skipped);

    if rewritten {
        output::print_info(&format!(
            "Rewrote '{}' with {} ligands",
            args.manifest.display(),
            report.survivors().len()
        ));
    }

    output::print_done(&format!(
        "Processed {} ligands in {:.2} s: {} succeeded, {} skipped",
        report.total(),
        report.elapsed.as_secs_f64(),
        report.succeeded,
        report.skipped.len()
    ));
}
