//! # 子进程监管执行
//!
//! 同步运行外部对接程序，捕获 stdout/stderr 与退出状态，并将其归类为 [`Outcome`]。
//!
//! 子进程的任何异常结束（无法启动、等待失败、被 SIGSEGV 等信号终止）
//! 都转换为 `Outcome::CrashOrException` 返回给调用方，不会影响本进程。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `models/outcome.rs`

use crate::models::Outcome;

use std::io;
use std::process::{Command, ExitStatus, Output, Stdio};

/// 一次受监管执行的结果
#[derive(Debug, Clone)]
pub struct Execution {
    pub outcome: Outcome,
    /// 子进程标准输出（无法启动时为空）
    pub stdout: String,
}

/// 运行命令直到结束，不向调用方传播任何错误
pub fn supervise(mut cmd: Command) -> Execution {
    let program = cmd.get_program().to_string_lossy().into_owned();

    let result = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    classify(&program, result)
}

/// 将 `Command::output()` 的结果归类
pub fn classify(program: &str, result: io::Result<Output>) -> Execution {
    let output = match result {
        Ok(output) => output,
        Err(e) => {
            let reason = if e.kind() == io::ErrorKind::NotFound {
                format!("failed to start '{}': executable not found", program)
            } else {
                format!("failed to start '{}': {}", program, e)
            };
            return Execution {
                outcome: Outcome::CrashOrException { reason },
                stdout: String::new(),
            };
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    let outcome = if output.status.success() {
        Outcome::Success
    } else {
        match output.status.code() {
            Some(code) => Outcome::ToolFailure { code, stderr },
            None => Outcome::CrashOrException {
                reason: describe_abnormal_exit(output.status),
            },
        }
    };

    Execution { outcome, stdout }
}

/// 描述没有退出码的进程结束方式
#[cfg(unix)]
fn describe_abnormal_exit(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;

    match status.signal() {
        Some(sig) => {
            let core = if status.core_dumped() {
                " (core dumped)"
            } else {
                ""
            };
            match signal_name(sig) {
                Some(name) => format!("terminated by signal {} ({}){}", sig, name, core),
                None => format!("terminated by signal {}{}", sig, core),
            }
        }
        None => format!("terminated abnormally: {}", status),
    }
}

#[cfg(not(unix))]
fn describe_abnormal_exit(status: ExitStatus) -> String {
    format!("terminated abnormally: {}", status)
}

/// 常见致命信号名（Linux 编号）
#[cfg(unix)]
fn signal_name(sig: i32) -> Option<&'static str> {
    let name = match sig {
        1 => "SIGHUP",
        2 => "SIGINT",
        3 => "SIGQUIT",
        4 => "SIGILL",
        6 => "SIGABRT",
        7 => "SIGBUS",
        8 => "SIGFPE",
        9 => "SIGKILL",
        11 => "SIGSEGV",
        13 => "SIGPIPE",
        15 => "SIGTERM",
        _ => return None,
    };
    Some(name)
}
