//! # 单配体处理结果
//!
//! 定义一次对接调用的结果分类以及跳过列表。
//!
//! ## 依赖关系
//! - 被 `utils/supervisor.rs` 生成
//! - 被 `batch/runner.rs`, `batch/manifest.rs` 使用

use std::fmt;
use std::path::{Path, PathBuf};

/// 一次对接调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 退出码为 0
    Success,
    /// 程序正常结束但退出码非 0
    ToolFailure { code: i32, stderr: String },
    /// 无法启动、无法等待或被信号终止
    CrashOrException { reason: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::ToolFailure { code, .. } => write!(f, "exit code {}", code),
            Outcome::CrashOrException { reason } => write!(f, "{}", reason),
        }
    }
}

/// 被跳过的配体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLigand {
    pub path: PathBuf,
    /// 失败原因（简述）
    pub reason: String,
}

/// 跳过列表：本次运行中处理失败的配体，按失败顺序排列
#[derive(Debug, Default, Clone)]
pub struct SkipList {
    entries: Vec<SkippedLigand>,
}

impl SkipList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录失败配体，同一路径只记录一次
    pub fn record(&mut self, path: &Path, reason: impl Into<String>) {
        if self.contains(path) {
            return;
        }
        self.entries.push(SkippedLigand {
            path: path.to_path_buf(),
            reason: reason.into(),
        });
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SkippedLigand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_list_records_once() {
        let mut skip = SkipList::new();
        skip.record(Path::new("lig/B.pdbqt"), "exit code 1");
        skip.record(Path::new("lig/B.pdbqt"), "exit code 2");
        skip.record(Path::new("lig/D.pdbqt"), "terminated by signal 11 (SIGSEGV)");

        assert_eq!(skip.len(), 2);
        assert_eq!(skip.entries()[0].reason, "exit code 1");
        let paths: Vec<_> = skip.entries().iter().map(|e| e.path.as_path()).collect();
        assert_eq!(paths, vec![Path::new("lig/B.pdbqt"), Path::new("lig/D.pdbqt")]);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Success.to_string(), "success");
        let failure = Outcome::ToolFailure {
            code: 3,
            stderr: "boom".to_string(),
        };
        assert_eq!(failure.to_string(), "exit code 3");
        assert!(!failure.is_success());
    }
}
