//! # 配体文件收集器
//!
//! 根据目录和文件名模式收集待对接的配体列表。
//!
//! ## 功能
//! - glob 模式匹配（逗号分隔多模式）
//! - 可选递归目录搜索
//! - 结果按文件名排序，保证每次运行顺序一致
//!
//! ## 依赖关系
//! - 被 `commands/dock.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{DockBatchError, Result};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认配体目录
pub const DEFAULT_LIGAND_DIR: &str = "ligands";
/// 默认配体文件模式
pub const DEFAULT_PATTERN: &str = "*.pdbqt";

/// 配体文件收集器
pub struct LigandCollector {
    /// 配体目录
    dir: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl LigandCollector {
    /// 创建新的收集器，默认匹配 `*.pdbqt`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let patterns = Pattern::new(DEFAULT_PATTERN).into_iter().collect();
        Self {
            dir: dir.into(),
            patterns,
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    DockBatchError::InvalidArgument(format!("invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if patterns.is_empty() {
            return Err(DockBatchError::InvalidArgument(format!(
                "empty ligand pattern '{}'",
                pattern
            )));
        }

        self.patterns = patterns;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 收集所有匹配的配体文件；目录不存在时返回空列表
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.dir.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        // 跟随符号链接：配体目录常由指向共享存储的链接组成
        WalkDir::new(&self.dir)
            .follow_links(true)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        // 与 shell glob 一致：`*` 不匹配以 `.` 开头的隐藏文件
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        self.patterns
            .iter()
            .any(|p| p.matches_with(filename, options))
    }
}
