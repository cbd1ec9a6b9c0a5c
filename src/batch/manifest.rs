//! # 配体清单重写
//!
//! 批处理结束后，若有配体被跳过，则用剩余配体重写 `ligand_list.txt`。
//! 全部成功时不触碰清单文件。
//!
//! ## 依赖关系
//! - 被 `commands/dock.rs` 调用
//! - 清单由 `parsers/manifest.rs` 读回

use crate::error::{DockBatchError, Result};
use crate::models::SkipList;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// 默认清单文件
pub const DEFAULT_MANIFEST: &str = "ligand_list.txt";

/// 重写清单；返回是否写入了文件
pub fn finalize(all_paths: &[PathBuf], skipped: &SkipList, manifest: &Path) -> Result<bool> {
    if skipped.is_empty() {
        return Ok(false);
    }

    let survivors: Vec<&PathBuf> = all_paths.iter().filter(|p| !skipped.contains(p)).collect();

    info!("Remaking ligand list file with {} ligands", survivors.len());

    let write_err = |e: std::io::Error| DockBatchError::FileWriteError {
        path: manifest.display().to_string(),
        source: e,
    };

    let mut writer = BufWriter::new(File::create(manifest).map_err(write_err)?);
    for path in &survivors {
        writeln!(writer, "{}", path.display()).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    Ok(true)
}
