//! # 配体清单解析器
//!
//! 读取 `ligand_list.txt`（每行一个配体路径），供重新运行时直接使用上次的幸存列表。
//!
//! ## 依赖关系
//! - 被 `commands/dock.rs` 调用（`--from-manifest`）
//! - 清单由 `batch/manifest.rs` 写出

use crate::error::{DockBatchError, Result};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// 读取清单文件，忽略空行
pub fn read_manifest(path: &Path) -> Result<Vec<PathBuf>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DockBatchError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            DockBatchError::FileReadError {
                path: path.display().to_string(),
                source: e,
            }
        }
    })?;

    let reader = BufReader::new(file);
    let mut ligands = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| DockBatchError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        ligands.push(PathBuf::from(line));
    }

    Ok(ligands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_manifest_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ligand_list.txt");
        fs::write(&path, "lig/C.pdbqt\n\nlig/A.pdbqt  \n").unwrap();

        let ligands = read_manifest(&path).unwrap();
        assert_eq!(
            ligands,
            vec![PathBuf::from("lig/C.pdbqt"), PathBuf::from("lig/A.pdbqt")]
        );
    }

    #[test]
    fn test_read_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_manifest(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, DockBatchError::FileNotFound { .. }));
    }
}
