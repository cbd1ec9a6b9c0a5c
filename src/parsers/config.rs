//! # 对接配置解析器
//!
//! 读取 JSON 格式的 `config.json`。
//!
//! ## 格式
//! ```json
//! {
//!   "receptor": "receptor.pdbqt", "dir": "results",
//!   "search_mode": "balance", "scoring": "vina",
//!   "center_x": 10.5, "center_y": -3.0, "center_z": 22.0,
//!   "size_x": 20, "size_y": 20, "size_z": 20,
//!   "num_modes": 9
//! }
//! ```
//!
//! 所有键都是必需的，不提供默认值。
//!
//! ## 依赖关系
//! - 被 `commands/dock.rs` 调用
//! - 使用 `models/config.rs`

use crate::error::{DockBatchError, Result};
use crate::models::{DockingConfig, REQUIRED_KEYS};

use serde_json::Value;
use std::fs;
use std::path::Path;

/// 加载配置文件
pub fn load_config(path: &Path) -> Result<DockingConfig> {
    if !path.exists() {
        return Err(DockBatchError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| DockBatchError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_config(&content, path)
}

/// 解析配置文件内容
pub fn parse_config(content: &str, path: &Path) -> Result<DockingConfig> {
    let value: Value = serde_json::from_str(content).map_err(|e| DockBatchError::ConfigParse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let object = value.as_object().ok_or_else(|| DockBatchError::ConfigParse {
        path: path.display().to_string(),
        reason: "top-level value must be a JSON object".to_string(),
    })?;

    // 先按名称检查缺失的键，再做类型反序列化
    if let Some(key) = REQUIRED_KEYS.iter().find(|k| !object.contains_key(**k)) {
        return Err(DockBatchError::MissingConfigKey {
            path: path.display().to_string(),
            key: key.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| DockBatchError::ConfigParse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
