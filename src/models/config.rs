//! # 对接配置数据模型
//!
//! 定义从 `config.json` 读取的对接参数。
//!
//! ## 依赖关系
//! - 被 `parsers/config.rs` 反序列化生成
//! - 被 `utils/unidock.rs` 用于构造命令行

use serde::Deserialize;
use std::path::PathBuf;

/// 配置文件中必须出现的键（按检查顺序）
pub const REQUIRED_KEYS: [&str; 11] = [
    "receptor",
    "dir",
    "search_mode",
    "scoring",
    "center_x",
    "center_y",
    "center_z",
    "size_x",
    "size_y",
    "size_z",
    "num_modes",
];

/// 对接盒子（中心坐标与尺寸，单位 Å）
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SearchBox {
    pub center_x: f64,
    pub center_y: f64,
    pub center_z: f64,
    pub size_x: f64,
    pub size_y: f64,
    pub size_z: f64,
}

impl SearchBox {
    /// 中心坐标
    pub fn center(&self) -> [f64; 3] {
        [self.center_x, self.center_y, self.center_z]
    }

    /// 盒子尺寸
    pub fn size(&self) -> [f64; 3] {
        [self.size_x, self.size_y, self.size_z]
    }
}

/// 对接配置，加载后不再修改
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DockingConfig {
    /// 受体结构文件
    pub receptor: PathBuf,
    /// 结果输出目录
    pub dir: PathBuf,
    /// 搜索模式 (fast / balance / detail)
    pub search_mode: String,
    /// 打分函数 (vina / vinardo / ad4)
    pub scoring: String,
    #[serde(flatten)]
    pub search_box: SearchBox,
    /// 输出构象数
    pub num_modes: u32,
}
