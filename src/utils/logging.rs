//! # 日志上下文
//!
//! 基于 `tracing-subscriber` 构造两路文件日志：
//! - 信息日志：记录所有 INFO 及以上事件（每个配体一行、耗时汇总等）
//! - 错误日志：只接收 ERROR 事件
//!
//! 日志上下文在批处理开始前显式创建，结束后调用 [`LogContext::close`] 关闭。
//! 订阅者只对创建它的线程生效，不设置全局默认值。
//!
//! ## 依赖关系
//! - 被 `commands/dock.rs` 创建
//! - 使用 `tracing`, `tracing-subscriber`

use crate::error::{DockBatchError, Result};

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::filter::{FilterExt, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

/// 默认信息日志文件
pub const DEFAULT_INFO_LOG: &str = "unidock_log.txt";
/// 默认错误日志文件
pub const DEFAULT_ERROR_LOG: &str = "error.log";

/// 两路文件日志的生命周期句柄
pub struct LogContext {
    info_path: PathBuf,
    error_path: PathBuf,
    info_file: Arc<File>,
    error_file: Arc<File>,
    guard: Option<DefaultGuard>,
}

impl LogContext {
    /// 打开（追加）日志文件并为当前线程安装订阅者
    pub fn init(info_path: &Path, error_path: &Path) -> Result<Self> {
        let info_file = Arc::new(open_append(info_path)?);
        let error_file = Arc::new(open_append(error_path)?);

        // DOCKBATCH_LOG 只能追加 DEBUG/TRACE 事件，INFO 及以上总是写入
        let info_filter = EnvFilter::builder()
            .with_env_var("DOCKBATCH_LOG")
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
            .or(LevelFilter::INFO);

        let info_layer = fmt::layer()
            .with_writer(info_file.clone())
            .with_ansi(false)
            .with_target(false)
            .with_filter(info_filter);

        let error_layer = fmt::layer()
            .with_writer(error_file.clone())
            .with_ansi(false)
            .with_target(false)
            .with_filter(LevelFilter::ERROR);

        let subscriber = Registry::default().with(info_layer).with(error_layer);
        let guard = tracing::subscriber::set_default(subscriber);

        Ok(Self {
            info_path: info_path.to_path_buf(),
            error_path: error_path.to_path_buf(),
            info_file,
            error_file,
            guard: Some(guard),
        })
    }

    /// 卸载订阅者并刷新两个日志文件
    pub fn close(mut self) -> Result<()> {
        self.guard.take();

        for (file, path) in [
            (&self.info_file, &self.info_path),
            (&self.error_file, &self.error_path),
        ] {
            (&**file)
                .flush()
                .and_then(|_| file.sync_data())
                .map_err(|e| DockBatchError::FileWriteError {
                    path: path.display().to_string(),
                    source: e,
                })?;
        }

        Ok(())
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            DockBatchError::LoggingSetup(format!("cannot open '{}': {}", path.display(), e))
        })
}
