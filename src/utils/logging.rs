// 命令行程序的日志输出
//
// 默认写 stderr；`[log] to_file = true` 时改为按大小轮转的异步文件日志，
// 这种情况下退出前必须调用 `shutdown` 把缓冲写完

use crate::config::LogConfig;
use crate::core::error::KspResult;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 当前生效的 flexi_logger 句柄，未初始化时为 None
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 按 `LogConfig` 启动日志
///
/// `level` 是 flexi_logger 的级别描述，例如 `info` 或 `kpaths::services=trace`，
/// 写错时返回 `KspError::Config`。文件日志保存在 `dir/file*.log`，
/// 超过 `max_file_size` 字节后轮转，最多保留 `max_files` 个旧文件。
///
/// # Examples
/// ```
/// use kpaths::config::LogConfig;
/// use kpaths::utils::logging;
///
/// let config = LogConfig::default();
/// logging::init(&config).expect("日志初始化失败");
/// logging::shutdown();
/// ```
pub fn init(config: &LogConfig) -> KspResult<()> {
    let logger = Logger::try_with_str(&config.level)?;

    let handle = if config.to_file {
        logger
            .log_to_file(
                FileSpec::default()
                    .basename(&config.file)
                    .directory(&config.dir),
            )
            .rotate(
                Criterion::Size(config.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.max_files),
            )
            .write_mode(WriteMode::Async)
            .append()
            .start()?
    } else {
        logger.log_to_stderr().start()?
    };

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    if config.to_file {
        log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    }
    Ok(())
}

/// 写完缓冲中的日志并释放句柄；未初始化时什么都不做
pub fn shutdown() {
    let handle = LOGGER_HANDLE.lock().ok().and_then(|mut guard| guard.take());
    if let Some(handle) = handle {
        handle.flush();
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE.lock().is_ok_and(|guard| guard.is_some())
}
