use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::KspResult;

/// 应用配置，对应 TOML 文件中的 `[log]` 和 `[search]` 两节
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub search: SearchConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// flexi_logger 日志级别描述，例如 `info` 或 `kpaths=debug`
    pub level: String,
    /// 为 false 时只输出到 stderr
    pub to_file: bool,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// 默认返回的路径数
    pub k: usize,
    /// 剩余名额恰好等于最小权重候选数时直接取出这些候选
    pub bulk_shortcut: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: false,
            dir: "logs".to_string(),
            file: "kpaths".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: 10,
            bulk_shortcut: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> KspResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> KspResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::KspError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert!(!config.log.to_file);
        assert_eq!(config.search.k, 10);
        assert!(config.search.bulk_shortcut);
    }

    #[test]
    fn test_config_load_save() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("kpaths.toml");

        let mut config = Config::default();
        config.search.k = 3;
        config.log.level = "debug".to_string();
        config.save(&path).expect("Failed to save config");

        let loaded = Config::load(&path).expect("Failed to load config");
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_config_partial_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[search]\nk = 7\n")
            .expect("Failed to write TOML content to temporary file");

        let loaded = Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(loaded.search.k, 7);
        assert!(loaded.search.bulk_shortcut);
        assert_eq!(loaded.log, LogConfig::default());
    }

    #[test]
    fn test_config_invalid_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[search]\nk = \"many\"\n")
            .expect("Failed to write TOML content to temporary file");

        let err = Config::load(temp_file.path()).err();
        assert!(matches!(err, Some(KspError::Config(_))));
    }

    #[test]
    fn test_config_missing_file() {
        let err = Config::load("/nonexistent/kpaths.toml").err();
        assert!(matches!(err, Some(KspError::Io(_))));
    }
}
