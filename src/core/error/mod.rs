//! 统一错误处理系统 for kpaths
//!
//! ## 设计理念
//!
//! 1. **分层错误**：图模型错误 (`GraphError`) 与算法错误 (`AlgorithmError`)
//!    各自独立，通过 `#[from]` 自动汇入统一的 `KspError`
//! 2. **外部错误**：IO、序列化、配置等外部错误转换为字符串，降低模块耦合
//! 3. **统一接口**：`KspResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

pub mod algorithm;
pub mod graph;

pub use algorithm::{AlgorithmError, AlgorithmResult};
pub use graph::{GraphError, GraphResult};

/// 统一的错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KspError {
    #[error("图错误: {0}")]
    Graph(#[from] GraphError),

    #[error("算法错误: {0}")]
    Algorithm(#[from] AlgorithmError),

    #[error("IO错误: {0}")]
    Io(String),

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("配置错误: {0}")]
    Config(String),
}

/// 统一的结果类型
pub type KspResult<T> = Result<T, KspError>;

impl KspError {
    /// 是否为迭代器耗尽错误
    pub fn is_exhausted(&self) -> bool {
        matches!(self, KspError::Algorithm(AlgorithmError::Exhausted))
    }
}

// ==================== 外部错误转换实现 ====================

impl From<std::io::Error> for KspError {
    fn from(err: std::io::Error) -> Self {
        KspError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KspError {
    fn from(err: serde_json::Error) -> Self {
        KspError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for KspError {
    fn from(err: toml::de::Error) -> Self {
        KspError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for KspError {
    fn from(err: toml::ser::Error) -> Self {
        KspError::Config(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for KspError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        KspError::Config(err.to_string())
    }
}
