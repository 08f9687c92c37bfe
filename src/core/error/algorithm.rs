//! 路径算法错误类型
//!
//! 只有调用方违反契约时才会产生，算法本身是确定性的，没有可重试的失败

use thiserror::Error;

/// 算法操作结果类型
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// 路径算法错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("无效参数: {0}")]
    InvalidArgument(String),
    #[error("没有更多路径")]
    Exhausted,
}

impl AlgorithmError {
    pub fn missing_source<V: std::fmt::Debug>(source: &V) -> Self {
        AlgorithmError::InvalidArgument(format!("图中不包含起点 {:?}", source))
    }

    pub fn missing_sink<V: std::fmt::Debug>(sink: &V) -> Self {
        AlgorithmError::InvalidArgument(format!("图中不包含终点 {:?}", sink))
    }
}
