//! 图模型错误类型
//!
//! 涵盖图构建和查询过程中的错误

use thiserror::Error;

/// 图操作结果类型
pub type GraphResult<T> = Result<T, GraphError>;

/// 图模型错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),
    #[error("边不存在: {0}")]
    EdgeNotFound(String),
    #[error("无效的边权重 {weight}: {reason}")]
    InvalidWeight { weight: f64, reason: String },
    #[error("无效路径: {0}")]
    InvalidPath(String),
}

impl GraphError {
    /// 校验边权重：必须为非负有限数
    pub fn check_weight(weight: f64) -> GraphResult<f64> {
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight {
                weight,
                reason: "权重不能为 NaN".to_string(),
            });
        }
        if weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                weight,
                reason: "不支持负权边".to_string(),
            });
        }
        // -0.0 与 0.0 统一，保证按位比较权重时一致
        Ok(weight + 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_weight() {
        assert_eq!(GraphError::check_weight(1.5), Ok(1.5));
        assert_eq!(GraphError::check_weight(-0.0).map(f64::to_bits), Ok(0.0f64.to_bits()));
        assert!(GraphError::check_weight(-1.0).is_err());
        assert!(GraphError::check_weight(f64::NAN).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = GraphError::VertexNotFound("42".to_string());
        assert_eq!(err.to_string(), "顶点不存在: 42");
    }
}
