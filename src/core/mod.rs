pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{
    AlgorithmError, AlgorithmResult, GraphError, GraphResult, KspError, KspResult,
};

// 核心数据类型
pub use types::{EdgeDirection, Graph, GraphPath};
