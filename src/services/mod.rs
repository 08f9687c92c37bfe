//! 服务层模块
//!
//! 包含路径搜索算法

pub mod algorithm;

// 重新导出常用服务
pub use algorithm::*;
