// 核心类型系统模块
//
// 包含图查询接口和路径类型

pub mod graph;
pub mod path;

pub use graph::{EdgeDirection, Graph};
pub use path::GraphPath;
