//! 图存储模块
//!
//! 提供路径算法使用的内存多重图实现和随机图生成器

pub mod generator;
pub mod multigraph;

pub use generator::GnpRandomGraph;
pub use multigraph::{EdgeId, MultiGraph};
