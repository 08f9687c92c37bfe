//! kpaths - 带权多重图上的 K 条最短无环路径枚举
//!
//! 按权重非降序惰性输出从起点到终点的简单路径（Yen 算法），
//! 每次展开复用同一棵可修复的反向最短路径树。

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod storage;
pub mod utils;
