//! 存储模块
//!
//! 图文件的读写

pub mod graph_file;

pub use graph_file::{load_graph, save_graph, EdgeDocument, GraphDocument};
