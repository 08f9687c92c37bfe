//! 算法模块
//!
//! 包含最短路径与 K 条最短无环路径算法实现

pub mod candidate_queue;
pub mod dijkstra;
pub mod masked_graph;
pub mod shortest_path_tree;
pub mod types;
pub mod yen_iterator;
pub mod yen_k_shortest;

// 重新导出常用算法结构体
pub use candidate_queue::{Candidate, CandidateQueue};
pub use dijkstra::Dijkstra;
pub use masked_graph::{Mask, MaskedGraph};
pub use shortest_path_tree::ShortestPathTree;
pub use types::{AlgorithmStats, DistanceNode, TreeEntry};
pub use yen_iterator::YenShortestPathIterator;
pub use yen_k_shortest::YenKShortestPath;
