//! K 条最短无环路径
//!
//! 在 [`YenShortestPathIterator`] 之上一次性取出前 k 条路径。

use crate::core::error::AlgorithmResult;
use crate::core::types::graph::Graph;
use crate::core::types::path::GraphPath;

use super::yen_iterator::YenShortestPathIterator;

/// K 条最短路径算法结构体
pub struct YenKShortestPath<'g, G: Graph> {
    graph: &'g G,
    bulk_shortcut: bool,
}

impl<'g, G: Graph> YenKShortestPath<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            bulk_shortcut: true,
        }
    }

    /// 设置是否在剩余名额恰好等于最小权重候选数量时直接取出这些候选
    pub fn with_bulk_shortcut(mut self, enabled: bool) -> Self {
        self.bulk_shortcut = enabled;
        self
    }

    /// 查找从 `source` 到 `sink` 的至多 `k` 条最短无环路径
    ///
    /// # 参数
    /// - `source`: 起点
    /// - `sink`: 终点
    /// - `k`: 最多返回的路径数
    ///
    /// # 返回
    /// 按权重非降序排列的路径；起点或终点不在图中时返回 `InvalidArgument`
    pub fn get_paths(
        &self,
        source: &G::Vertex,
        sink: &G::Vertex,
        k: usize,
    ) -> AlgorithmResult<Vec<GraphPath<G::Vertex, G::Edge>>> {
        let mut iterator = YenShortestPathIterator::new(self.graph, source.clone(), sink.clone())?;
        let mut paths = Vec::with_capacity(k.min(64));

        for i in 0..k {
            if !iterator.has_next() {
                break;
            }
            let remaining = k - i;
            if self.bulk_shortcut && iterator.number_of_candidates_with_minimum_weight() == remaining {
                log::debug!("剩余 {} 条路径权重相同，直接从候选队列取出", remaining);
                paths.extend(iterator.drain_minimum(remaining));
                break;
            }
            paths.push(iterator.next_path()?);
        }

        log::info!(
            "{:?} -> {:?}: 请求 {} 条路径，返回 {} 条",
            source,
            sink,
            k,
            paths.len()
        );
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AlgorithmError;
    use crate::graph::MultiGraph;

    fn fan() -> MultiGraph<u32> {
        // 1 -> {2, 3, 4} -> 5，三条路径权重都为 2
        let mut graph = MultiGraph::new_directed();
        for mid in [2, 3, 4] {
            graph.add_edge_with_vertices(1, mid, 1.0).expect("Edge should be added in test");
            graph.add_edge_with_vertices(mid, 5, 1.0).expect("Edge should be added in test");
        }
        graph
    }

    #[test]
    fn test_k_zero() {
        let graph = fan();
        let paths = YenKShortestPath::new(&graph).get_paths(&1, &5, 0).expect("Query should succeed in test");
        assert!(paths.is_empty());
    }

    #[test]
    fn test_k_larger_than_path_count() {
        let graph = fan();
        let paths = YenKShortestPath::new(&graph).get_paths(&1, &5, 10).expect("Query should succeed in test");
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.weight() == 2.0));
    }

    #[test]
    fn test_bulk_shortcut_matches_plain_iteration() {
        let graph = fan();
        for k in 1..=3 {
            let fast = YenKShortestPath::new(&graph).get_paths(&1, &5, k).expect("Query should succeed in test");
            let slow = YenKShortestPath::new(&graph)
                .with_bulk_shortcut(false)
                .get_paths(&1, &5, k)
                .expect("Query should succeed in test");
            assert_eq!(fast.len(), k);
            assert_eq!(slow.len(), k);
            for (a, b) in fast.iter().zip(&slow) {
                assert_eq!(a.weight(), b.weight());
            }
        }
    }

    #[test]
    fn test_invalid_vertex() {
        let graph = fan();
        let err = YenKShortestPath::new(&graph).get_paths(&9, &5, 1).err();
        assert!(matches!(err, Some(AlgorithmError::InvalidArgument(_))));
    }
}
