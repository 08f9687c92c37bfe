//! Yen 无环路径迭代器
//!
//! 按权重非降序惰性枚举从起点到终点的简单路径。每输出一条路径，
//! 就在该路径上计算所有偏离候选并放入候选队列：
//!
//! 1. 隐藏当前路径上除终点外的所有顶点和边，以及在偏离点之前与当前路径
//!    顶点和边都逐位置相同的已输出路径在偏离点处使用的边；
//! 2. 在掩码视图上构建以终点为根的反向最短路径树；
//! 3. 从倒数第二个顶点向偏离点回溯，逐个恢复顶点和边并修复最短路径树，
//!    每个能到达终点的顶点都产生一条新的候选路径。

use crate::core::error::{AlgorithmError, AlgorithmResult};
use crate::core::types::graph::Graph;
use crate::core::types::path::GraphPath;

use super::candidate_queue::{Candidate, CandidateQueue};
use super::dijkstra::Dijkstra;
use super::masked_graph::Mask;
use super::shortest_path_tree::ShortestPathTree;
use super::types::AlgorithmStats;

/// Yen 无环路径迭代器
///
/// 迭代器借用图而不修改它，多个迭代器可以同时在同一张图上运行。
pub struct YenShortestPathIterator<'g, G: Graph> {
    graph: &'g G,
    source: G::Vertex,
    sink: G::Vertex,
    results: Vec<GraphPath<G::Vertex, G::Edge>>,
    candidates: CandidateQueue<G::Vertex, G::Edge>,
    stats: AlgorithmStats,
}

impl<'g, G: Graph> YenShortestPathIterator<'g, G> {
    /// 创建迭代器
    ///
    /// 起点或终点不在图中时返回 `InvalidArgument`；两点不连通时迭代器直接耗尽。
    pub fn new(graph: &'g G, source: G::Vertex, sink: G::Vertex) -> AlgorithmResult<Self> {
        if !graph.contains_vertex(&source) {
            return Err(AlgorithmError::missing_source(&source));
        }
        if !graph.contains_vertex(&sink) {
            return Err(AlgorithmError::missing_sink(&sink));
        }

        let mut candidates = CandidateQueue::new();
        let mut stats = AlgorithmStats::new();
        if let Some(shortest) = Dijkstra::shortest_path(graph, &source, &sink) {
            candidates.push(Candidate::new(shortest, 0));
            stats.increment_candidates_generated();
        } else {
            log::debug!("{:?} 与 {:?} 之间不存在路径", source, sink);
        }

        Ok(Self {
            graph,
            source,
            sink,
            results: Vec::new(),
            candidates,
            stats,
        })
    }

    pub fn source(&self) -> &G::Vertex {
        &self.source
    }

    pub fn sink(&self) -> &G::Vertex {
        &self.sink
    }

    pub fn has_next(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// 输出下一条路径，队列为空时返回 `Exhausted`
    pub fn next_path(&mut self) -> AlgorithmResult<GraphPath<G::Vertex, G::Edge>> {
        let candidate = self.candidates.pop().ok_or(AlgorithmError::Exhausted)?;
        self.results.push(candidate.path.clone());
        self.stats.increment_paths_emitted();
        self.add_deviations(&candidate);
        Ok(candidate.path)
    }

    /// 当前与最小权重相同的候选数量
    pub fn number_of_candidates_with_minimum_weight(&self) -> usize {
        self.candidates.min_weight_frequency()
    }

    /// 结束迭代，直接从队列中取出最多 `count` 条最小权重候选
    ///
    /// 取出的候选不会再展开，因此该方法消耗迭代器。
    /// 只有在这些候选的权重都相同时结果才与逐条调用 `next_path` 等价。
    pub fn drain_minimum(mut self, count: usize) -> Vec<GraphPath<G::Vertex, G::Edge>> {
        std::iter::from_fn(|| self.candidates.pop())
            .take(count)
            .map(|candidate| candidate.path)
            .collect()
    }

    /// 已输出的路径
    pub fn results(&self) -> &[GraphPath<G::Vertex, G::Edge>] {
        &self.results
    }

    pub fn pending_candidates(&self) -> usize {
        self.candidates.len()
    }

    pub fn stats(&self) -> &AlgorithmStats {
        &self.stats
    }

    fn add_deviations(&mut self, candidate: &Candidate<G::Vertex, G::Edge>) {
        let path = &candidate.path;
        let vertices = path.vertices();
        let edges = path.edges();
        let deviation_index = candidate.deviation_index;

        if vertices.len() < deviation_index + 2 {
            return;
        }

        let mask = self.masked_elements(path, deviation_index);
        let mut tree = ShortestPathTree::build(self.graph, mask, self.sink.clone());
        self.stats.increment_trees_built();

        let before = self.candidates.len();
        for i in (deviation_index..vertices.len() - 1).rev() {
            let recover = &vertices[i];
            self.stats.increment_spur_attempts();

            tree.recover_vertex(recover);
            tree.correct_forward(recover);

            if let Some(spur) = tree.path_to_root(recover) {
                tree.correct_backward(recover);

                let spliced = self.splice(path, i, spur);
                log::trace!(
                    "新候选路径: 偏离点 {:?}, 权重 {}",
                    recover,
                    spliced.weight()
                );
                self.candidates.push(Candidate::new(spliced, i));
                self.stats.increment_candidates_generated();
            }

            let edge = edges[i];
            tree.recover_edge(edge);
            tree.relax_through(recover, edge, &vertices[i + 1]);
        }

        log::debug!(
            "展开第 {} 条路径: 偏离点索引 {}, 新增候选 {}, 队列长度 {}",
            self.results.len(),
            deviation_index,
            self.candidates.len() - before,
            self.candidates.len()
        );
    }

    /// 计算展开 `path` 时需要隐藏的顶点和边
    fn masked_elements(
        &self,
        path: &GraphPath<G::Vertex, G::Edge>,
        deviation_index: usize,
    ) -> Mask<G::Vertex, G::Edge> {
        let vertices = path.vertices();
        let edges = path.edges();
        let mut mask = Mask::new();

        for i in 0..vertices.len() - 1 {
            mask.hide_vertex(vertices[i].clone());
            mask.hide_edge(edges[i]);
        }

        // 最后一条结果就是当前路径本身，已经隐藏过。
        // 顶点前缀与边前缀都逐位相同的结果才共享偏离点之前的部分
        let prefix_vertices = &vertices[..=deviation_index];
        let prefix_edges = &edges[..deviation_index];
        for result in &self.results[..self.results.len().saturating_sub(1)] {
            let result_vertices = result.vertices();
            if result_vertices.len() <= deviation_index + 1
                || &result_vertices[..=deviation_index] != prefix_vertices
                || &result.edges()[..deviation_index] != prefix_edges
            {
                continue;
            }
            mask.hide_edge(result.edges()[deviation_index]);
        }

        mask
    }

    /// 拼接 `path` 在 `index` 之前的部分与从该顶点出发的偏离路径
    fn splice(
        &self,
        path: &GraphPath<G::Vertex, G::Edge>,
        index: usize,
        spur: GraphPath<G::Vertex, G::Edge>,
    ) -> GraphPath<G::Vertex, G::Edge> {
        let mut vertices = path.vertices()[..index].to_vec();
        let mut edges = path.edges()[..index].to_vec();

        let mut weight = 0.0;
        for &edge in &edges {
            weight += self.graph.edge_weight(edge);
        }

        let spur_weight = spur.weight();
        let (spur_vertices, spur_edges, _) = spur.into_parts();
        vertices.extend(spur_vertices);
        edges.extend(spur_edges);

        GraphPath::new(vertices, edges, weight + spur_weight)
    }
}

impl<G: Graph> Iterator for YenShortestPathIterator<'_, G> {
    type Item = GraphPath<G::Vertex, G::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_path().ok()
    }
}
