//! 可修复的反向最短路径树
//!
//! 树以终点为根，记录掩码视图中每个顶点到根的最短距离以及通往根的下一条边。
//! 构建之后可以逐个恢复被隐藏的顶点和边，并只在受影响的范围内修正距离，
//! 而不必重新运行完整的 Dijkstra。

use std::collections::{HashMap, VecDeque};

use crate::core::types::graph::Graph;
use crate::core::types::path::GraphPath;

use super::dijkstra::Dijkstra;
use super::masked_graph::{Mask, MaskedGraph};
use super::types::TreeEntry;

fn distance_of<V: std::hash::Hash + Eq, E>(entries: &HashMap<V, TreeEntry<E>>, vertex: &V) -> f64 {
    entries
        .get(vertex)
        .map(|entry| entry.distance)
        .unwrap_or(f64::INFINITY)
}

/// 以终点为根的反向最短路径树
pub struct ShortestPathTree<'g, G: Graph> {
    graph: &'g G,
    mask: Mask<G::Vertex, G::Edge>,
    root: G::Vertex,
    entries: HashMap<G::Vertex, TreeEntry<G::Edge>>,
}

impl<'g, G: Graph> ShortestPathTree<'g, G> {
    /// 在 `mask` 隐藏后的视图上构建树，树接管 `mask` 的所有权
    pub fn build(graph: &'g G, mask: Mask<G::Vertex, G::Edge>, root: G::Vertex) -> Self {
        let entries = Dijkstra::reverse_tree(&MaskedGraph::new(graph, &mask), &root);
        Self {
            graph,
            mask,
            root,
            entries,
        }
    }

    pub fn root(&self) -> &G::Vertex {
        &self.root
    }

    pub fn mask(&self) -> &Mask<G::Vertex, G::Edge> {
        &self.mask
    }

    /// 顶点到根的当前距离，不可达为无穷大
    pub fn distance(&self, vertex: &G::Vertex) -> f64 {
        distance_of(&self.entries, vertex)
    }

    /// 使顶点重新可见，不会立即修正距离
    pub fn recover_vertex(&mut self, vertex: &G::Vertex) {
        self.mask.recover_vertex(vertex);
    }

    /// 使边重新可见，不会立即修正距离
    pub fn recover_edge(&mut self, edge: G::Edge) {
        self.mask.recover_edge(&edge);
    }

    /// 扫描顶点的可见出边，用后继的距离修正该顶点自身的距离
    ///
    /// 只修正 `vertex` 本身，不向其前驱传播。
    pub fn correct_forward(&mut self, vertex: &G::Vertex) {
        self.entries
            .entry(vertex.clone())
            .or_insert_with(TreeEntry::unreachable);

        let view = MaskedGraph::new(self.graph, &self.mask);
        for edge in view.outgoing_edges(vertex) {
            let successor = view.opposite(edge, vertex);
            if successor == vertex {
                continue;
            }
            let updated = distance_of(&self.entries, successor) + view.edge_weight(edge);
            if distance_of(&self.entries, vertex) > updated {
                self.entries.insert(
                    vertex.clone(),
                    TreeEntry {
                        distance: updated,
                        edge: Some(edge),
                    },
                );
            }
        }
    }

    /// 将顶点改进后的距离沿入边向前驱广度优先传播，直到不再有改进
    pub fn correct_backward(&mut self, vertex: &G::Vertex) {
        let view = MaskedGraph::new(self.graph, &self.mask);
        let mut queue = VecDeque::new();
        queue.push_back(vertex.clone());

        while let Some(current) = queue.pop_front() {
            let current_distance = distance_of(&self.entries, &current);

            for edge in view.incoming_edges(&current) {
                let predecessor = view.opposite(edge, &current);
                if predecessor == &current {
                    continue;
                }
                let updated = current_distance + view.edge_weight(edge);
                if distance_of(&self.entries, predecessor) > updated {
                    self.entries.insert(
                        predecessor.clone(),
                        TreeEntry {
                            distance: updated,
                            edge: Some(edge),
                        },
                    );
                    queue.push_back(predecessor.clone());
                }
            }
        }
    }

    /// 经由指定边到达 `successor` 来松弛 `vertex`
    ///
    /// 距离得到改进时更新该顶点并向前驱传播，返回是否改进
    pub fn relax_through(&mut self, vertex: &G::Vertex, edge: G::Edge, successor: &G::Vertex) -> bool {
        let updated = self.graph.edge_weight(edge) + self.distance(successor);
        if self.distance(vertex) > updated {
            self.entries.insert(
                vertex.clone(),
                TreeEntry {
                    distance: updated,
                    edge: Some(edge),
                },
            );
            self.correct_backward(vertex);
            true
        } else {
            false
        }
    }

    /// 沿树边从 `vertex` 走到根
    ///
    /// 返回的路径从 `vertex` 开始、到根结束，权重为树中记录的距离；
    /// 顶点不可达时返回 `None`。
    pub fn path_to_root(&self, vertex: &G::Vertex) -> Option<GraphPath<G::Vertex, G::Edge>> {
        let entry = self.entries.get(vertex)?;
        if !entry.is_reachable() {
            return None;
        }

        let mut vertices = vec![vertex.clone()];
        let mut edges = Vec::new();
        let mut current = vertex;

        while current != &self.root {
            let edge = self.entries.get(current)?.edge?;
            current = self.graph.opposite(edge, current);
            edges.push(edge);
            vertices.push(current.clone());

            if edges.len() > self.entries.len() {
                log::warn!("最短路径树中出现环路，起点 {:?}", vertex);
                return None;
            }
        }

        Some(GraphPath::new(vertices, edges, entry.distance))
    }
}
