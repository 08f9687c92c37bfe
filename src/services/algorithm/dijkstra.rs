//! Dijkstra算法模块
//!
//! 使用二叉堆优化的Dijkstra算法，要求边权非负。
//! 提供正向的点对点最短路径，以及以某个顶点为根的反向最短路径树。

use std::collections::{BinaryHeap, HashMap};

use crate::core::types::graph::Graph;
use crate::core::types::path::GraphPath;

use super::types::{DistanceNode, TreeEntry};

/// Dijkstra算法结构体
pub struct Dijkstra;

impl Dijkstra {
    /// 查找从起点到终点的最短路径
    ///
    /// 起点等于终点时返回零权重的单顶点路径；不可达时返回 `None`。
    pub fn shortest_path<G: Graph>(
        graph: &G,
        source: &G::Vertex,
        sink: &G::Vertex,
    ) -> Option<GraphPath<G::Vertex, G::Edge>> {
        if !graph.contains_vertex(source) || !graph.contains_vertex(sink) {
            return None;
        }
        if source == sink {
            return Some(GraphPath::trivial(source.clone()));
        }

        let mut distances: HashMap<G::Vertex, f64> = HashMap::new();
        let mut predecessors: HashMap<G::Vertex, G::Edge> = HashMap::new();
        let mut to_visit = BinaryHeap::new();

        distances.insert(source.clone(), 0.0);
        to_visit.push(DistanceNode {
            distance: 0.0,
            vertex: source.clone(),
        });

        while let Some(DistanceNode { distance, vertex }) = to_visit.pop() {
            if distance > distances.get(&vertex).copied().unwrap_or(f64::INFINITY) {
                continue;
            }
            if vertex == *sink {
                break;
            }

            for edge in graph.outgoing_edges(&vertex) {
                let neighbor = graph.opposite(edge, &vertex);
                let new_distance = distance + graph.edge_weight(edge);
                let current = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);

                if new_distance < current {
                    distances.insert(neighbor.clone(), new_distance);
                    predecessors.insert(neighbor.clone(), edge);
                    to_visit.push(DistanceNode {
                        distance: new_distance,
                        vertex: neighbor.clone(),
                    });
                }
            }
        }

        if !distances.contains_key(sink) {
            return None;
        }

        // 重建路径，权重按路径顺序重新累加
        let mut edges = Vec::new();
        let mut current = sink;
        while current != source {
            let edge = *predecessors.get(current)?;
            edges.push(edge);
            current = graph.opposite(edge, current);
        }
        edges.reverse();

        Some(GraphPath::from_edges(graph, source.clone(), edges))
    }

    /// 计算所有顶点到 `root` 的最短距离
    ///
    /// 沿入边反向搜索，得到每个可达顶点的距离以及通往根方向的下一条边。
    /// 无法到达根的顶点不出现在结果中。
    pub fn reverse_tree<G: Graph>(
        graph: &G,
        root: &G::Vertex,
    ) -> HashMap<G::Vertex, TreeEntry<G::Edge>> {
        let mut tree: HashMap<G::Vertex, TreeEntry<G::Edge>> = HashMap::new();
        if !graph.contains_vertex(root) {
            return tree;
        }

        let mut to_visit = BinaryHeap::new();
        tree.insert(root.clone(), TreeEntry::root());
        to_visit.push(DistanceNode {
            distance: 0.0,
            vertex: root.clone(),
        });

        while let Some(DistanceNode { distance, vertex }) = to_visit.pop() {
            let settled = tree
                .get(&vertex)
                .map(|entry| entry.distance)
                .unwrap_or(f64::INFINITY);
            if distance > settled {
                continue;
            }

            for edge in graph.incoming_edges(&vertex) {
                let predecessor = graph.opposite(edge, &vertex);
                if predecessor == &vertex {
                    continue;
                }
                let new_distance = distance + graph.edge_weight(edge);
                let current = tree
                    .get(predecessor)
                    .map(|entry| entry.distance)
                    .unwrap_or(f64::INFINITY);

                if new_distance < current {
                    tree.insert(
                        predecessor.clone(),
                        TreeEntry {
                            distance: new_distance,
                            edge: Some(edge),
                        },
                    );
                    to_visit.push(DistanceNode {
                        distance: new_distance,
                        vertex: predecessor.clone(),
                    });
                }
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MultiGraph;

    fn sample() -> MultiGraph<char> {
        // A->B (4), A->C (2), B->C (1), B->D (5), C->D (8)
        let mut graph = MultiGraph::new_directed();
        for (u, v, w) in [('A', 'B', 4.0), ('A', 'C', 2.0), ('B', 'C', 1.0), ('B', 'D', 5.0), ('C', 'D', 8.0)] {
            graph.add_edge_with_vertices(u, v, w).expect("Edge should be added in test");
        }
        graph
    }

    #[test]
    fn test_shortest_path() {
        let graph = sample();
        let path = Dijkstra::shortest_path(&graph, &'A', &'D').expect("Path should exist in test");
        assert_eq!(path.vertices(), &['A', 'B', 'D']);
        assert_eq!(path.weight(), 9.0);
        assert!(path.verify(&graph).is_ok());
    }

    #[test]
    fn test_same_node() {
        let graph = sample();
        let path = Dijkstra::shortest_path(&graph, &'A', &'A').expect("Path should exist in test");
        assert_eq!(path.vertices(), &['A']);
        assert_eq!(path.weight(), 0.0);
    }

    #[test]
    fn test_no_path() {
        let mut graph = sample();
        graph.add_vertex('E');
        assert!(Dijkstra::shortest_path(&graph, &'A', &'E').is_none());
        assert!(Dijkstra::shortest_path(&graph, &'D', &'A').is_none());
        assert!(Dijkstra::shortest_path(&graph, &'A', &'Z').is_none());
    }

    #[test]
    fn test_picks_cheaper_parallel_edge() {
        let mut graph = MultiGraph::new_directed();
        graph.add_edge_with_vertices(1, 2, 3.0).expect("Edge should be added in test");
        let cheap = graph.add_edge_with_vertices(1, 2, 1.0).expect("Edge should be added in test");
        let path = Dijkstra::shortest_path(&graph, &1, &2).expect("Path should exist in test");
        assert_eq!(path.edges(), &[cheap]);
    }

    #[test]
    fn test_reverse_tree() {
        let graph = sample();
        let tree = Dijkstra::reverse_tree(&graph, &'D');
        assert_eq!(tree[&'D'].distance, 0.0);
        assert_eq!(tree[&'B'].distance, 5.0);
        assert_eq!(tree[&'C'].distance, 8.0);
        assert_eq!(tree[&'A'].distance, 9.0);

        let next = tree[&'A'].edge.expect("Edge should exist in test");
        assert_eq!(graph.edge_target(next), &'B');
    }

    #[test]
    fn test_reverse_tree_unreachable() {
        let graph = sample();
        let tree = Dijkstra::reverse_tree(&graph, &'A');
        assert_eq!(tree.len(), 1);
        assert!(!tree.contains_key(&'D'));
    }
}
