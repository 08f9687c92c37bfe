// 路径类型定义
//
// 路径记录顶点序列、逐段使用的具体边实例以及总权重

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::graph::Graph;

/// 图中的一条路径
///
/// `vertices` 比 `edges` 多一个元素；`edges[i]` 连接 `vertices[i]` 与 `vertices[i + 1]`。
/// 多重图中平行边是不同的边实例，因此两条顶点序列相同的路径可以是不同的路径。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPath<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
    weight: f64,
}

impl<V, E> GraphPath<V, E> {
    /// 由顶点、边和总权重直接构造路径
    ///
    /// # Panics
    /// 顶点为空或顶点数不等于边数加一时 panic
    pub fn new(vertices: Vec<V>, edges: Vec<E>, weight: f64) -> Self {
        assert!(!vertices.is_empty(), "path must contain at least one vertex");
        assert_eq!(
            vertices.len(),
            edges.len() + 1,
            "path with {} edges must have {} vertices",
            edges.len(),
            edges.len() + 1
        );
        Self {
            vertices,
            edges,
            weight,
        }
    }

    /// 只含一个顶点、没有边的零权重路径
    pub fn trivial(vertex: V) -> Self {
        Self {
            vertices: vec![vertex],
            edges: Vec::new(),
            weight: 0.0,
        }
    }

    pub fn start(&self) -> &V {
        &self.vertices[0]
    }

    pub fn end(&self) -> &V {
        &self.vertices[self.vertices.len() - 1]
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 路径长度（边数）
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_parts(self) -> (Vec<V>, Vec<E>, f64) {
        (self.vertices, self.edges, self.weight)
    }
}

impl<V: Eq + Hash, E: Eq> GraphPath<V, E> {
    /// 路径中没有重复顶点
    pub fn is_loopless(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|v| seen.insert(v))
    }

    /// 顶点序列与边序列都相同（不比较权重）
    pub fn same_route(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}

impl<V: Clone, E: Copy> GraphPath<V, E> {
    /// 按边序列构造路径，权重按路径顺序累加
    pub fn from_edges<G>(graph: &G, start: V, edges: Vec<E>) -> Self
    where
        G: Graph<Vertex = V, Edge = E>,
    {
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        let mut weight = 0.0;
        vertices.push(start);
        for &edge in &edges {
            let next = graph.opposite(edge, &vertices[vertices.len() - 1]).clone();
            weight += graph.edge_weight(edge);
            vertices.push(next);
        }
        Self {
            vertices,
            edges,
            weight,
        }
    }
}

impl<V: Eq + Debug, E: Copy + Debug> GraphPath<V, E> {
    /// 校验路径是图中一条合法的游走
    ///
    /// 检查每条边都存在、连接相邻两个顶点（有向图还要求方向一致），
    /// 并且总权重与边权之和相符（容差 1e-9，相对误差）。
    pub fn verify<G>(&self, graph: &G) -> GraphResult<()>
    where
        G: Graph<Vertex = V, Edge = E>,
    {
        for vertex in &self.vertices {
            if !graph.contains_vertex(vertex) {
                return Err(GraphError::InvalidPath(format!(
                    "顶点 {:?} 不在图中",
                    vertex
                )));
            }
        }

        let mut total = 0.0;
        for (i, &edge) in self.edges.iter().enumerate() {
            if !graph.contains_edge(edge) {
                return Err(GraphError::InvalidPath(format!("边 {:?} 不在图中", edge)));
            }
            let from = &self.vertices[i];
            let to = &self.vertices[i + 1];
            let connects = if graph.is_directed() {
                graph.edge_source(edge) == from && graph.edge_target(edge) == to
            } else {
                graph.opposite(edge, from) == to && graph.opposite(edge, to) == from
            };
            if !connects {
                return Err(GraphError::InvalidPath(format!(
                    "边 {:?} 不连接 {:?} 与 {:?}",
                    edge, from, to
                )));
            }
            total += graph.edge_weight(edge);
        }

        let tolerance = 1e-9 * total.abs().max(1.0);
        if (total - self.weight).abs() > tolerance {
            return Err(GraphError::InvalidPath(format!(
                "路径权重 {} 与边权之和 {} 不一致",
                self.weight, total
            )));
        }
        Ok(())
    }
}
