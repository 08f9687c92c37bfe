//! 掩码子图模块
//!
//! `Mask` 记录被隐藏的顶点和边；`MaskedGraph` 是底层图上的只读视图，
//! 所有查询都会跳过被隐藏的元素。与被隐藏顶点关联的边同样不可见。

use std::collections::HashSet;
use std::hash::Hash;

use crate::core::types::graph::{EdgeDirection, Graph};

/// 隐藏的顶点与边集合
#[derive(Debug, Clone)]
pub struct Mask<V, E> {
    vertices: HashSet<V>,
    edges: HashSet<E>,
}

impl<V: Eq + Hash, E: Eq + Hash> Default for Mask<V, E> {
    fn default() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: HashSet::new(),
        }
    }
}

impl<V: Eq + Hash, E: Eq + Hash> Mask<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_vertex(&mut self, vertex: V) {
        self.vertices.insert(vertex);
    }

    pub fn hide_edge(&mut self, edge: E) {
        self.edges.insert(edge);
    }

    /// 恢复顶点，返回该顶点此前是否被隐藏
    pub fn recover_vertex(&mut self, vertex: &V) -> bool {
        self.vertices.remove(vertex)
    }

    /// 恢复边，返回该边此前是否被隐藏
    pub fn recover_edge(&mut self, edge: &E) -> bool {
        self.edges.remove(edge)
    }

    pub fn is_vertex_hidden(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn is_edge_hidden(&self, edge: &E) -> bool {
        self.edges.contains(edge)
    }

    pub fn hidden_vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn hidden_edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// 掩码子图视图
pub struct MaskedGraph<'a, G: Graph> {
    graph: &'a G,
    mask: &'a Mask<G::Vertex, G::Edge>,
}

impl<'a, G: Graph> MaskedGraph<'a, G> {
    pub fn new(graph: &'a G, mask: &'a Mask<G::Vertex, G::Edge>) -> Self {
        Self { graph, mask }
    }

    fn edge_visible(&self, edge: G::Edge) -> bool {
        !self.mask.is_edge_hidden(&edge)
            && !self.mask.is_vertex_hidden(self.graph.edge_source(edge))
            && !self.mask.is_vertex_hidden(self.graph.edge_target(edge))
    }
}

impl<G: Graph> Graph for MaskedGraph<'_, G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.graph.contains_vertex(vertex) && !self.mask.is_vertex_hidden(vertex)
    }

    fn contains_edge(&self, edge: Self::Edge) -> bool {
        self.graph.contains_edge(edge) && self.edge_visible(edge)
    }

    fn vertices(&self) -> Vec<Self::Vertex> {
        self.graph
            .vertices()
            .into_iter()
            .filter(|v| !self.mask.is_vertex_hidden(v))
            .collect()
    }

    fn edge_source(&self, edge: Self::Edge) -> &Self::Vertex {
        self.graph.edge_source(edge)
    }

    fn edge_target(&self, edge: Self::Edge) -> &Self::Vertex {
        self.graph.edge_target(edge)
    }

    fn edge_weight(&self, edge: Self::Edge) -> f64 {
        self.graph.edge_weight(edge)
    }

    fn edges_of(&self, vertex: &Self::Vertex, direction: EdgeDirection) -> Vec<Self::Edge> {
        if self.mask.is_vertex_hidden(vertex) {
            return Vec::new();
        }
        self.graph
            .edges_of(vertex, direction)
            .into_iter()
            .filter(|&e| self.edge_visible(e))
            .collect()
    }
}
