//! 内存邻接表多重图
//!
//! 顶点可以是任意可哈希类型，边由 `EdgeId` 标识，允许平行边和自环。

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::graph::{EdgeDirection, Graph};

/// 边标识，按插入顺序分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct EdgeRecord {
    source: usize,
    target: usize,
    weight: f64,
}

/// 带权多重图
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_vertex` | O(1) amortized |
/// | `add_edge` | O(1) amortized |
/// | `edges_of` | O(degree) |
/// | `edges_between` | O(out-degree) |
#[derive(Debug, Clone)]
pub struct MultiGraph<V> {
    directed: bool,
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    edges: Vec<EdgeRecord>,
    // 无向图只使用 outgoing 作为关联边表
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
}

impl<V: Clone + Eq + Hash + fmt::Debug> MultiGraph<V> {
    fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    pub fn new_directed() -> Self {
        Self::with_direction(true)
    }

    pub fn new_undirected() -> Self {
        Self::with_direction(false)
    }

    /// 添加顶点，顶点已存在时返回 false
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        true
    }

    /// 添加一条边，两个端点必须已存在，权重必须非负
    pub fn add_edge(&mut self, source: &V, target: &V, weight: f64) -> GraphResult<EdgeId> {
        let weight = GraphError::check_weight(weight)?;
        let s = self.vertex_index(source)?;
        let t = self.vertex_index(target)?;

        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeRecord {
            source: s,
            target: t,
            weight,
        });

        if self.directed {
            self.outgoing[s].push(id);
            self.incoming[t].push(id);
        } else {
            self.outgoing[s].push(id);
            if s != t {
                self.outgoing[t].push(id);
            }
        }
        Ok(id)
    }

    /// 添加一条边，缺失的端点会自动添加
    pub fn add_edge_with_vertices(&mut self, source: V, target: V, weight: f64) -> GraphResult<EdgeId> {
        GraphError::check_weight(weight)?;
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());
        self.add_edge(&source, &target, weight)
    }

    pub fn set_edge_weight(&mut self, edge: EdgeId, weight: f64) -> GraphResult<()> {
        let weight = GraphError::check_weight(weight)?;
        let record = self
            .edges
            .get_mut(edge.0)
            .ok_or_else(|| GraphError::EdgeNotFound(edge.to_string()))?;
        record.weight = weight;
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 全部边，按插入顺序
    pub fn edges(&self) -> Vec<EdgeId> {
        (0..self.edges.len()).map(EdgeId).collect()
    }

    fn vertex_index(&self, vertex: &V) -> GraphResult<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", vertex)))
    }
}

impl<V: Clone + Eq + Hash + fmt::Debug> Graph for MultiGraph<V> {
    type Vertex = V;
    type Edge = EdgeId;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.0 < self.edges.len()
    }

    fn vertices(&self) -> Vec<V> {
        self.vertices.clone()
    }

    fn edge_source(&self, edge: EdgeId) -> &V {
        &self.vertices[self.edges[edge.0].source]
    }

    fn edge_target(&self, edge: EdgeId) -> &V {
        &self.vertices[self.edges[edge.0].target]
    }

    fn edge_weight(&self, edge: EdgeId) -> f64 {
        self.edges[edge.0].weight
    }

    fn edges_of(&self, vertex: &V, direction: EdgeDirection) -> Vec<EdgeId> {
        let Some(&idx) = self.index.get(vertex) else {
            return Vec::new();
        };
        if !self.directed {
            return self.outgoing[idx].clone();
        }
        match direction {
            EdgeDirection::Outgoing => self.outgoing[idx].clone(),
            EdgeDirection::Incoming => self.incoming[idx].clone(),
            EdgeDirection::Both => {
                let mut edges = self.outgoing[idx].clone();
                // 有向自环同时出现在出边和入边中，只保留一次
                edges.extend(
                    self.incoming[idx]
                        .iter()
                        .filter(|e| self.edges[e.0].source != idx),
                );
                edges
            }
        }
    }
}
