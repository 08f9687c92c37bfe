// 图相关类型定义
//
// 路径算法只依赖这里定义的图查询接口，具体的图存储由调用方提供

use std::fmt::Debug;
use std::hash::Hash;

/// 边的方向类型
///
/// 用于表示边的遍历方向，支持出边、入边和双向遍历
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// 出边：从源节点指向目标节点
    Outgoing,
    /// 入边：从目标节点指向源节点
    Incoming,
    /// 双向：同时包含出边和入边
    Both,
}

impl EdgeDirection {
    /// 判断是否包含出边
    pub fn is_outgoing(&self) -> bool {
        matches!(self, EdgeDirection::Outgoing | EdgeDirection::Both)
    }

    /// 判断是否包含入边
    pub fn is_incoming(&self) -> bool {
        matches!(self, EdgeDirection::Incoming | EdgeDirection::Both)
    }

    /// 获取反向方向
    pub fn reverse(&self) -> Self {
        match self {
            EdgeDirection::Outgoing => EdgeDirection::Incoming,
            EdgeDirection::Incoming => EdgeDirection::Outgoing,
            EdgeDirection::Both => EdgeDirection::Both,
        }
    }
}

/// 图查询接口
///
/// 支持有向图与无向图、多重边和自环。边通过 `Edge` 句柄区分，
/// 因此同一对顶点之间的平行边是不同的边实例。
///
/// 对无向图，任何方向的边查询都返回全部关联边。
pub trait Graph {
    type Vertex: Clone + Eq + Hash + Debug;
    type Edge: Copy + Eq + Hash + Debug;

    /// 是否为有向图
    fn is_directed(&self) -> bool;

    /// 是否包含顶点
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// 是否包含边
    fn contains_edge(&self, edge: Self::Edge) -> bool;

    /// 全部顶点
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// 边的源顶点
    ///
    /// # Panics
    /// 边不属于该图时可能 panic
    fn edge_source(&self, edge: Self::Edge) -> &Self::Vertex;

    /// 边的目标顶点
    fn edge_target(&self, edge: Self::Edge) -> &Self::Vertex;

    /// 边的权重
    fn edge_weight(&self, edge: Self::Edge) -> f64;

    /// 按方向获取顶点的关联边，顶点不存在时返回空列表
    fn edges_of(&self, vertex: &Self::Vertex, direction: EdgeDirection) -> Vec<Self::Edge>;

    fn outgoing_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge> {
        self.edges_of(vertex, EdgeDirection::Outgoing)
    }

    fn incoming_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge> {
        self.edges_of(vertex, EdgeDirection::Incoming)
    }

    /// 获取边另一端的顶点
    fn opposite(&self, edge: Self::Edge, vertex: &Self::Vertex) -> &Self::Vertex {
        let source = self.edge_source(edge);
        if source == vertex {
            self.edge_target(edge)
        } else {
            source
        }
    }

    /// 获取从 `from` 到 `to` 的所有边（无向图不区分方向）
    fn edges_between(&self, from: &Self::Vertex, to: &Self::Vertex) -> Vec<Self::Edge> {
        self.outgoing_edges(from)
            .into_iter()
            .filter(|&edge| self.opposite(edge, from) == to)
            .collect()
    }

    fn contains_edge_between(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool {
        !self.edges_between(from, to).is_empty()
    }
}
