//! JSON 图文件
//!
//! 文件格式：
//!
//! ```json
//! {
//!   "directed": true,
//!   "vertices": ["a", "b"],
//!   "edges": [{ "source": "a", "target": "b", "weight": 1.5 }]
//! }
//! ```
//!
//! `weight` 缺省为 1.0；边中出现但未在 `vertices` 中声明的顶点会被自动添加。

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use crate::core::error::{GraphResult, KspResult};
use crate::core::types::graph::Graph;
use crate::graph::MultiGraph;

fn default_weight() -> f64 {
    1.0
}

fn default_directed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub source: String,
    pub target: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// 图文件的内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

impl GraphDocument {
    /// 将任意 `MultiGraph` 转换为文件内容，顶点通过 `Display` 命名
    pub fn from_graph<V>(graph: &MultiGraph<V>) -> Self
    where
        V: Clone + Eq + Hash + std::fmt::Debug + Display,
    {
        let edges = graph
            .edges()
            .into_iter()
            .map(|edge| EdgeDocument {
                source: graph.edge_source(edge).to_string(),
                target: graph.edge_target(edge).to_string(),
                weight: graph.edge_weight(edge),
            })
            .collect();

        Self {
            directed: graph.is_directed(),
            vertices: graph.vertices().iter().map(|v| v.to_string()).collect(),
            edges,
        }
    }

    /// 构建图，边按文件中的顺序编号
    pub fn into_graph(self) -> GraphResult<MultiGraph<String>> {
        let mut graph = if self.directed {
            MultiGraph::new_directed()
        } else {
            MultiGraph::new_undirected()
        };

        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for edge in self.edges {
            graph.add_edge_with_vertices(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }
}

pub fn document_from_str(content: &str) -> KspResult<GraphDocument> {
    Ok(serde_json::from_str(content)?)
}

pub fn document_to_string(document: &GraphDocument) -> KspResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// 从 JSON 文件读取图
pub fn load_graph<P: AsRef<Path>>(path: P) -> KspResult<MultiGraph<String>> {
    let content = fs::read_to_string(path)?;
    let graph = document_from_str(&content)?.into_graph()?;
    log::debug!(
        "读取图文件: 顶点数={}, 边数={}",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// 将图写入 JSON 文件
pub fn save_graph<V, P>(graph: &MultiGraph<V>, path: P) -> KspResult<()>
where
    V: Clone + Eq + Hash + std::fmt::Debug + Display,
    P: AsRef<Path>,
{
    let content = document_to_string(&GraphDocument::from_graph(graph))?;
    fs::write(path, content)?;
    Ok(())
}
