//! 随机图生成器
//!
//! G(n, p) 模型：每一对不同顶点之间以概率 p 独立地连一条边，边权在 [0, 1) 上均匀分布。
//! 相同的种子总是生成相同的图。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::MultiGraph;

/// G(n, p) 随机图生成器
#[derive(Debug, Clone)]
pub struct GnpRandomGraph {
    vertices: usize,
    probability: f64,
    seed: u64,
    directed: bool,
}

impl GnpRandomGraph {
    pub fn new(vertices: usize, probability: f64, seed: u64) -> Self {
        Self {
            vertices,
            probability: probability.clamp(0.0, 1.0),
            seed,
            directed: true,
        }
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// 生成顶点为 `0..n` 的图
    pub fn generate(&self) -> MultiGraph<usize> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut graph = if self.directed {
            MultiGraph::new_directed()
        } else {
            MultiGraph::new_undirected()
        };

        for v in 0..self.vertices {
            graph.add_vertex(v);
        }

        for u in 0..self.vertices {
            let start = if self.directed { 0 } else { u + 1 };
            for v in start..self.vertices {
                if u == v {
                    continue;
                }
                if rng.gen::<f64>() < self.probability {
                    let weight: f64 = rng.gen();
                    // 端点都已添加且权重在 [0, 1) 内，不会失败
                    if let Err(e) = graph.add_edge(&u, &v, weight) {
                        log::warn!("随机边 {} -> {} 添加失败: {}", u, v, e);
                    }
                }
            }
        }

        log::debug!(
            "生成随机图: n={}, p={}, seed={}, 边数={}",
            self.vertices,
            self.probability,
            self.seed,
            graph.edge_count()
        );
        graph
    }
}
