//! 测试图

use kpaths::graph::{EdgeId, GnpRandomGraph, MultiGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn directed(edges: &[(&str, &str, f64)]) -> MultiGraph<String> {
    build(MultiGraph::new_directed(), edges)
}

pub fn undirected(edges: &[(&str, &str, f64)]) -> MultiGraph<String> {
    build(MultiGraph::new_undirected(), edges)
}

fn build(mut graph: MultiGraph<String>, edges: &[(&str, &str, f64)]) -> MultiGraph<String> {
    for &(u, v, w) in edges {
        graph
            .add_edge_with_vertices(u.to_string(), v.to_string(), w)
            .expect("添加测试边失败");
    }
    graph
}

/// A -> B -> C，唯一路径权重为 2
pub fn chain() -> MultiGraph<String> {
    directed(&[("A", "B", 1.0), ("B", "C", 1.0)])
}

/// 经典的 Yen 示例图，C 到 H 共有 7 条简单路径
pub fn yen_example() -> MultiGraph<String> {
    directed(&[
        ("C", "D", 3.0),
        ("C", "E", 2.0),
        ("D", "F", 4.0),
        ("E", "D", 1.0),
        ("E", "F", 2.0),
        ("E", "G", 3.0),
        ("F", "G", 2.0),
        ("F", "H", 1.0),
        ("G", "H", 2.0),
    ])
}

/// 两个顶点之间 `count` 条平行边，权重依次为 1, 2, ...
pub fn parallel(count: usize) -> (MultiGraph<u32>, Vec<EdgeId>) {
    let mut graph = MultiGraph::new_directed();
    let edges = (1..=count)
        .map(|w| graph.add_edge_with_vertices(0, 1, w as f64).expect("添加测试边失败"))
        .collect();
    (graph, edges)
}

/// `size` x `size` 的单位权重有向网格，只能向右或向下走
pub fn grid(size: u32) -> MultiGraph<(u32, u32)> {
    let mut graph = MultiGraph::new_directed();
    for r in 0..size {
        for c in 0..size {
            graph.add_vertex((r, c));
            if c + 1 < size {
                graph.add_edge_with_vertices((r, c), (r, c + 1), 1.0).expect("添加测试边失败");
            }
            if r + 1 < size {
                graph.add_edge_with_vertices((r, c), (r + 1, c), 1.0).expect("添加测试边失败");
            }
        }
    }
    graph
}

pub fn random(vertices: usize, probability: f64, seed: u64, directed: bool) -> MultiGraph<usize> {
    GnpRandomGraph::new(vertices, probability, seed)
        .with_directed(directed)
        .generate()
}

/// 随机多重图：`edges` 条端点均匀随机的边，允许平行边和自环
///
/// `weights` 非空时边权从中均匀选取（便于制造相同权重和零权重），否则在 [0, 1) 上均匀分布。
pub fn random_multigraph(
    vertices: usize,
    edges: usize,
    seed: u64,
    directed: bool,
    weights: &[f64],
) -> MultiGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = if directed {
        MultiGraph::new_directed()
    } else {
        MultiGraph::new_undirected()
    };
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for _ in 0..edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        let w = if weights.is_empty() {
            rng.gen::<f64>()
        } else {
            weights[rng.gen_range(0..weights.len())]
        };
        graph.add_edge(&u, &v, w).expect("添加测试边失败");
    }
    graph
}
