//! 穷举所有简单路径的对照实现
//!
//! 深度优先枚举从起点到终点的全部无环路径，平行边视为不同路径，
//! 结果按权重升序排列。只适合小图。

use std::collections::HashSet;

use kpaths::core::{Graph, GraphPath};

pub fn all_simple_paths<G: Graph>(
    graph: &G,
    source: &G::Vertex,
    sink: &G::Vertex,
) -> Vec<GraphPath<G::Vertex, G::Edge>> {
    let mut search = Search {
        graph,
        source,
        sink,
        visited: HashSet::new(),
        edges: Vec::new(),
        found: Vec::new(),
    };
    search.visited.insert(source.clone());
    search.walk(source);

    let mut found = search.found;
    found.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
    found
}

struct Search<'a, G: Graph> {
    graph: &'a G,
    source: &'a G::Vertex,
    sink: &'a G::Vertex,
    visited: HashSet<G::Vertex>,
    edges: Vec<G::Edge>,
    found: Vec<GraphPath<G::Vertex, G::Edge>>,
}

impl<G: Graph> Search<'_, G> {
    fn walk(&mut self, current: &G::Vertex) {
        if current == self.sink {
            self.found
                .push(GraphPath::from_edges(self.graph, self.source.clone(), self.edges.clone()));
            return;
        }

        for edge in self.graph.outgoing_edges(current) {
            let next = self.graph.opposite(edge, current).clone();
            if self.visited.contains(&next) {
                continue;
            }
            self.visited.insert(next.clone());
            self.edges.push(edge);
            self.walk(&next);
            self.edges.pop();
            self.visited.remove(&next);
        }
    }
}
