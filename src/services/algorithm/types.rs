//! 路径算法共享类型定义
//!
//! 包含 Dijkstra 与 Yen 算法使用的共享数据结构

/// Dijkstra距离节点
///
/// 按距离反向比较，放入 `BinaryHeap` 后得到最小堆
#[derive(Debug, Clone)]
pub struct DistanceNode<V> {
    pub distance: f64,
    pub vertex: V,
}

impl<V> Eq for DistanceNode<V> {}

impl<V> PartialEq for DistanceNode<V> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<V> Ord for DistanceNode<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

impl<V> PartialOrd for DistanceNode<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// 最短路径树中的一项：到根的距离和通往根的下一条边
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEntry<E> {
    pub distance: f64,
    pub edge: Option<E>,
}

impl<E> TreeEntry<E> {
    pub fn root() -> Self {
        Self {
            distance: 0.0,
            edge: None,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            edge: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// 算法统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgorithmStats {
    /// 已输出的路径数
    pub paths_emitted: usize,
    /// 进入候选队列的路径数
    pub candidates_generated: usize,
    /// 构建的反向最短路径树数量
    pub trees_built: usize,
    /// 尝试过的偏离顶点数
    pub spur_attempts: usize,
}

impl AlgorithmStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_paths_emitted(&mut self) {
        self.paths_emitted += 1;
    }

    pub fn increment_candidates_generated(&mut self) {
        self.candidates_generated += 1;
    }

    pub fn increment_trees_built(&mut self) {
        self.trees_built += 1;
    }

    pub fn increment_spur_attempts(&mut self) {
        self.spur_attempts += 1;
    }
}
