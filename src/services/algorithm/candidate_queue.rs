//! 候选路径队列
//!
//! 按权重排序的最小堆，同时维护每个权重上排队的候选数量。
//! 权重相同的候选按入队顺序出队。

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::core::types::path::GraphPath;

/// 尚未输出的候选路径
///
/// `deviation_index` 是偏离顶点在路径顶点序列中的位置，
/// 该位置之前的部分与父路径共享。
#[derive(Debug, Clone)]
pub struct Candidate<V, E> {
    pub path: GraphPath<V, E>,
    pub deviation: V,
    pub deviation_index: usize,
}

impl<V: Clone, E> Candidate<V, E> {
    pub fn new(path: GraphPath<V, E>, deviation_index: usize) -> Self {
        let deviation = path.vertices()[deviation_index].clone();
        Self {
            path,
            deviation,
            deviation_index,
        }
    }

    pub fn weight(&self) -> f64 {
        self.path.weight()
    }
}

/// 以位模式作为权重的哈希键，权重比较是精确相等
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct WeightKey(u64);

impl From<f64> for WeightKey {
    fn from(weight: f64) -> Self {
        WeightKey((weight + 0.0).to_bits())
    }
}

struct QueueEntry<V, E> {
    weight: f64,
    sequence: u64,
    candidate: Candidate<V, E>,
}

impl<V, E> PartialEq for QueueEntry<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, E> Eq for QueueEntry<V, E> {}

impl<V, E> Ord for QueueEntry<V, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反向比较得到最小堆
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<V, E> PartialOrd for QueueEntry<V, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 候选路径优先队列
pub struct CandidateQueue<V, E> {
    heap: BinaryHeap<QueueEntry<V, E>>,
    frequencies: HashMap<WeightKey, usize>,
    next_sequence: u64,
}

impl<V, E> Default for CandidateQueue<V, E> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            frequencies: HashMap::new(),
            next_sequence: 0,
        }
    }
}

impl<V, E> CandidateQueue<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: Candidate<V, E>) {
        let weight = candidate.path.weight();
        *self.frequencies.entry(WeightKey::from(weight)).or_insert(0) += 1;
        self.heap.push(QueueEntry {
            weight,
            sequence: self.next_sequence,
            candidate,
        });
        self.next_sequence += 1;
    }

    /// 弹出权重最小的候选，并更新权重计数
    pub fn pop(&mut self) -> Option<Candidate<V, E>> {
        let entry = self.heap.pop()?;
        let key = WeightKey::from(entry.weight);
        if let Some(count) = self.frequencies.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.frequencies.remove(&key);
            }
        }
        Some(entry.candidate)
    }

    pub fn min_weight(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.weight)
    }

    /// 与最小权重相同的候选数量，队列为空时为 0
    pub fn min_weight_frequency(&self) -> usize {
        self.min_weight()
            .map(|weight| self.frequency(weight))
            .unwrap_or(0)
    }

    /// 指定权重的候选数量
    pub fn frequency(&self, weight: f64) -> usize {
        self.frequencies
            .get(&WeightKey::from(weight))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
