//! 自定义断言辅助模块
//!
//! 提供路径结果的常用断言函数

use kpaths::core::{Graph, GraphPath};

pub const WEIGHT_TOLERANCE: f64 = 1e-9;

pub fn weights_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= WEIGHT_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言路径序列满足 K 条最短路径输出的基本性质：
/// 都是从起点到终点的合法简单路径，权重非降序，两两不同
pub fn assert_valid_paths<G: Graph>(
    graph: &G,
    source: &G::Vertex,
    sink: &G::Vertex,
    paths: &[GraphPath<G::Vertex, G::Edge>],
) {
    for (i, path) in paths.iter().enumerate() {
        assert_eq!(path.start(), source, "第 {} 条路径起点错误", i);
        assert_eq!(path.end(), sink, "第 {} 条路径终点错误", i);
        assert!(path.is_loopless(), "第 {} 条路径有环: {:?}", i, path.vertices());
        if let Err(e) = path.verify(graph) {
            panic!("第 {} 条路径校验失败: {}", i, e);
        }
    }

    for pair in paths.windows(2) {
        assert!(
            pair[0].weight() <= pair[1].weight() + WEIGHT_TOLERANCE,
            "权重不是非降序: {} > {}",
            pair[0].weight(),
            pair[1].weight()
        );
    }

    for i in 0..paths.len() {
        for j in i + 1..paths.len() {
            assert!(
                !paths[i].same_route(&paths[j]),
                "第 {} 条与第 {} 条路径重复: {:?}",
                i,
                j,
                paths[i].vertices()
            );
        }
    }
}

/// 断言输出与穷举结果的权重序列逐项一致
pub fn assert_matches_oracle<V, E>(actual: &[GraphPath<V, E>], expected: &[GraphPath<V, E>]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "路径数量不匹配: 期望 {}, 实际 {}",
        expected.len(),
        actual.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            weights_close(a.weight(), e.weight()),
            "第 {} 条路径权重不匹配: 期望 {}, 实际 {}",
            i,
            e.weight(),
            a.weight()
        );
    }
}
