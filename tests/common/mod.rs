//! 集成测试共享工具模块
//!
//! 提供测试图、穷举路径对照实现和断言辅助函数

#![allow(dead_code)]

pub mod assertions;
pub mod brute_force;
pub mod fixtures;

use std::path::PathBuf;
use tempfile::TempDir;

/// 测试目录包装器，离开作用域时自动删除
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("创建临时目录失败"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
