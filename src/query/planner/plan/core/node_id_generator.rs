//! 节点ID生成器
//!
//! 提供全局唯一的计划节点ID分配机制

use std::sync::atomic::{AtomicI64, Ordering};

/// 节点ID生成器
pub struct NodeIdGenerator {
    counter: AtomicI64,
}

impl NodeIdGenerator {
    /// 获取全局单例实例
    pub fn instance() -> &'static Self {
        static INSTANCE: NodeIdGenerator = NodeIdGenerator {
            counter: AtomicI64::new(1), // 0保留为无效ID
        };
        &INSTANCE
    }

    /// 获取下一个唯一ID
    pub fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}

/// 为节点分配新ID的便捷函数
pub fn next_node_id() -> i64 {
    NodeIdGenerator::instance().next_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let id1 = next_node_id();
        let id2 = next_node_id();

        assert!(id1 >= 1);
        assert!(id2 > id1);
    }
}
