//! 提示谓词特征
//!
//! 判断一个提示能否传播到给定的计划节点

use super::rel_hint::RelHint;
use crate::query::planner::plan::core::nodes::PlanNode;

/// 提示谓词
///
/// 实现必须是纯函数：同一 (hint, node) 多次调用返回相同结果，
/// 并且可以在多个线程间共享
pub trait HintPredicate: Send + Sync + std::fmt::Debug {
    /// 判断提示是否可以附着到节点上
    fn apply(&self, hint: &RelHint, node: &dyn PlanNode) -> bool;
}
