//! 集成测试共享工具模块
//!
//! 提供覆盖全部节点类型的计划节点夹具

use relhint::query::optimizer::RelHint;
use relhint::query::planner::{PlanNodeKind, RelNode};

/// 创建测试用提示
pub fn test_hint(name: &str) -> RelHint {
    RelHint::builder(name).build()
}

/// 为每种节点类型创建一个节点
pub fn node_of_every_kind() -> Vec<RelNode> {
    PlanNodeKind::ALL.iter().map(|kind| RelNode::leaf(*kind)).collect()
}

/// 构建一个包含多种算子的计划树
///
/// Sort <- Aggregate <- Filter <- HashJoin(Scan, Union(Values, Values))
pub fn sample_plan() -> RelNode {
    let union = RelNode::union(vec![RelNode::values(), RelNode::values()]);
    let join = RelNode::hash_join(RelNode::scan(), union);
    RelNode::sort(RelNode::aggregate(RelNode::filter(join)))
}
