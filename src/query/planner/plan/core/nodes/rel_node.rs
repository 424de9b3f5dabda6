//! 关系计划节点实现
//!
//! 提供通用的关系算子节点，只携带节点ID、节点类型与输入节点

use super::plan_node_kind::PlanNodeKind;
use super::plan_node_traits::PlanNode;
use crate::query::planner::plan::core::node_id_generator::next_node_id;

/// 关系计划节点
#[derive(Debug, Clone, PartialEq)]
pub struct RelNode {
    id: i64,
    kind: PlanNodeKind,
    inputs: Vec<RelNode>,
}

impl RelNode {
    /// 创建新节点并分配全局唯一ID
    pub fn new(kind: PlanNodeKind, inputs: Vec<RelNode>) -> Self {
        Self {
            id: next_node_id(),
            kind,
            inputs,
        }
    }

    /// 创建叶子节点
    pub fn leaf(kind: PlanNodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn scan() -> Self {
        Self::leaf(PlanNodeKind::TableScan)
    }

    pub fn values() -> Self {
        Self::leaf(PlanNodeKind::Values)
    }

    pub fn filter(input: RelNode) -> Self {
        Self::new(PlanNodeKind::Filter, vec![input])
    }

    pub fn project(input: RelNode) -> Self {
        Self::new(PlanNodeKind::Project, vec![input])
    }

    pub fn aggregate(input: RelNode) -> Self {
        Self::new(PlanNodeKind::Aggregate, vec![input])
    }

    pub fn sort(input: RelNode) -> Self {
        Self::new(PlanNodeKind::Sort, vec![input])
    }

    pub fn join(left: RelNode, right: RelNode) -> Self {
        Self::new(PlanNodeKind::LogicalJoin, vec![left, right])
    }

    pub fn hash_join(left: RelNode, right: RelNode) -> Self {
        Self::new(PlanNodeKind::HashJoin, vec![left, right])
    }

    pub fn union(inputs: Vec<RelNode>) -> Self {
        Self::new(PlanNodeKind::Union, inputs)
    }

    pub fn intersect(inputs: Vec<RelNode>) -> Self {
        Self::new(PlanNodeKind::Intersect, inputs)
    }

    pub fn minus(inputs: Vec<RelNode>) -> Self {
        Self::new(PlanNodeKind::Minus, inputs)
    }

    /// 获取输入节点
    pub fn inputs(&self) -> &[RelNode] {
        &self.inputs
    }
}

impl PlanNode for RelNode {
    fn id(&self) -> i64 {
        self.id
    }

    fn kind(&self) -> PlanNodeKind {
        self.kind
    }
}
