//! PlanNode 统一特征定义
//!
//! 定义提示框架对计划节点的最小依赖：节点标识与算子能力查询

use super::plan_node_kind::{OperatorCapability, PlanNodeKind};

/// PlanNode 基础特征
pub trait PlanNode: Send + Sync {
    /// 获取节点的唯一ID
    fn id(&self) -> i64;

    /// 获取节点类型
    fn kind(&self) -> PlanNodeKind;

    /// 获取节点类型的名称
    fn name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// 判断节点是否属于给定的算子能力
    fn belongs_to(&self, capability: OperatorCapability) -> bool {
        self.kind().belongs_to(capability)
    }
}

/// 为引用类型实现 PlanNode trait
impl<T: PlanNode + ?Sized> PlanNode for &T {
    fn id(&self) -> i64 {
        (**self).id()
    }

    fn kind(&self) -> PlanNodeKind {
        (**self).kind()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn belongs_to(&self, capability: OperatorCapability) -> bool {
        (**self).belongs_to(capability)
    }
}
