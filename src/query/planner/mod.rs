//! 计划模块
//!
//! 提供关系计划节点及其算子能力分类

pub mod plan;

pub use plan::core::{OperatorCapability, PlanNode, PlanNodeKind, RelNode};
