pub mod plan_node_kind;
pub mod plan_node_traits;
pub mod rel_node;

pub use plan_node_kind::{OperatorCapability, PlanNodeKind};
pub use plan_node_traits::PlanNode;
pub use rel_node::RelNode;
