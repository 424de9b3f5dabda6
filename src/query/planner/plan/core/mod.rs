pub mod nodes;
pub mod node_id_generator;

pub use node_id_generator::{NodeIdGenerator, next_node_id};
pub use nodes::{OperatorCapability, PlanNode, PlanNodeKind, RelNode};
