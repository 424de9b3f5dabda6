//! 查询优化器模块
//!
//! ## 模块结构
//!
//! - `hint` - 优化器提示，判断提示能否传播到计划节点
//!
//! ## 使用示例
//!
//! ```rust
//! use relhint::query::optimizer::{HintPredicates, HintStrategyTable, RelHint};
//! use relhint::query::planner::RelNode;
//!
//! let table = HintStrategyTable::builder()
//!     .hint_strategy("USE_HASH_JOIN", HintPredicates::join())
//!     .build()
//!     .expect("策略表构建失败");
//!
//! let join = RelNode::join(RelNode::scan(), RelNode::scan());
//! let hints = vec![RelHint::builder("USE_HASH_JOIN").build()];
//! assert_eq!(table.apply(&hints, &join).len(), 1);
//! ```

pub mod hint;

// 重新导出主要类型
pub use hint::{
    CompositeHintPredicate, Composition, HintPredicate, HintPredicates, HintStrategy,
    HintStrategyTable, HintStrategyTableBuilder, NodeCategoryPredicate, PlanNodeCategory, RelHint,
    RelHintBuilder,
};
