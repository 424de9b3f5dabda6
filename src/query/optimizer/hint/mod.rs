//! 优化器提示模块
//!
//! 判断提示能否传播到计划节点：
//!
//! - `rel_hint` - 提示实例（名称与参数）
//! - `hint_predicate` - 提示谓词特征
//! - `node_category` - 按节点分类判断的谓词
//! - `hint_predicates` - 常用谓词与组合谓词
//! - `hint_strategy` - 按提示名称注册谓词的策略表

pub mod hint_predicate;
pub mod hint_predicates;
pub mod hint_strategy;
pub mod node_category;
pub mod rel_hint;

pub use hint_predicate::HintPredicate;
pub use hint_predicates::{Composition, CompositeHintPredicate, HintPredicates};
pub use hint_strategy::{HintStrategy, HintStrategyTable, HintStrategyTableBuilder};
pub use node_category::{NodeCategoryPredicate, PlanNodeCategory};
pub use rel_hint::{RelHint, RelHintBuilder};
