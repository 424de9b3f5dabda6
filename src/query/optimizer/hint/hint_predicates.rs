//! 常用提示谓词
//!
//! 为每种节点分类提供现成的谓词，并支持用 AND/OR 组合多个谓词

use std::sync::Arc;

use super::hint_predicate::HintPredicate;
use super::node_category::{NodeCategoryPredicate, PlanNodeCategory};
use super::rel_hint::RelHint;
use crate::core::error::{HintError, HintResult};
use crate::query::planner::plan::core::nodes::PlanNode;

/// 组合方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    And,
    Or,
}

/// 组合谓词
#[derive(Debug, Clone)]
pub struct CompositeHintPredicate {
    composition: Composition,
    predicates: Vec<Arc<dyn HintPredicate>>,
}

impl CompositeHintPredicate {
    pub fn new(
        composition: Composition,
        predicates: Vec<Arc<dyn HintPredicate>>,
    ) -> HintResult<Self> {
        if predicates.is_empty() {
            return Err(HintError::InvalidArgument(
                "组合谓词至少需要一个子谓词".to_string(),
            ));
        }
        Ok(Self {
            composition,
            predicates,
        })
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }
}

impl HintPredicate for CompositeHintPredicate {
    fn apply(&self, hint: &RelHint, node: &dyn PlanNode) -> bool {
        match self.composition {
            Composition::And => self.predicates.iter().all(|p| p.apply(hint, node)),
            Composition::Or => self.predicates.iter().any(|p| p.apply(hint, node)),
        }
    }
}

/// 提示谓词工厂
pub struct HintPredicates;

impl HintPredicates {
    fn of(category: PlanNodeCategory) -> Arc<dyn HintPredicate> {
        Arc::new(NodeCategoryPredicate::new(category))
    }

    /// 查询级提示，永不传播
    pub fn set_var() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::QueryScopeOnly)
    }

    pub fn join() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Join)
    }

    pub fn table_scan() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::TableScan)
    }

    pub fn project() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Project)
    }

    pub fn aggregate() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Aggregate)
    }

    pub fn calc() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Calc)
    }

    pub fn correlate() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Correlate)
    }

    pub fn filter() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Filter)
    }

    pub fn set_op() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::SetOperation)
    }

    pub fn sort() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Sort)
    }

    pub fn values() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Values)
    }

    pub fn window() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Window)
    }

    pub fn snapshot() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::Snapshot)
    }

    pub fn table_function_scan() -> Arc<dyn HintPredicate> {
        Self::of(PlanNodeCategory::TableFunctionScan)
    }

    /// 所有子谓词都满足时才满足
    pub fn and(predicates: Vec<Arc<dyn HintPredicate>>) -> HintResult<Arc<dyn HintPredicate>> {
        Ok(Arc::new(CompositeHintPredicate::new(Composition::And, predicates)?))
    }

    /// 任一子谓词满足即满足
    pub fn or(predicates: Vec<Arc<dyn HintPredicate>>) -> HintResult<Arc<dyn HintPredicate>> {
        Ok(Arc::new(CompositeHintPredicate::new(Composition::Or, predicates)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::planner::plan::core::nodes::RelNode;

    #[test]
    fn test_or_composition() {
        let predicate = HintPredicates::or(vec![HintPredicates::join(), HintPredicates::table_scan()])
            .expect("组合谓词构造失败");
        let hint = RelHint::builder("INDEX").build();

        assert!(predicate.apply(&hint, &RelNode::scan()));
        assert!(predicate.apply(&hint, &RelNode::join(RelNode::scan(), RelNode::scan())));
        assert!(!predicate.apply(&hint, &RelNode::project(RelNode::scan())));
    }

    #[test]
    fn test_and_composition() {
        let predicate = HintPredicates::and(vec![HintPredicates::join(), HintPredicates::set_var()])
            .expect("组合谓词构造失败");
        let hint = RelHint::builder("X").build();
        assert!(!predicate.apply(&hint, &RelNode::join(RelNode::scan(), RelNode::scan())));

        let predicate = HintPredicates::and(vec![HintPredicates::sort(), HintPredicates::sort()])
            .expect("组合谓词构造失败");
        assert!(predicate.apply(&hint, &RelNode::sort(RelNode::scan())));
    }

    #[test]
    fn test_empty_composition_is_rejected() {
        assert!(matches!(
            HintPredicates::and(Vec::new()),
            Err(HintError::InvalidArgument(_))
        ));
        assert!(matches!(
            CompositeHintPredicate::new(Composition::Or, Vec::new()),
            Err(HintError::InvalidArgument(_))
        ));
    }
}
