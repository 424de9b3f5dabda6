//! 提示策略表
//!
//! 以提示名称注册提示策略，并按策略中的谓词筛选可附着到某个节点的提示。
//! 提示名称不区分大小写

use std::collections::HashMap;
use std::sync::Arc;

use super::hint_predicate::HintPredicate;
use super::rel_hint::RelHint;
use crate::core::error::{HintError, HintResult};
use crate::query::planner::plan::core::nodes::PlanNode;

/// 提示策略
#[derive(Debug, Clone)]
pub struct HintStrategy {
    predicate: Arc<dyn HintPredicate>,
}

impl HintStrategy {
    pub fn new(predicate: Arc<dyn HintPredicate>) -> Self {
        Self { predicate }
    }

    pub fn predicate(&self) -> &Arc<dyn HintPredicate> {
        &self.predicate
    }
}

/// 提示策略表
#[derive(Debug, Clone, Default)]
pub struct HintStrategyTable {
    strategies: HashMap<String, HintStrategy>,
}

impl HintStrategyTable {
    pub fn builder() -> HintStrategyTableBuilder {
        HintStrategyTableBuilder::default()
    }

    /// 空策略表，不接受任何提示
    pub fn empty() -> Self {
        Self::default()
    }

    fn key(hint_name: &str) -> String {
        hint_name.to_ascii_lowercase()
    }

    pub fn contains(&self, hint_name: &str) -> bool {
        self.strategies.contains_key(&Self::key(hint_name))
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// 判断提示能否附着到节点
    ///
    /// 未注册的提示返回 false
    pub fn can_apply(&self, hint: &RelHint, node: &dyn PlanNode) -> bool {
        match self.strategies.get(&Self::key(&hint.hint_name)) {
            Some(strategy) => {
                let accepted = strategy.predicate.apply(hint, node);
                log::debug!(
                    "提示 {} {} 节点 {}#{}",
                    hint.hint_name,
                    if accepted { "接受" } else { "拒绝" },
                    node.name(),
                    node.id()
                );
                accepted
            }
            None => {
                log::warn!("提示 {} 未注册，忽略", hint.hint_name);
                false
            }
        }
    }

    /// 筛选出可附着到节点的提示，保持输入顺序
    pub fn apply(&self, hints: &[RelHint], node: &dyn PlanNode) -> Vec<RelHint> {
        hints
            .iter()
            .filter(|hint| self.can_apply(hint, node))
            .cloned()
            .collect()
    }
}

/// HintStrategyTable 构建器
#[derive(Debug, Default)]
pub struct HintStrategyTableBuilder {
    entries: Vec<(String, HintStrategy)>,
}

impl HintStrategyTableBuilder {
    pub fn hint_strategy(
        mut self,
        hint_name: impl Into<String>,
        predicate: Arc<dyn HintPredicate>,
    ) -> Self {
        self.entries
            .push((hint_name.into(), HintStrategy::new(predicate)));
        self
    }

    /// 构建策略表，重复的提示名称返回错误
    pub fn build(self) -> HintResult<HintStrategyTable> {
        let mut strategies = HashMap::with_capacity(self.entries.len());
        for (name, strategy) in self.entries {
            let key = HintStrategyTable::key(&name);
            if strategies.insert(key, strategy).is_some() {
                return Err(HintError::DuplicateHintStrategy(name));
            }
        }
        log::info!("提示策略表构建完成，共 {} 个策略", strategies.len());
        Ok(HintStrategyTable { strategies })
    }
}
