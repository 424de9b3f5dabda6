//! 节点分类提示谓词
//!
//! 提示声明它可以作用的关系算子分类，谓词据此判断提示能否传播到某个节点：
//! - `QueryScopeOnly`（即 `SET_VAR`）作用于整个查询，类似会话级配置，永不传播
//! - 其余分类按算子能力匹配，特化子类型（如哈希连接之于连接）同样命中

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::hint_predicate::HintPredicate;
use super::rel_hint::RelHint;
use crate::core::error::{HintError, HintResult};
use crate::query::planner::plan::core::nodes::{OperatorCapability, PlanNode};

/// 提示可以传播到的计划节点分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlanNodeCategory {
    /// 作用于整个查询，永不传播
    QueryScopeOnly,
    /// 传播到连接节点
    Join,
    /// 传播到表扫描节点
    TableScan,
    /// 传播到投影节点
    Project,
    /// 传播到聚合节点
    Aggregate,
    /// 传播到计算节点
    Calc,
    /// 传播到关联节点
    Correlate,
    /// 传播到过滤节点
    Filter,
    /// 传播到集合操作节点（Union、Intersect、Minus）
    SetOperation,
    /// 传播到排序节点
    Sort,
    /// 传播到常量行节点
    Values,
    /// 传播到窗口节点
    Window,
    /// 传播到快照节点
    Snapshot,
    /// 传播到表函数扫描节点
    TableFunctionScan,
}

impl PlanNodeCategory {
    /// 全部分类
    pub const ALL: [PlanNodeCategory; 14] = [
        PlanNodeCategory::QueryScopeOnly,
        PlanNodeCategory::Join,
        PlanNodeCategory::TableScan,
        PlanNodeCategory::Project,
        PlanNodeCategory::Aggregate,
        PlanNodeCategory::Calc,
        PlanNodeCategory::Correlate,
        PlanNodeCategory::Filter,
        PlanNodeCategory::SetOperation,
        PlanNodeCategory::Sort,
        PlanNodeCategory::Values,
        PlanNodeCategory::Window,
        PlanNodeCategory::Snapshot,
        PlanNodeCategory::TableFunctionScan,
    ];

    /// 获取分类对应的算子能力
    pub fn capability(&self) -> OperatorCapability {
        match self {
            PlanNodeCategory::QueryScopeOnly => OperatorCapability::Any,
            PlanNodeCategory::Join => OperatorCapability::Join,
            PlanNodeCategory::TableScan => OperatorCapability::TableScan,
            PlanNodeCategory::Project => OperatorCapability::Project,
            PlanNodeCategory::Aggregate => OperatorCapability::Aggregate,
            PlanNodeCategory::Calc => OperatorCapability::Calc,
            PlanNodeCategory::Correlate => OperatorCapability::Correlate,
            PlanNodeCategory::Filter => OperatorCapability::Filter,
            PlanNodeCategory::SetOperation => OperatorCapability::SetOp,
            PlanNodeCategory::Sort => OperatorCapability::Sort,
            PlanNodeCategory::Values => OperatorCapability::Values,
            PlanNodeCategory::Window => OperatorCapability::Window,
            PlanNodeCategory::Snapshot => OperatorCapability::Snapshot,
            PlanNodeCategory::TableFunctionScan => OperatorCapability::TableFunctionScan,
        }
    }

    /// 该分类的提示是否永不传播
    pub fn never_propagates(&self) -> bool {
        matches!(self, PlanNodeCategory::QueryScopeOnly)
    }

    /// 获取分类名称
    pub fn name(&self) -> &'static str {
        match self {
            PlanNodeCategory::QueryScopeOnly => "SET_VAR",
            PlanNodeCategory::Join => "JOIN",
            PlanNodeCategory::TableScan => "TABLE_SCAN",
            PlanNodeCategory::Project => "PROJECT",
            PlanNodeCategory::Aggregate => "AGGREGATE",
            PlanNodeCategory::Calc => "CALC",
            PlanNodeCategory::Correlate => "CORRELATE",
            PlanNodeCategory::Filter => "FILTER",
            PlanNodeCategory::SetOperation => "SETOP",
            PlanNodeCategory::Sort => "SORT",
            PlanNodeCategory::Values => "VALUES",
            PlanNodeCategory::Window => "WINDOW",
            PlanNodeCategory::Snapshot => "SNAPSHOT",
            PlanNodeCategory::TableFunctionScan => "TABLE_FUNCTION_SCAN",
        }
    }
}

impl std::fmt::Display for PlanNodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PlanNodeCategory {
    type Err = HintError;

    /// 解析分类名称，不区分大小写，`-` 与 `_` 等价
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "SET_VAR" | "QUERY_SCOPE_ONLY" => Ok(PlanNodeCategory::QueryScopeOnly),
            "JOIN" => Ok(PlanNodeCategory::Join),
            "TABLE_SCAN" => Ok(PlanNodeCategory::TableScan),
            "PROJECT" => Ok(PlanNodeCategory::Project),
            "AGGREGATE" => Ok(PlanNodeCategory::Aggregate),
            "CALC" => Ok(PlanNodeCategory::Calc),
            "CORRELATE" => Ok(PlanNodeCategory::Correlate),
            "FILTER" => Ok(PlanNodeCategory::Filter),
            "SETOP" | "SET_OPERATION" => Ok(PlanNodeCategory::SetOperation),
            "SORT" => Ok(PlanNodeCategory::Sort),
            "VALUES" => Ok(PlanNodeCategory::Values),
            "WINDOW" => Ok(PlanNodeCategory::Window),
            "SNAPSHOT" => Ok(PlanNodeCategory::Snapshot),
            "TABLE_FUNCTION_SCAN" => Ok(PlanNodeCategory::TableFunctionScan),
            _ => Err(HintError::UnknownNodeCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for PlanNodeCategory {
    type Error = HintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlanNodeCategory> for String {
    fn from(category: PlanNodeCategory) -> Self {
        category.name().to_string()
    }
}

/// 按节点分类判断提示能否传播的谓词
///
/// 构造后不可变，可在多个计划遍历间并发共享
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCategoryPredicate {
    category: PlanNodeCategory,
}

impl NodeCategoryPredicate {
    pub fn new(category: PlanNodeCategory) -> Self {
        Self { category }
    }

    /// 从可能缺失的分类构造谓词
    ///
    /// 分类是必需的，缺失时返回 `HintError::InvalidArgument`
    pub fn try_new(category: Option<PlanNodeCategory>) -> HintResult<Self> {
        category
            .map(Self::new)
            .ok_or_else(|| HintError::InvalidArgument("nodeCategory 不能为空".to_string()))
    }

    pub fn category(&self) -> PlanNodeCategory {
        self.category
    }
}

impl From<PlanNodeCategory> for NodeCategoryPredicate {
    fn from(category: PlanNodeCategory) -> Self {
        Self::new(category)
    }
}

impl HintPredicate for NodeCategoryPredicate {
    fn apply(&self, _hint: &RelHint, node: &dyn PlanNode) -> bool {
        if self.category.never_propagates() {
            return false;
        }
        node.belongs_to(self.category.capability())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::planner::plan::core::nodes::{PlanNodeKind, RelNode};

    fn hint() -> RelHint {
        RelHint::builder("TEST_HINT").build()
    }

    #[test]
    fn test_join_matches_join_node() {
        let predicate = NodeCategoryPredicate::new(PlanNodeCategory::Join);
        let join = RelNode::join(RelNode::scan(), RelNode::scan());
        assert!(predicate.apply(&hint(), &join));
    }

    #[test]
    fn test_join_rejects_filter_node() {
        let predicate = NodeCategoryPredicate::new(PlanNodeCategory::Join);
        let filter = RelNode::filter(RelNode::scan());
        assert!(!predicate.apply(&hint(), &filter));
    }

    #[test]
    fn test_query_scope_never_propagates() {
        let predicate = NodeCategoryPredicate::new(PlanNodeCategory::QueryScopeOnly);
        for kind in PlanNodeKind::ALL {
            let node = RelNode::leaf(kind);
            assert!(!predicate.apply(&hint(), &node), "SET_VAR 不应传播到 {}", kind);
        }
    }

    #[test]
    fn test_set_operation_matches_union_and_intersect() {
        let predicate = NodeCategoryPredicate::new(PlanNodeCategory::SetOperation);
        let union = RelNode::union(vec![RelNode::scan(), RelNode::scan()]);
        let intersect = RelNode::intersect(vec![RelNode::scan(), RelNode::scan()]);
        let minus = RelNode::minus(vec![RelNode::scan(), RelNode::scan()]);
        assert!(predicate.apply(&hint(), &union));
        assert!(predicate.apply(&hint(), &intersect));
        assert!(predicate.apply(&hint(), &minus));
    }

    #[test]
    fn test_table_scan_matches_specialized_scan() {
        let predicate = NodeCategoryPredicate::new(PlanNodeCategory::TableScan);
        assert!(predicate.apply(&hint(), &RelNode::leaf(PlanNodeKind::IndexScan)));
        assert!(!predicate.apply(&hint(), &RelNode::leaf(PlanNodeKind::TableFunctionScan)));
    }

    #[test]
    fn test_try_new_rejects_missing_category() {
        let result = NodeCategoryPredicate::try_new(None);
        assert!(matches!(result, Err(HintError::InvalidArgument(_))));

        let predicate = NodeCategoryPredicate::try_new(Some(PlanNodeCategory::Sort))
            .expect("分类存在时应构造成功");
        assert_eq!(predicate.category(), PlanNodeCategory::Sort);
    }

    #[test]
    fn test_only_query_scope_maps_to_any() {
        for category in PlanNodeCategory::ALL {
            let is_any = category.capability() == OperatorCapability::Any;
            assert_eq!(is_any, category.never_propagates(), "{}", category);
        }
    }

    #[test]
    fn test_parse_category_names() {
        assert_eq!("SET_VAR".parse::<PlanNodeCategory>(), Ok(PlanNodeCategory::QueryScopeOnly));
        assert_eq!("join".parse::<PlanNodeCategory>(), Ok(PlanNodeCategory::Join));
        assert_eq!("set_operation".parse::<PlanNodeCategory>(), Ok(PlanNodeCategory::SetOperation));
        assert_eq!(
            "table-function-scan".parse::<PlanNodeCategory>(),
            Ok(PlanNodeCategory::TableFunctionScan)
        );
        assert!(matches!(
            "MERGE".parse::<PlanNodeCategory>(),
            Err(HintError::UnknownNodeCategory(_))
        ));
    }

    #[test]
    fn test_name_round_trip() {
        for category in PlanNodeCategory::ALL {
            assert_eq!(category.name().parse::<PlanNodeCategory>(), Ok(category));
        }
    }
}
