//! 计划节点类型定义
//!
//! 以封闭的标签集合描述关系算子的具体类型，并按算子族（能力标记）分组，
//! 便于优化器在不读取节点字段的情况下判断节点所属的算子类别

/// 算子能力标记
///
/// 标识"该节点是否属于某一类关系算子"。`Any` 为通用标记，所有节点都属于它
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCapability {
    /// 通用标记 - 匹配任意节点
    Any,
    /// 连接
    Join,
    /// 表扫描
    TableScan,
    /// 投影
    Project,
    /// 聚合
    Aggregate,
    /// 计算（投影与过滤的组合）
    Calc,
    /// 关联子查询
    Correlate,
    /// 过滤
    Filter,
    /// 集合操作（Union、Intersect、Minus）
    SetOp,
    /// 排序
    Sort,
    /// 常量行
    Values,
    /// 窗口
    Window,
    /// 快照
    Snapshot,
    /// 表函数扫描
    TableFunctionScan,
}

impl OperatorCapability {
    /// 获取能力标记名称
    pub fn name(&self) -> &'static str {
        match self {
            OperatorCapability::Any => "Any",
            OperatorCapability::Join => "Join",
            OperatorCapability::TableScan => "TableScan",
            OperatorCapability::Project => "Project",
            OperatorCapability::Aggregate => "Aggregate",
            OperatorCapability::Calc => "Calc",
            OperatorCapability::Correlate => "Correlate",
            OperatorCapability::Filter => "Filter",
            OperatorCapability::SetOp => "SetOp",
            OperatorCapability::Sort => "Sort",
            OperatorCapability::Values => "Values",
            OperatorCapability::Window => "Window",
            OperatorCapability::Snapshot => "Snapshot",
            OperatorCapability::TableFunctionScan => "TableFunctionScan",
        }
    }
}

impl std::fmt::Display for OperatorCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 计划节点类型枚举
///
/// 特化实现（如哈希连接）与其基础算子共享同一算子族，
/// 因此按算子族匹配时特化类型同样命中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanNodeKind {
    /// 逻辑连接
    LogicalJoin,
    /// 哈希连接
    HashJoin,
    /// 嵌套循环连接
    NestedLoopJoin,
    /// 归并连接
    MergeJoin,
    /// 半连接
    SemiJoin,
    /// 表扫描
    TableScan,
    /// 索引扫描
    IndexScan,
    /// 表函数扫描
    TableFunctionScan,
    /// 投影
    Project,
    /// 过滤
    Filter,
    /// 计算
    Calc,
    /// 聚合
    Aggregate,
    /// 哈希聚合
    HashAggregate,
    /// 排序聚合
    SortAggregate,
    /// 关联
    Correlate,
    /// 并集
    Union,
    /// 交集
    Intersect,
    /// 差集
    Minus,
    /// 排序
    Sort,
    /// TopN
    TopN,
    /// 常量行
    Values,
    /// 窗口
    Window,
    /// 快照
    Snapshot,
    /// 限制
    Limit,
    /// 数据交换
    Exchange,
}

impl PlanNodeKind {
    /// 获取节点所属的算子族
    ///
    /// 不属于任何可提示算子族的节点返回 `None`
    pub fn family(&self) -> Option<OperatorCapability> {
        match self {
            PlanNodeKind::LogicalJoin
            | PlanNodeKind::HashJoin
            | PlanNodeKind::NestedLoopJoin
            | PlanNodeKind::MergeJoin
            | PlanNodeKind::SemiJoin => Some(OperatorCapability::Join),
            PlanNodeKind::TableScan | PlanNodeKind::IndexScan => {
                Some(OperatorCapability::TableScan)
            }
            PlanNodeKind::TableFunctionScan => Some(OperatorCapability::TableFunctionScan),
            PlanNodeKind::Project => Some(OperatorCapability::Project),
            PlanNodeKind::Filter => Some(OperatorCapability::Filter),
            PlanNodeKind::Calc => Some(OperatorCapability::Calc),
            PlanNodeKind::Aggregate | PlanNodeKind::HashAggregate | PlanNodeKind::SortAggregate => {
                Some(OperatorCapability::Aggregate)
            }
            PlanNodeKind::Correlate => Some(OperatorCapability::Correlate),
            PlanNodeKind::Union | PlanNodeKind::Intersect | PlanNodeKind::Minus => {
                Some(OperatorCapability::SetOp)
            }
            PlanNodeKind::Sort | PlanNodeKind::TopN => Some(OperatorCapability::Sort),
            PlanNodeKind::Values => Some(OperatorCapability::Values),
            PlanNodeKind::Window => Some(OperatorCapability::Window),
            PlanNodeKind::Snapshot => Some(OperatorCapability::Snapshot),
            PlanNodeKind::Limit | PlanNodeKind::Exchange => None,
        }
    }

    /// 判断节点是否属于给定的算子能力（包含特化子类型）
    pub fn belongs_to(&self, capability: OperatorCapability) -> bool {
        capability == OperatorCapability::Any || self.family() == Some(capability)
    }

    pub fn is_join(&self) -> bool {
        self.belongs_to(OperatorCapability::Join)
    }

    pub fn is_set_operation(&self) -> bool {
        self.belongs_to(OperatorCapability::SetOp)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PlanNodeKind::LogicalJoin => "LogicalJoin",
            PlanNodeKind::HashJoin => "HashJoin",
            PlanNodeKind::NestedLoopJoin => "NestedLoopJoin",
            PlanNodeKind::MergeJoin => "MergeJoin",
            PlanNodeKind::SemiJoin => "SemiJoin",
            PlanNodeKind::TableScan => "TableScan",
            PlanNodeKind::IndexScan => "IndexScan",
            PlanNodeKind::TableFunctionScan => "TableFunctionScan",
            PlanNodeKind::Project => "Project",
            PlanNodeKind::Filter => "Filter",
            PlanNodeKind::Calc => "Calc",
            PlanNodeKind::Aggregate => "Aggregate",
            PlanNodeKind::HashAggregate => "HashAggregate",
            PlanNodeKind::SortAggregate => "SortAggregate",
            PlanNodeKind::Correlate => "Correlate",
            PlanNodeKind::Union => "Union",
            PlanNodeKind::Intersect => "Intersect",
            PlanNodeKind::Minus => "Minus",
            PlanNodeKind::Sort => "Sort",
            PlanNodeKind::TopN => "TopN",
            PlanNodeKind::Values => "Values",
            PlanNodeKind::Window => "Window",
            PlanNodeKind::Snapshot => "Snapshot",
            PlanNodeKind::Limit => "Limit",
            PlanNodeKind::Exchange => "Exchange",
        }
    }

    /// 全部节点类型
    pub const ALL: [PlanNodeKind; 25] = [
        PlanNodeKind::LogicalJoin,
        PlanNodeKind::HashJoin,
        PlanNodeKind::NestedLoopJoin,
        PlanNodeKind::MergeJoin,
        PlanNodeKind::SemiJoin,
        PlanNodeKind::TableScan,
        PlanNodeKind::IndexScan,
        PlanNodeKind::TableFunctionScan,
        PlanNodeKind::Project,
        PlanNodeKind::Filter,
        PlanNodeKind::Calc,
        PlanNodeKind::Aggregate,
        PlanNodeKind::HashAggregate,
        PlanNodeKind::SortAggregate,
        PlanNodeKind::Correlate,
        PlanNodeKind::Union,
        PlanNodeKind::Intersect,
        PlanNodeKind::Minus,
        PlanNodeKind::Sort,
        PlanNodeKind::TopN,
        PlanNodeKind::Values,
        PlanNodeKind::Window,
        PlanNodeKind::Snapshot,
        PlanNodeKind::Limit,
        PlanNodeKind::Exchange,
    ];
}

impl std::fmt::Display for PlanNodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
