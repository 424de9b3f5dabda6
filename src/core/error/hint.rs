//! 提示错误类型
//!
//! 定义优化器提示框架相关的错误类型，包括：
//! - 非法参数（如缺失节点分类）
//! - 节点分类名称解析错误
//! - 提示策略注册错误
//! - 配置错误

use thiserror::Error;

/// 提示框架错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    /// 非法参数
    #[error("非法参数: {0}")]
    InvalidArgument(String),

    /// 未知的节点分类名称
    #[error("未知的节点分类: {0}")]
    UnknownNodeCategory(String),

    /// 提示定义缺少节点分类
    #[error("提示 {0} 缺少节点分类")]
    MissingNodeCategory(String),

    /// 重复注册的提示策略
    #[error("重复的提示策略: {0}")]
    DuplicateHintStrategy(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

/// 提示框架结果类型
pub type HintResult<T> = Result<T, HintError>;

impl From<toml::de::Error> for HintError {
    fn from(err: toml::de::Error) -> Self {
        HintError::Config(err.to_string())
    }
}
