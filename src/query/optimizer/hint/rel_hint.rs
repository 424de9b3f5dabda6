//! 关系表达式提示
//!
//! 提示附着在计划子树上，由提示名称与可选参数组成。
//! 参数有两种形式：列表参数 `NAME(a, b)` 与键值参数 `NAME(k='v')`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 关系表达式提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelHint {
    pub hint_name: String,
    /// 从提示声明处到当前节点的输入下标路径
    pub inherit_path: Vec<usize>,
    pub list_options: Vec<String>,
    pub kv_options: BTreeMap<String, String>,
}

impl RelHint {
    pub fn builder(hint_name: impl Into<String>) -> RelHintBuilder {
        RelHintBuilder {
            hint_name: hint_name.into(),
            inherit_path: Vec::new(),
            list_options: Vec::new(),
            kv_options: BTreeMap::new(),
        }
    }

    /// 以新的继承路径复制提示
    pub fn copy(&self, inherit_path: Vec<usize>) -> Self {
        Self {
            inherit_path,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for RelHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hint_name)?;
        if !self.list_options.is_empty() {
            write!(f, "({})", self.list_options.join(", "))?;
        } else if !self.kv_options.is_empty() {
            let options: Vec<String> = self
                .kv_options
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            write!(f, "({})", options.join(", "))?;
        }
        Ok(())
    }
}

/// RelHint 构建器
#[derive(Debug, Clone)]
pub struct RelHintBuilder {
    hint_name: String,
    inherit_path: Vec<usize>,
    list_options: Vec<String>,
    kv_options: BTreeMap<String, String>,
}

impl RelHintBuilder {
    pub fn inherit_path(mut self, path: Vec<usize>) -> Self {
        self.inherit_path = path;
        self
    }

    pub fn hint_option(mut self, option: impl Into<String>) -> Self {
        self.list_options.push(option.into());
        self
    }

    pub fn hint_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_options.extend(options.into_iter().map(Into::into));
        self
    }

    pub fn kv_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.kv_options.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> RelHint {
        RelHint {
            hint_name: self.hint_name,
            inherit_path: self.inherit_path,
            list_options: self.list_options,
            kv_options: self.kv_options,
        }
    }
}
