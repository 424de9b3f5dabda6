use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::core::error::{HintError, HintResult};
use crate::query::optimizer::hint::{HintStrategyTable, NodeCategoryPredicate, PlanNodeCategory};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "relhint".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 单个提示策略的配置
///
/// `category` 缺失时在构建策略表阶段报错
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HintStrategyConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PlanNodeCategory>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub hints: Vec<HintStrategyConfig>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Config::from_toml_str(&content)?)
    }

    pub fn from_toml_str(content: &str) -> HintResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 按配置构建提示策略表
    ///
    /// 任一提示缺少节点分类都会使整个构建失败
    pub fn build_strategy_table(&self) -> HintResult<HintStrategyTable> {
        let mut builder = HintStrategyTable::builder();
        for entry in &self.hints {
            let predicate = NodeCategoryPredicate::try_new(entry.category)
                .map_err(|_| HintError::MissingNodeCategory(entry.name.clone()))?;
            builder = builder.hint_strategy(entry.name.clone(), Arc::new(predicate));
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.max_files, 5);
        assert!(config.hints.is_empty());
    }

    #[test]
    fn test_config_parse_hints() {
        let config = Config::from_toml_str(
            r#"
            [log]
            level = "debug"

            [[hints]]
            name = "USE_HASH_JOIN"
            category = "JOIN"

            [[hints]]
            name = "SET_VAR"
            category = "set_var"
            "#,
        )
        .expect("解析配置失败");

        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.dir, "logs");
        assert_eq!(config.hints.len(), 2);
        assert_eq!(config.hints[0].category, Some(PlanNodeCategory::Join));
        assert_eq!(config.hints[1].category, Some(PlanNodeCategory::QueryScopeOnly));
    }

    #[test]
    fn test_unknown_category_is_config_error() {
        let result = Config::from_toml_str(
            r#"
            [[hints]]
            name = "MERGE"
            category = "MERGE_JOIN"
            "#,
        );
        assert!(matches!(result, Err(HintError::Config(_))));
    }

    #[test]
    fn test_missing_category_fails_table_build() {
        let config = Config::from_toml_str(
            r#"
            [[hints]]
            name = "INDEX"
            category = "TABLE_SCAN"

            [[hints]]
            name = "BROADCAST"
            "#,
        )
        .expect("解析配置失败");

        assert_eq!(
            config.build_strategy_table().err(),
            Some(HintError::MissingNodeCategory("BROADCAST".to_string()))
        );
    }

    #[test]
    fn test_config_load_save() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.hints.push(HintStrategyConfig {
            name: "INDEX".to_string(),
            category: Some(PlanNodeCategory::TableScan),
        });
        let toml_content =
            toml::to_string_pretty(&config).expect("Failed to serialize config to TOML");
        temp_file
            .write_all(toml_content.as_bytes())
            .expect("Failed to write TOML content to temporary file");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config, loaded_config);

        let table = loaded_config
            .build_strategy_table()
            .expect("Failed to build strategy table");
        assert!(table.contains("index"));
    }
}
