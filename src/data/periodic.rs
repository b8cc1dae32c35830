//! # 元素周期表附表
//!
//! 元素符号 → 属性表（atomicNumber、name、atomicMass、standardState、
//! bondingType、groupBlock），用于 Cypher 原子节点的附加属性。
//! 默认使用内置的 `periodic_table.json`，也可以从外部 JSON 文件加载。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 加载，传给 `projectors/cypher.rs`
//! - 使用 `serde` / `serde_json`

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SdfError};

const BUNDLED: &str = include_str!("periodic_table.json");

/// 单个元素的属性（键按字母序）
pub type ElementData = BTreeMap<String, Value>;

/// 周期表：符号 → 属性
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PeriodicTable {
    elements: HashMap<String, ElementData>,
}

impl PeriodicTable {
    /// 加载内置数据
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SdfError::PeriodicTable(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SdfError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// 查找元素；未知符号（如 `R#`、`*`）返回 `None`
    pub fn lookup(&self, symbol: &str) -> Option<&ElementData> {
        self.elements.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// 属性值的文本形式：字符串去掉引号，其余按 JSON 输出
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_loads() {
        let table = PeriodicTable::bundled().unwrap();
        assert_eq!(table.len(), 118);

        let carbon = table.lookup("C").unwrap();
        assert_eq!(carbon["atomicNumber"], 6);
        assert_eq!(value_text(&carbon["name"]), "Carbon");
        assert_eq!(value_text(&carbon["bondingType"]), "covalent network");
        assert_eq!(value_text(&carbon["atomicMass"]), "12.0107");
        assert!(table.lookup("R#").is_none());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = PeriodicTable::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, SdfError::PeriodicTable(_)));
    }
}
