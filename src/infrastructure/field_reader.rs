//! 字段读取能力 - 基础设施层
//!
//! 宿主界面只需要提供“按名字读字段”的能力

use std::collections::HashMap;

/// 字段读取能力
///
/// 职责：
/// - 按字段名返回原始文本
/// - 字段不存在时返回 `None`
/// - 不做任何校验
pub trait FieldReader: Send + Sync {
    fn read(&self, name: &str) -> Option<String>;
}

/// 基于内存 Map 的字段读取器
#[derive(Debug, Clone, Default)]
pub struct MapFieldReader {
    fields: HashMap<String, String>,
}

impl MapFieldReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置字段值（链式调用）
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }
}

impl FieldReader for MapFieldReader {
    fn read(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapFieldReader
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_field_is_none() {
        let mut reader = MapFieldReader::new().with("firm", "Acme");
        reader.set("locations", "Paris/Lyon");

        assert_eq!(reader.read("firm").as_deref(), Some("Acme"));
        assert_eq!(reader.read("locations").as_deref(), Some("Paris/Lyon"));
        assert_eq!(reader.read("max_duration"), None);
    }
}
