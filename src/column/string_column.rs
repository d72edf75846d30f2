use std::sync::Arc;

use crate::column::common::{ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// 文字列型の列を表す構造体
#[derive(Debug, Clone, PartialEq)]
pub struct StringColumn {
    pub(crate) data: Arc<[String]>,
    pub(crate) name: Option<String>,
}

impl StringColumn {
    /// 文字列ベクトルから新しいStringColumnを作成する
    pub fn new(data: Vec<String>) -> Self {
        Self {
            data: data.into(),
            name: None,
        }
    }

    /// 名前付きのStringColumnを作成する
    pub fn with_name(data: Vec<String>, name: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            name: Some(name.into()),
        }
    }

    /// 名前を設定する
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// インデックスで文字列を取得する
    pub fn get(&self, index: usize) -> Result<&str> {
        self.data
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            })
    }

    /// 値のスライスを取得する
    pub fn values(&self) -> &[String] {
        &self.data
    }
}

impl ColumnTrait for StringColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::String
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
