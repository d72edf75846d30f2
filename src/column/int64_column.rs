use std::sync::Arc;

use crate::column::common::{ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Int64型の列を表す構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Int64Column {
    pub(crate) data: Arc<[i64]>,
    pub(crate) name: Option<String>,
}

impl Int64Column {
    /// 新しいInt64Columnを作成する
    pub fn new(data: Vec<i64>) -> Self {
        Self {
            data: data.into(),
            name: None,
        }
    }

    /// 名前付きのInt64Columnを作成する
    pub fn with_name(data: Vec<i64>, name: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            name: Some(name.into()),
        }
    }

    /// 名前を設定する
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// インデックスでデータを取得する
    pub fn get(&self, index: usize) -> Result<i64> {
        self.data.get(index).copied().ok_or(Error::IndexOutOfBounds {
            index,
            size: self.data.len(),
        })
    }

    /// 値のスライスを取得する
    pub fn values(&self) -> &[i64] {
        &self.data
    }
}

impl ColumnTrait for Int64Column {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Int64
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
