use std::sync::Arc;

use crate::column::common::{ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Float64型の列を表す構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Float64Column {
    pub(crate) data: Arc<[f64]>,
    pub(crate) name: Option<String>,
}

impl Float64Column {
    /// 新しいFloat64Columnを作成する
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: data.into(),
            name: None,
        }
    }

    /// 名前付きのFloat64Columnを作成する
    pub fn with_name(data: Vec<f64>, name: impl Into<String>) -> Self {
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
    pub fn get(&self, index: usize) -> Result<f64> {
        self.data.get(index).copied().ok_or(Error::IndexOutOfBounds {
            index,
            size: self.data.len(),
        })
    }

    /// 値のスライスを取得する
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

impl ColumnTrait for Float64Column {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Float64
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
