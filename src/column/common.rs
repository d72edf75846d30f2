use std::fmt::Debug;

use crate::column::{Float64Column, Int64Column, StringColumn};

/// 列の型を識別するための列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int64,
    Float64,
    String,
}

/// 列の共通操作を定義するトレイト
pub trait ColumnTrait: Debug + Send + Sync {
    /// 列の長さを返す
    fn len(&self) -> usize;

    /// 列が空かどうかを返す
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 列の型を返す
    fn column_type(&self) -> ColumnType;

    /// 列の名前を返す
    fn name(&self) -> Option<&str>;
}

/// 列を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int64(Int64Column),
    Float64(Float64Column),
    String(StringColumn),
}

impl Column {
    /// 列の長さを返す
    pub fn len(&self) -> usize {
        match self {
            Column::Int64(col) => col.len(),
            Column::Float64(col) => col.len(),
            Column::String(col) => col.len(),
        }
    }

    /// 列が空かどうかを返す
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 列の型を返す
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Int64(col) => col.column_type(),
            Column::Float64(col) => col.column_type(),
            Column::String(col) => col.column_type(),
        }
    }

    /// 列の名前を返す
    pub fn name(&self) -> Option<&str> {
        match self {
            Column::Int64(col) => ColumnTrait::name(col),
            Column::Float64(col) => ColumnTrait::name(col),
            Column::String(col) => ColumnTrait::name(col),
        }
    }

    /// 行の値をCSV/表示用の文字列に変換する
    pub(crate) fn render(&self, row: usize) -> Option<String> {
        match self {
            Column::Int64(col) => col.values().get(row).map(|v| v.to_string()),
            // Debug keeps the decimal point for integral floats (20.0, not 20)
            Column::Float64(col) => col.values().get(row).map(|v| format!("{:?}", v)),
            Column::String(col) => col.values().get(row).cloned(),
        }
    }
}

// 型変換のFrom実装
impl From<Int64Column> for Column {
    fn from(col: Int64Column) -> Self {
        Column::Int64(col)
    }
}

impl From<Float64Column> for Column {
    fn from(col: Float64Column) -> Self {
        Column::Float64(col)
    }
}

impl From<StringColumn> for Column {
    fn from(col: StringColumn) -> Self {
        Column::String(col)
    }
}
