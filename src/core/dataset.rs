use std::sync::Arc;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{WorkbenchError, WorkbenchResult};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl Cell {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Bool(value) => Some(f64::from(u8::from(*value))),
            _ => None,
        }
    }

    /// Grouping key; numbers and text share one space the way a legend does.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::DateTime(value) => value.format(DATETIME_FORMAT).to_string(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(value) => Value::Bool(*value),
            Self::Int(value) => Value::from(*value),
            Self::Float(value) => serde_json::Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Text(value) => Value::String(value.clone()),
            Self::DateTime(value) => Value::String(value.format(DATETIME_FORMAT).to_string()),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Boolean,
    Temporal,
    Text,
    Mixed,
    Empty,
}

impl ColumnKind {
    /// Numeric columns color continuously; everything else groups.
    #[must_use]
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::Numeric)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn from_values<T: Into<Cell>>(name: impl Into<String>, values: Vec<T>) -> Self {
        Self::new(name, values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn kind(&self) -> ColumnKind {
        let mut kind = ColumnKind::Empty;
        for cell in self.cells.iter().filter(|cell| !cell.is_null()) {
            let cell_kind = match cell {
                Cell::Int(_) | Cell::Float(_) => ColumnKind::Numeric,
                Cell::Bool(_) => ColumnKind::Boolean,
                Cell::DateTime(_) => ColumnKind::Temporal,
                Cell::Text(_) => ColumnKind::Text,
                Cell::Null => continue,
            };
            kind = match kind {
                ColumnKind::Empty => cell_kind,
                current if current == cell_kind => current,
                _ => return ColumnKind::Mixed,
            };
        }
        kind
    }

    /// Distinct non-null values in first-appearance order.
    #[must_use]
    pub fn distinct(&self) -> Vec<String> {
        let mut seen = IndexMap::new();
        for cell in self.cells.iter().filter(|cell| !cell.is_null()) {
            seen.entry(cell.display()).or_insert(());
        }
        seen.into_keys().collect()
    }
}

/// In-memory table a panel charts from.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    columns: Vec<Column>,
    columns_name: Option<String>,
    row_count: usize,
}

impl Dataset {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> WorkbenchResult<Self> {
        let name = name.into();
        let row_count = columns.first().map_or(0, Column::len);
        for column in &columns {
            if column.len() != row_count {
                return Err(WorkbenchError::InvalidData(format!(
                    "column `{}` in dataset `{name}` has {} rows, expected {row_count}",
                    column.name,
                    column.len()
                )));
            }
        }
        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|other| other.name == column.name) {
                return Err(WorkbenchError::InvalidData(format!(
                    "duplicate column `{}` in dataset `{name}`",
                    column.name
                )));
            }
        }
        Ok(Self {
            name,
            columns,
            columns_name: None,
            row_count,
        })
    }

    /// Names the column index, which then also counts as a selectable column.
    #[must_use]
    pub fn with_columns_name(mut self, columns_name: impl Into<String>) -> Self {
        self.columns_name = Some(columns_name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn columns_name(&self) -> Option<&str> {
        self.columns_name.as_deref()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    #[must_use]
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column(&self, name: &str) -> WorkbenchResult<&Column> {
        self.find_column(name)
            .ok_or_else(|| WorkbenchError::UnknownColumn {
                dataset: self.name.clone(),
                column: name.to_owned(),
            })
    }
}

/// Explicit name → dataset map handed to panels.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    datasets: IndexMap<String, Arc<Dataset>>,
}

impl DatasetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a dataset under its own name.
    pub fn insert(&mut self, dataset: Dataset) -> Option<Arc<Dataset>> {
        let name = dataset.name().to_owned();
        self.datasets.insert(name, Arc::new(dataset))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Dataset>> {
        self.datasets.get(name).cloned()
    }

    pub fn resolve(&self, name: &str) -> WorkbenchResult<Arc<Dataset>> {
        self.get(name)
            .ok_or_else(|| WorkbenchError::UnknownDataset(name.to_owned()))
    }

    /// Sorted dataset names, as offered in the dataset selector.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.datasets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Column, ColumnKind, Dataset, DatasetRegistry};

    fn sample() -> Dataset {
        Dataset::new(
            "sales",
            vec![
                Column::from_values("region", vec!["north", "south", "north"]),
                Column::from_values("units", vec![3_i64, 5, 8]),
                Column::from_values("price", vec![1.5, 2.0, 2.5]),
            ],
        )
        .expect("valid dataset")
    }

    #[test]
    fn column_kinds_ignore_nulls() {
        let column = Column::new("v", vec![Cell::Null, Cell::Int(1), Cell::Float(2.5)]);
        assert_eq!(column.kind(), ColumnKind::Numeric);
        let mixed = Column::new("m", vec![Cell::Int(1), Cell::from("a")]);
        assert_eq!(mixed.kind(), ColumnKind::Mixed);
        assert_eq!(Column::new("e", vec![Cell::Null]).kind(), ColumnKind::Empty);
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let err = Dataset::new(
            "bad",
            vec![
                Column::from_values("a", vec![1_i64, 2]),
                Column::from_values("b", vec![1_i64]),
            ],
        );
        assert!(err.is_err());
    }

    #[test]
    fn registry_lists_names_sorted() {
        let mut registry = DatasetRegistry::new();
        registry.insert(sample());
        registry.insert(Dataset::new("accounts", Vec::new()).expect("empty dataset"));
        assert_eq!(registry.names(), vec!["accounts", "sales"]);
        assert!(registry.resolve("missing").is_err());
    }

    #[test]
    fn distinct_values_keep_first_appearance_order() {
        let dataset = sample();
        let region = dataset.column("region").expect("region column");
        assert_eq!(region.distinct(), vec!["north".to_owned(), "south".to_owned()]);
    }
}
