use serde_json::Value;

use crate::core::palette::default_qualitative_palette;
use crate::core::{Column, Dataset, KwargMap};
use crate::error::{WorkbenchError, WorkbenchResult};

/// Typed read access to constructor keywords against one dataset.
pub(super) struct Args<'a> {
    pub dataset: &'a Dataset,
    pub kwargs: &'a KwargMap,
}

impl<'a> Args<'a> {
    pub fn new(dataset: &'a Dataset, kwargs: &'a KwargMap) -> Self {
        Self { dataset, kwargs }
    }

    fn invalid(keyword: &str, reason: impl Into<String>) -> WorkbenchError {
        WorkbenchError::InvalidValue {
            keyword: keyword.to_owned(),
            reason: reason.into(),
        }
    }

    fn resolve(&self, keyword: &str, name: &str) -> WorkbenchResult<&'a Column> {
        if let Some(column) = self.dataset.find_column(name) {
            return Ok(column);
        }
        Err(match self.dataset.columns_name() {
            Some(columns_name) if columns_name == name => Self::invalid(
                keyword,
                format!("`{name}` names the column index, which has no values"),
            ),
            _ => WorkbenchError::UnknownColumn {
                dataset: self.dataset.name().to_owned(),
                column: name.to_owned(),
            },
        })
    }

    /// Single column reference; a one-element list is accepted too.
    pub fn column(&self, keyword: &str) -> WorkbenchResult<Option<&'a Column>> {
        match self.kwargs.get(keyword) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(name)) => self.resolve(keyword, name).map(Some),
            Some(Value::Array(items)) if items.len() == 1 => match &items[0] {
                Value::String(name) => self.resolve(keyword, name).map(Some),
                other => Err(Self::invalid(
                    keyword,
                    format!("expected a column name, got {other}"),
                )),
            },
            Some(other) => Err(Self::invalid(
                keyword,
                format!("expected a column name, got {other}"),
            )),
        }
    }

    /// Column reference or list of references.
    pub fn columns(&self, keyword: &str) -> WorkbenchResult<Vec<&'a Column>> {
        match self.kwargs.get(keyword) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(name)) => Ok(vec![self.resolve(keyword, name)?]),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(name) => self.resolve(keyword, name),
                    other => Err(Self::invalid(
                        keyword,
                        format!("expected column names, got {other}"),
                    )),
                })
                .collect(),
            Some(other) => Err(Self::invalid(
                keyword,
                format!("expected column names, got {other}"),
            )),
        }
    }

    pub fn flag(&self, keyword: &str) -> bool {
        self.kwargs
            .get(keyword)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn text(&self, keyword: &str) -> Option<&'a str> {
        self.kwargs.get(keyword).and_then(Value::as_str)
    }

    pub fn number(&self, keyword: &str) -> Option<f64> {
        self.kwargs.get(keyword).and_then(Value::as_f64)
    }

    pub fn raw(&self, keyword: &str) -> Option<&'a Value> {
        self.kwargs.get(keyword).filter(|value| !value.is_null())
    }

    /// Discrete colour sequence, falling back to the default palette.
    pub fn palette(&self) -> Vec<String> {
        let configured: Vec<String> = self
            .kwargs
            .get("color_discrete_sequence")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        if configured.is_empty() {
            default_qualitative_palette()
                .iter()
                .map(|color| (*color).to_owned())
                .collect()
        } else {
            configured
        }
    }
}
