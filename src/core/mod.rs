pub mod chart_type;
pub mod dataset;
pub mod palette;

pub use chart_type::{ChartType, ChartTypeSet};
pub use dataset::{Cell, Column, ColumnKind, Dataset, DatasetRegistry};

/// Keyword → value mapping handed to chart construction and updates.
pub type KwargMap = indexmap::IndexMap<String, serde_json::Value>;
