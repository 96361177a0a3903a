use thiserror::Error;

pub type WorkbenchResult<T> = Result<T, WorkbenchError>;

#[derive(Debug, Error)]
pub enum WorkbenchError {
    #[error("unknown dataset: `{0}`")]
    UnknownDataset(String),

    #[error("unknown column `{column}` in dataset `{dataset}`")]
    UnknownColumn { dataset: String, column: String },

    #[error("unknown chart type: `{0}`")]
    UnknownChartType(String),

    #[error("unknown panel: {0}")]
    UnknownPanel(usize),

    #[error("invalid control id: `{0}`")]
    InvalidControlId(String),

    #[error("invalid value for `{keyword}`: {reason}")]
    InvalidValue { keyword: String, reason: String },

    #[error("unsupported property `{property}` for `{trace_type}` traces")]
    UnsupportedProperty {
        trace_type: String,
        property: String,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
