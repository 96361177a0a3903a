use serde_json::Value;

use crate::core::{ChartType, Dataset, KwargMap};
use crate::error::WorkbenchResult;

use super::{ChartBackend, Figure, Trace};

/// Backend that emits one bare trace per construction.
///
/// Useful for headless hosts and tests that care about keyword flow rather
/// than data placement; the received keywords are echoed under `meta`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl ChartBackend for NullBackend {
    fn construct(
        &self,
        chart_type: ChartType,
        _dataset: &Dataset,
        kwargs: &KwargMap,
    ) -> WorkbenchResult<Figure> {
        let meta = kwargs
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let mut figure = Figure::new();
        figure.add_trace(
            Trace::new(super::plotly::trace_type(chart_type)).with("meta", Value::Object(meta)),
        );
        Ok(figure)
    }
}
