use crate::core::{ChartType, Dataset, KwargMap};
use crate::error::WorkbenchResult;

use super::Figure;

/// Contract implemented by whatever turns constructor keywords into a figure.
///
/// Backends receive only keywords that are valid for `chart_type`, so they
/// never need to second-guess the option registry.
pub trait ChartBackend {
    fn construct(
        &self,
        chart_type: ChartType,
        dataset: &Dataset,
        kwargs: &KwargMap,
    ) -> WorkbenchResult<Figure>;
}

impl<B: ChartBackend + ?Sized> ChartBackend for &B {
    fn construct(
        &self,
        chart_type: ChartType,
        dataset: &Dataset,
        kwargs: &KwargMap,
    ) -> WorkbenchResult<Figure> {
        (**self).construct(chart_type, dataset, kwargs)
    }
}

impl<B: ChartBackend + ?Sized> ChartBackend for Box<B> {
    fn construct(
        &self,
        chart_type: ChartType,
        dataset: &Dataset,
        kwargs: &KwargMap,
    ) -> WorkbenchResult<Figure> {
        (**self).construct(chart_type, dataset, kwargs)
    }
}
