//! Option registry: which chart parameters exist, where they apply and what
//! they default to.

mod catalog;
mod descriptor;
mod signatures;

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{ChartType, ChartTypeSet};

pub use catalog::CATALOG;
pub use descriptor::{Choice, ChoiceSource, DefaultRule, KwargTarget, OptionDescriptor, WidgetKind};
pub use signatures::{UNSUPPORTED_PARAMS, is_unsupported, signature};

/// A descriptor together with the chart types it is valid for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegisteredOption {
    pub descriptor: &'static OptionDescriptor,
    pub chart_types: ChartTypeSet,
}

impl RegisteredOption {
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        self.descriptor.keyword
    }

    #[must_use]
    pub fn is_applicable(&self, chart_type: ChartType) -> bool {
        self.chart_types.contains(chart_type)
    }
}

/// Immutable table built once at startup and shared by every panel.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    options: IndexMap<&'static str, RegisteredOption>,
    params_without_implementation: BTreeSet<&'static str>,
}

impl OptionRegistry {
    /// Combines the descriptor catalog with the constructor signatures.
    ///
    /// Signature parameters that are neither denied nor described are
    /// reported with a warning and stay unreachable.
    #[must_use]
    pub fn build() -> Self {
        Self::from_parts(CATALOG, signature)
    }

    pub(crate) fn from_parts(
        catalog: &'static [OptionDescriptor],
        signature_of: impl Fn(ChartType) -> &'static [&'static str],
    ) -> Self {
        let mut param_chart_types: IndexMap<&'static str, ChartTypeSet> = IndexMap::new();
        for chart_type in ChartType::ALL {
            for param in signature_of(chart_type)
                .iter()
                .copied()
                .filter(|param| !is_unsupported(param))
            {
                param_chart_types.entry(param).or_default().insert(chart_type);
            }
        }

        let options: IndexMap<&'static str, RegisteredOption> = catalog
            .iter()
            .map(|descriptor| {
                let from_signature = param_chart_types
                    .get(descriptor.keyword)
                    .copied()
                    .unwrap_or_default();
                let chart_types =
                    ChartTypeSet::from_slice(descriptor.chart_types).union(from_signature);
                (
                    descriptor.keyword,
                    RegisteredOption {
                        descriptor,
                        chart_types,
                    },
                )
            })
            .collect();

        let params_without_implementation: BTreeSet<&'static str> = param_chart_types
            .keys()
            .copied()
            .filter(|param| !options.contains_key(param))
            .collect();
        if !params_without_implementation.is_empty() {
            warn!(
                params = ?params_without_implementation,
                "chart parameters are not ignored but have no option implementation"
            );
        }
        for option in options.values().filter(|option| option.chart_types.is_empty()) {
            warn!(keyword = option.keyword(), "option applies to no chart type");
        }
        debug!(options = options.len(), "option registry built");

        Self {
            options,
            params_without_implementation,
        }
    }

    /// Parameters offered by some constructor that no descriptor covers.
    #[must_use]
    pub fn params_without_implementation(&self) -> &BTreeSet<&'static str> {
        &self.params_without_implementation
    }

    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&RegisteredOption> {
        self.options.get(keyword)
    }

    #[must_use]
    pub fn descriptor(&self, keyword: &str) -> Option<&'static OptionDescriptor> {
        self.get(keyword).map(|option| option.descriptor)
    }

    #[must_use]
    pub fn chart_types(&self, keyword: &str) -> ChartTypeSet {
        self.get(keyword)
            .map(|option| option.chart_types)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_applicable(&self, keyword: &str, chart_type: ChartType) -> bool {
        self.chart_types(keyword).contains(chart_type)
    }

    #[must_use]
    pub fn target(&self, keyword: &str) -> Option<KwargTarget> {
        self.descriptor(keyword).map(|descriptor| descriptor.target)
    }

    #[must_use]
    pub fn default_value(&self, keyword: &str) -> Option<Value> {
        self.descriptor(keyword)
            .and_then(OptionDescriptor::default_value)
    }

    /// Options valid for `chart_type`, in registry order.
    pub fn applicable(&self, chart_type: ChartType) -> impl Iterator<Item = &RegisteredOption> {
        self.options
            .values()
            .filter(move |option| option.is_applicable(chart_type))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredOption> {
        self.options.values()
    }

    /// Position of a keyword in registry order.
    #[must_use]
    pub fn position(&self, keyword: &str) -> Option<usize> {
        self.options.get_index_of(keyword)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::{CATALOG, OptionRegistry};
    use crate::core::ChartType;

    fn signature_with_extra(chart_type: ChartType) -> &'static [&'static str] {
        match chart_type {
            ChartType::Scatter => &["data_frame", "x", "y", "trendline", "jitter"],
            _ => &["data_frame", "x"],
        }
    }

    #[test]
    fn undescribed_params_are_reported_not_fatal() {
        let registry = OptionRegistry::from_parts(CATALOG, signature_with_extra);
        assert_eq!(
            registry
                .params_without_implementation()
                .iter()
                .copied()
                .collect::<Vec<_>>(),
            vec!["jitter"]
        );
        assert!(registry.get("jitter").is_none());
        assert!(registry.is_applicable("y", ChartType::Scatter));
        assert!(!registry.is_applicable("y", ChartType::Pie));
    }
}
