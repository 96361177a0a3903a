//! Per-panel state: selected dataset, chart type and keyword mapping.

mod controls;
mod normalize;
mod source;

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::core::{ChartType, Dataset, DatasetRegistry, KwargMap};
use crate::error::{WorkbenchError, WorkbenchResult};
use crate::registry::{KwargTarget, OptionRegistry};
use crate::render::{ChartBackend, Figure};

pub use controls::{
    CONTROLS_PER_ROW, ChoiceOption, Control, ControlRow, ControlSheet, choice_options, to_options,
};
pub use normalize::normalize;
pub use source::{python_kwargs, python_literal};

pub type PanelId = usize;

/// Control id of the chart type selector, before the panel suffix.
pub const CHART_TYPE_CONTROL: &str = "graph-type";
/// Control id of the dataset selector, before the panel suffix.
pub const DATASET_CONTROL: &str = "dataframe";

/// Which keywords a render passes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Every current keyword; what the preview shows.
    #[default]
    Live,
    /// Only keywords that differ from their default; what a script prints.
    Reproduction,
}

/// A panel mapping split by the call that consumes each keyword.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelKwargs {
    pub construction: KwargMap,
    pub traces: KwargMap,
    pub layout: KwargMap,
}

/// Layout update key for a layout keyword.
///
/// The z axis only exists inside a 3D scene.
fn layout_key(keyword: &str) -> String {
    match keyword {
        "zaxis_title" => "scene_zaxis_title".to_owned(),
        other => other.to_owned(),
    }
}

/// One chart-configuration unit.
#[derive(Debug, Clone)]
pub struct Panel {
    id: PanelId,
    registry: Arc<OptionRegistry>,
    dataset: Option<Arc<Dataset>>,
    chart_type: Option<ChartType>,
    kwargs: KwargMap,
    show_legend: bool,
    text_position: Option<String>,
}

impl Panel {
    /// Empty panel: no dataset and no chart type.
    #[must_use]
    pub fn new(id: PanelId, registry: Arc<OptionRegistry>) -> Self {
        Self {
            id,
            registry,
            dataset: None,
            chart_type: None,
            kwargs: KwargMap::new(),
            show_legend: true,
            text_position: Some("bottom right".to_owned()),
        }
    }

    /// Whether every rendered trace is forced into the legend.
    #[must_use]
    pub fn with_show_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    /// Text position tried on scatter and line traces; `None` skips it.
    #[must_use]
    pub fn with_text_position(mut self, text_position: Option<String>) -> Self {
        self.text_position = text_position;
        self
    }

    #[must_use]
    pub fn id(&self) -> PanelId {
        self.id
    }

    #[must_use]
    pub fn chart_type(&self) -> Option<ChartType> {
        self.chart_type
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn dataset_name(&self) -> Option<&str> {
        self.dataset.as_deref().map(Dataset::name)
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<OptionRegistry> {
        &self.registry
    }

    /// Current keyword mapping, in registry order.
    #[must_use]
    pub fn kwargs_map(&self) -> &KwargMap {
        &self.kwargs
    }

    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&Value> {
        self.kwargs.get(keyword)
    }

    /// Control id for `keyword` on this panel.
    #[must_use]
    pub fn control_id(&self, keyword: &str) -> String {
        format!("{keyword}-{}", self.id)
    }

    /// Replaces the chart type and resets the mapping to its defaults.
    pub fn set_chart_type(&mut self, chart_type: Option<ChartType>) {
        self.chart_type = chart_type;
        self.kwargs.clear();
        if let Some(chart_type) = chart_type {
            for option in self.registry.applicable(chart_type) {
                if let Some(default) = option.descriptor.default_value() {
                    self.kwargs.insert(option.keyword().to_owned(), default);
                }
            }
        }
        debug!(
            panel = self.id,
            chart_type = chart_type.map(ChartType::as_str),
            defaults = self.kwargs.len(),
            "panel chart type set"
        );
    }

    /// Binds the panel to a registered dataset; an empty name unbinds it.
    ///
    /// The keyword mapping is kept.
    pub fn set_dataset(&mut self, datasets: &DatasetRegistry, name: &str) -> WorkbenchResult<()> {
        self.dataset = if name.is_empty() {
            None
        } else {
            Some(datasets.resolve(name)?)
        };
        debug!(panel = self.id, dataset = name, "panel dataset set");
        Ok(())
    }

    /// Normalizes and stores one keyword.
    ///
    /// Returns `Ok(false)` when the keyword is unknown or not valid for the
    /// current chart type; such values are ignored.
    pub fn set_option(&mut self, keyword: &str, raw: Value) -> WorkbenchResult<bool> {
        let Some(chart_type) = self.chart_type else {
            debug!(panel = self.id, keyword, "option ignored without a chart type");
            return Ok(false);
        };
        let Some(option) = self.registry.get(keyword) else {
            debug!(panel = self.id, keyword, "unknown option ignored");
            return Ok(false);
        };
        if !option.is_applicable(chart_type) {
            debug!(
                panel = self.id,
                keyword,
                chart_type = chart_type.as_str(),
                "option not valid for chart type"
            );
            return Ok(false);
        }

        match normalize(option.descriptor, raw)? {
            Some(value) => {
                self.kwargs.insert(keyword.to_owned(), value);
                let registry = &self.registry;
                self.kwargs.sort_by(|left, _, right, _| {
                    registry.position(left).cmp(&registry.position(right))
                });
            }
            None => {
                self.kwargs.shift_remove(keyword);
            }
        }
        Ok(true)
    }

    /// True iff a chart type is selected.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.chart_type.is_some()
    }

    /// Current keywords split by consumer.
    #[must_use]
    pub fn kwargs(&self, mode: RenderMode) -> PanelKwargs {
        let mut split = PanelKwargs::default();
        let Some(chart_type) = self.chart_type else {
            return split;
        };
        for (keyword, value) in &self.kwargs {
            let Some(option) = self.registry.get(keyword) else {
                continue;
            };
            if !option.is_applicable(chart_type) {
                continue;
            }
            if mode == RenderMode::Reproduction
                && option.descriptor.default_value().as_ref() == Some(value)
            {
                continue;
            }
            match option.descriptor.target {
                KwargTarget::Construction => {
                    split.construction.insert(keyword.clone(), value.clone());
                }
                KwargTarget::Traces => {
                    split.traces.insert(keyword.clone(), value.clone());
                }
                KwargTarget::Layout => {
                    split.layout.insert(layout_key(keyword), value.clone());
                }
            }
        }
        split
    }

    /// Layout overrides applied after every panel is layered.
    #[must_use]
    pub fn layout_kwargs(&self) -> KwargMap {
        self.kwargs(RenderMode::Live).layout
    }

    /// Builds this panel's figure.
    ///
    /// A panel without a chart type or dataset renders an empty figure.
    pub fn render<B: ChartBackend>(
        &self,
        backend: &B,
        mode: RenderMode,
    ) -> WorkbenchResult<Figure> {
        let (Some(chart_type), Some(dataset)) = (self.chart_type, self.dataset.as_deref()) else {
            return Ok(Figure::new());
        };
        let kwargs = self.kwargs(mode);
        let mut figure = backend.construct(chart_type, dataset, &kwargs.construction)?;
        figure.update_traces(&kwargs.traces)?;

        if let (ChartType::Scatter | ChartType::Line, Some(position)) =
            (chart_type, self.text_position.as_deref())
        {
            let mut update = KwargMap::new();
            update.insert("textposition".to_owned(), Value::String(position.to_owned()));
            if let Err(err) = figure.update_traces(&update) {
                debug!(panel = self.id, error = %err, "text position not applied");
            }
        }

        if self.show_legend {
            for trace in &mut figure.data {
                trace.insert("showlegend", Value::Bool(true));
            }
        }
        Ok(figure)
    }

    /// Python statements constructing this panel's figure into `varname`.
    ///
    /// `None` when there is nothing to render.
    #[must_use]
    pub fn figure_source(&self, varname: &str) -> Option<String> {
        let chart_type = self.chart_type?;
        let dataset = self.dataset_name()?;
        let kwargs = self.kwargs(RenderMode::Reproduction);

        let mut source = format!("# Trace {}\n", self.id);
        if kwargs.construction.is_empty() {
            source.push_str(&format!("{varname} = px.{chart_type}({dataset})\n"));
        } else {
            source.push_str(&format!(
                "{varname} = px.{chart_type}({dataset}, **{})\n",
                python_kwargs(&kwargs.construction)
            ));
        }
        if !kwargs.traces.is_empty() {
            source.push_str(&format!(
                "{varname}.update_traces(**{})\n",
                python_kwargs(&kwargs.traces)
            ));
        }
        Some(source)
    }

    /// Form controls for the current chart type and dataset.
    #[must_use]
    pub fn controls(&self, datasets: &DatasetRegistry) -> ControlSheet {
        let dataset = self.dataset.as_deref();
        let mut basic = Vec::new();
        let mut extended = Vec::new();
        let mut hidden = Vec::new();
        for option in self.registry.iter() {
            let control = Control::new(
                self.control_id(option.keyword()),
                option.descriptor,
                dataset,
                self.kwargs.get(option.keyword()).cloned().unwrap_or(Value::Null),
            );
            match self.chart_type {
                Some(chart_type) if option.is_applicable(chart_type) => {
                    if option.descriptor.basic {
                        basic.push(control);
                    } else {
                        extended.push(control);
                    }
                }
                _ => hidden.push(control),
            }
        }
        ControlSheet {
            chart_type: ControlSheet::chart_type_control(
                self.control_id(CHART_TYPE_CONTROL),
                self.chart_type,
            ),
            dataset: ControlSheet::dataset_control(
                self.control_id(DATASET_CONTROL),
                &datasets.names(),
                self.dataset_name(),
            ),
            basic: ControlSheet::rows(basic),
            extended: ControlSheet::rows(extended),
            hidden,
        }
    }
}

impl PartialEq for Panel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.chart_type == other.chart_type
            && self.dataset_name() == other.dataset_name()
            && self.kwargs == other.kwargs
    }
}

/// Resolves a chart type selector value; empty means "no chart type".
pub fn parse_chart_type(value: &Value) -> WorkbenchResult<Option<ChartType>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) if text.is_empty() => Ok(None),
        Value::String(text) => text.parse().map(Some),
        other => Err(WorkbenchError::InvalidValue {
            keyword: CHART_TYPE_CONTROL.to_owned(),
            reason: format!("expected a chart type name, got {other}"),
        }),
    }
}
