use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{Dataset, DatasetRegistry};
use crate::error::{WorkbenchError, WorkbenchResult};
use crate::panel::{ControlSheet, Panel, PanelId, parse_chart_type};
use crate::registry::OptionRegistry;
use crate::render::{ChartBackend, Figure};

use super::composer;
use super::{ControlId, ControlTarget, WorkbenchConfig};

/// One changed control, as a host reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlEvent {
    pub control_id: String,
    pub value: Value,
}

impl ControlEvent {
    #[must_use]
    pub fn new(control_id: impl Into<String>, value: Value) -> Self {
        Self {
            control_id: control_id.into(),
            value,
        }
    }
}

/// What a host redraws after an event.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbenchUpdate {
    pub figure: Figure,
    /// Panel whose control sheet changed shape (chart type or dataset).
    pub controls_changed: Option<PanelId>,
}

/// Explicit state behind a chart-building form.
///
/// Hosts feed [`ControlEvent`]s into [`Workbench::apply`] and redraw from the
/// returned [`WorkbenchUpdate`].
#[derive(Debug)]
pub struct Workbench<B: ChartBackend> {
    config: WorkbenchConfig,
    registry: Arc<OptionRegistry>,
    datasets: DatasetRegistry,
    panels: Vec<Panel>,
    backend: B,
}

impl<B: ChartBackend> Workbench<B> {
    /// Builds a workbench with a fresh option registry.
    pub fn new(
        config: WorkbenchConfig,
        datasets: DatasetRegistry,
        backend: B,
    ) -> WorkbenchResult<Self> {
        Self::with_registry(config, Arc::new(OptionRegistry::build()), datasets, backend)
    }

    pub fn with_registry(
        config: WorkbenchConfig,
        registry: Arc<OptionRegistry>,
        datasets: DatasetRegistry,
        backend: B,
    ) -> WorkbenchResult<Self> {
        config.validate()?;
        let panels = (0..config.panel_count)
            .map(|id| {
                Panel::new(id, Arc::clone(&registry))
                    .with_show_legend(config.show_legend)
                    .with_text_position(config.text_position.clone())
            })
            .collect();
        debug!(
            panels = config.panel_count,
            datasets = datasets.len(),
            "workbench initialized"
        );
        Ok(Self {
            config,
            registry,
            datasets,
            panels,
            backend,
        })
    }

    #[must_use]
    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<OptionRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn datasets(&self) -> &DatasetRegistry {
        &self.datasets
    }

    /// Registers another dataset; panels see it on their next dataset change.
    pub fn insert_dataset(&mut self, dataset: Dataset) -> Option<Arc<Dataset>> {
        self.datasets.insert(dataset)
    }

    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> WorkbenchResult<&Panel> {
        self.panels.get(id).ok_or(WorkbenchError::UnknownPanel(id))
    }

    pub fn panel_mut(&mut self, id: PanelId) -> WorkbenchResult<&mut Panel> {
        self.panels.get_mut(id).ok_or(WorkbenchError::UnknownPanel(id))
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Applies one control change and recomposes the figure.
    pub fn apply(&mut self, event: ControlEvent) -> WorkbenchResult<WorkbenchUpdate> {
        let id: ControlId = event.control_id.parse()?;
        let controls_changed = self.apply_to_panel(&id, event.value)?;
        Ok(WorkbenchUpdate {
            figure: self.figure(),
            controls_changed,
        })
    }

    fn apply_to_panel(&mut self, id: &ControlId, value: Value) -> WorkbenchResult<Option<PanelId>> {
        let panel = self
            .panels
            .get_mut(id.panel)
            .ok_or(WorkbenchError::UnknownPanel(id.panel))?;
        match &id.target {
            ControlTarget::ChartType => {
                panel.set_chart_type(parse_chart_type(&value)?);
                Ok(Some(id.panel))
            }
            ControlTarget::Dataset => {
                let name = match &value {
                    Value::Null => "",
                    Value::String(name) => name.as_str(),
                    other => {
                        return Err(WorkbenchError::InvalidValue {
                            keyword: id.name().to_owned(),
                            reason: format!("expected a dataset name, got {other}"),
                        });
                    }
                };
                panel.set_dataset(&self.datasets, name)?;
                Ok(Some(id.panel))
            }
            ControlTarget::Option(keyword) => {
                panel.set_option(keyword, value)?;
                Ok(None)
            }
        }
    }

    /// The composed figure of every panel.
    #[must_use]
    pub fn figure(&self) -> Figure {
        composer::compose(&self.panels, &self.backend)
    }

    #[must_use]
    pub fn reproduction_script(&self) -> String {
        composer::reproduction_script(&self.panels)
    }

    pub fn controls(&self, id: PanelId) -> WorkbenchResult<ControlSheet> {
        Ok(self.panel(id)?.controls(&self.datasets))
    }
}
