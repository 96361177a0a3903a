use serde::{Deserialize, Serialize};

use crate::error::{WorkbenchError, WorkbenchResult};

/// Public workbench bootstrap configuration.
///
/// Serializable so a host can persist and restore its setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbenchConfig {
    #[serde(default = "default_panel_count")]
    pub panel_count: usize,
    /// Forces every trace into the legend, even single-trace charts.
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
    /// Text placement tried on scatter and line traces; `None` disables it.
    #[serde(default = "default_text_position")]
    pub text_position: Option<String>,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            panel_count: default_panel_count(),
            show_legend: default_show_legend(),
            text_position: default_text_position(),
        }
    }
}

impl WorkbenchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many panels are layered into the figure.
    #[must_use]
    pub fn with_panel_count(mut self, panel_count: usize) -> Self {
        self.panel_count = panel_count;
        self
    }

    #[must_use]
    pub fn with_show_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    #[must_use]
    pub fn with_text_position(mut self, text_position: Option<String>) -> Self {
        self.text_position = text_position;
        self
    }

    pub fn validate(&self) -> WorkbenchResult<()> {
        if self.panel_count == 0 {
            return Err(WorkbenchError::InvalidData(
                "panel_count must be at least 1".to_owned(),
            ));
        }
        if matches!(&self.text_position, Some(position) if position.trim().is_empty()) {
            return Err(WorkbenchError::InvalidData(
                "text_position must not be blank".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> WorkbenchResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WorkbenchError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> WorkbenchResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WorkbenchError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_panel_count() -> usize {
    3
}

fn default_show_legend() -> bool {
    true
}

fn default_text_position() -> Option<String> {
    Some("bottom right".to_owned())
}
