use std::fmt;
use std::str::FromStr;

use crate::error::WorkbenchError;
use crate::panel::{CHART_TYPE_CONTROL, DATASET_CONTROL, PanelId};

/// What a control edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlTarget {
    ChartType,
    Dataset,
    Option(String),
}

/// Parsed `<name>-<panel>` control identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlId {
    pub target: ControlTarget,
    pub panel: PanelId,
}

impl ControlId {
    #[must_use]
    pub fn new(target: ControlTarget, panel: PanelId) -> Self {
        Self { target, panel }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match &self.target {
            ControlTarget::ChartType => CHART_TYPE_CONTROL,
            ControlTarget::Dataset => DATASET_CONTROL,
            ControlTarget::Option(keyword) => keyword,
        }
    }
}

impl FromStr for ControlId {
    type Err = WorkbenchError;

    /// Splits at the last `-`, so names may contain dashes themselves.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WorkbenchError::InvalidControlId(s.to_owned());
        let (name, panel) = s.rsplit_once('-').ok_or_else(invalid)?;
        if name.is_empty() {
            return Err(invalid());
        }
        let panel = panel.parse::<PanelId>().map_err(|_| invalid())?;
        let target = match name {
            CHART_TYPE_CONTROL => ControlTarget::ChartType,
            DATASET_CONTROL => ControlTarget::Dataset,
            keyword => ControlTarget::Option(keyword.to_owned()),
        };
        Ok(Self { target, panel })
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name(), self.panel)
    }
}

#[cfg(test)]
mod tests {
    use super::{ControlId, ControlTarget};

    #[test]
    fn splits_at_last_dash() {
        let id: ControlId = "graph-type-2".parse().expect("valid id");
        assert_eq!(id, ControlId::new(ControlTarget::ChartType, 2));

        let id: ControlId = "color_discrete_sequence-0".parse().expect("valid id");
        assert_eq!(
            id.target,
            ControlTarget::Option("color_discrete_sequence".to_owned())
        );
        assert_eq!(id.to_string(), "color_discrete_sequence-0");
    }

    #[test]
    fn rejects_missing_panel_suffix() {
        assert!("x".parse::<ControlId>().is_err());
        assert!("x-".parse::<ControlId>().is_err());
        assert!("-1".parse::<ControlId>().is_err());
        assert!("x-one".parse::<ControlId>().is_err());
    }
}
