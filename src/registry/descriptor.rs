use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::ChartType;
use crate::core::palette::qualitative_palette;

/// Control used to edit one option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetKind {
    Select,
    MultiSelect,
    Checklist,
    Switch,
    Numeric { min: f64, max: f64, step: f64 },
    Text,
}

/// One fixed selector entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Text(&'static str),
    Bool(bool),
}

impl Choice {
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.to_owned()),
            Self::Bool(flag) => Value::Bool(flag),
        }
    }

    /// String form used for sorting and matching stringified widget values.
    #[must_use]
    pub fn display(self) -> String {
        match self {
            Self::Text(text) => text.to_owned(),
            Self::Bool(true) => "True".to_owned(),
            Self::Bool(false) => "False".to_owned(),
        }
    }
}

/// Where a selector's entries come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceSource {
    /// Columns of the bound dataset.
    Columns { include_none: bool },
    Static {
        values: &'static [Choice],
        include_none: bool,
    },
    NamedColors,
    MarkerSymbols,
    ColorScales,
    QualitativePalettes,
    /// Free-form input; no entries.
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRule {
    Absent,
    Bool(bool),
    Text(&'static str),
    /// A named qualitative palette, expanded to its colour list.
    Palette(&'static str),
}

impl DefaultRule {
    /// Concrete default, `None` when the option starts absent.
    #[must_use]
    pub fn value(self) -> Option<Value> {
        match self {
            Self::Absent => None,
            Self::Bool(flag) => Some(Value::Bool(flag)),
            Self::Text(text) => Some(Value::String(text.to_owned())),
            Self::Palette(name) => qualitative_palette(name).map(|colors| {
                Value::Array(
                    colors
                        .iter()
                        .map(|color| Value::String((*color).to_owned()))
                        .collect(),
                )
            }),
        }
    }
}

/// Which call consumes a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KwargTarget {
    /// Chart constructor argument.
    Construction,
    /// Trace style update applied after construction.
    Traces,
    /// Layout update applied at composition.
    Layout,
}

/// Metadata for one configurable chart parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionDescriptor {
    pub keyword: &'static str,
    pub label: &'static str,
    pub widget: WidgetKind,
    pub choices: ChoiceSource,
    pub default: DefaultRule,
    pub target: KwargTarget,
    /// Shown in the always-visible group rather than behind "More Options".
    pub basic: bool,
    /// Chart types granted explicitly, on top of signature-derived ones.
    pub chart_types: &'static [ChartType],
    /// Selector values arrive as one comma-joined string and mean a list.
    pub list_from_text: bool,
}

impl OptionDescriptor {
    const fn base(keyword: &'static str, label: &'static str, widget: WidgetKind) -> Self {
        Self {
            keyword,
            label,
            widget,
            choices: ChoiceSource::Unbounded,
            default: DefaultRule::Absent,
            target: KwargTarget::Construction,
            basic: false,
            chart_types: &[],
            list_from_text: false,
        }
    }

    /// Single column selector with a leading "none" entry.
    pub const fn select(keyword: &'static str, label: &'static str) -> Self {
        Self::base(keyword, label, WidgetKind::Select)
            .with_choices(ChoiceSource::Columns { include_none: true })
    }

    pub const fn multi_select(keyword: &'static str, label: &'static str) -> Self {
        Self::base(keyword, label, WidgetKind::MultiSelect)
            .with_choices(ChoiceSource::Columns {
                include_none: false,
            })
    }

    pub const fn checklist(keyword: &'static str, label: &'static str) -> Self {
        Self::base(keyword, label, WidgetKind::Checklist)
            .with_choices(ChoiceSource::Columns {
                include_none: false,
            })
    }

    pub const fn switch(keyword: &'static str, label: &'static str) -> Self {
        Self::base(keyword, label, WidgetKind::Switch).with_default(DefaultRule::Bool(false))
    }

    pub const fn numeric(
        keyword: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        Self::base(keyword, label, WidgetKind::Numeric { min, max, step })
    }

    pub const fn text(keyword: &'static str, label: &'static str) -> Self {
        Self::base(keyword, label, WidgetKind::Text)
    }

    pub const fn basic(mut self) -> Self {
        self.basic = true;
        self
    }

    pub const fn with_choices(mut self, choices: ChoiceSource) -> Self {
        self.choices = choices;
        self
    }

    pub const fn with_static_choices(
        mut self,
        values: &'static [Choice],
        include_none: bool,
    ) -> Self {
        self.choices = ChoiceSource::Static {
            values,
            include_none,
        };
        self
    }

    pub const fn with_default(mut self, default: DefaultRule) -> Self {
        self.default = default;
        self
    }

    /// Trace-style keyword, valid only for the given chart types.
    pub const fn for_traces(mut self, chart_types: &'static [ChartType]) -> Self {
        self.target = KwargTarget::Traces;
        self.chart_types = chart_types;
        self
    }

    /// Layout keyword, valid only for the given chart types.
    pub const fn for_layout(mut self, chart_types: &'static [ChartType]) -> Self {
        self.target = KwargTarget::Layout;
        self.chart_types = chart_types;
        self
    }

    pub const fn list_from_text(mut self) -> Self {
        self.list_from_text = true;
        self
    }

    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        self.default.value()
    }
}
