use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::ChartType;
use crate::core::Dataset;
use crate::core::palette::{MARKER_SYMBOLS, NAMED_COLORS, NAMED_COLORSCALES, QUALITATIVE_PALETTES};
use crate::registry::{ChoiceSource, OptionDescriptor, WidgetKind};

/// Controls laid out side by side.
pub const CONTROLS_PER_ROW: usize = 3;

pub type ControlRow = SmallVec<[Control; CONTROLS_PER_ROW]>;

/// One entry of a selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: Value,
}

impl ChoiceOption {
    /// The empty entry that clears a selector.
    #[must_use]
    pub fn none() -> Self {
        Self {
            label: String::new(),
            value: Value::Null,
        }
    }
}

fn sort_key(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(true) => "True".to_owned(),
        Value::Bool(false) => "False".to_owned(),
        other => other.to_string(),
    }
}

/// Selector entries sorted by their string form; underscores in text labels
/// read as spaces.
#[must_use]
pub fn to_options(values: impl IntoIterator<Item = Value>) -> Vec<ChoiceOption> {
    let mut values: Vec<Value> = values.into_iter().collect();
    values.sort_by_key(sort_key);
    values
        .into_iter()
        .map(|value| ChoiceOption {
            label: sort_key(&value).replace('_', " "),
            value,
        })
        .collect()
}

fn text_options(values: &[&str]) -> Vec<ChoiceOption> {
    to_options(values.iter().map(|value| Value::String((*value).to_owned())))
}

fn with_none(include_none: bool, mut options: Vec<ChoiceOption>) -> Vec<ChoiceOption> {
    if include_none {
        options.insert(0, ChoiceOption::none());
    }
    options
}

/// Column entries, including the columns index name when the dataset has one.
fn column_options(dataset: Option<&Dataset>) -> Vec<ChoiceOption> {
    let Some(dataset) = dataset else {
        return Vec::new();
    };
    let mut names: Vec<&str> = dataset.column_names();
    if let Some(columns_name) = dataset.columns_name() {
        names.push(columns_name);
    }
    text_options(&names)
}

/// Entries a descriptor offers against the bound dataset.
#[must_use]
pub fn choice_options(
    descriptor: &OptionDescriptor,
    dataset: Option<&Dataset>,
) -> Vec<ChoiceOption> {
    match descriptor.choices {
        ChoiceSource::Columns { include_none } => with_none(include_none, column_options(dataset)),
        ChoiceSource::Static {
            values,
            include_none,
        } => with_none(
            include_none,
            to_options(values.iter().map(|choice| choice.to_value())),
        ),
        ChoiceSource::NamedColors => with_none(true, text_options(NAMED_COLORS)),
        ChoiceSource::MarkerSymbols => with_none(true, text_options(MARKER_SYMBOLS)),
        ChoiceSource::ColorScales => with_none(true, text_options(NAMED_COLORSCALES)),
        ChoiceSource::QualitativePalettes => QUALITATIVE_PALETTES
            .iter()
            .map(|(name, colors)| ChoiceOption {
                label: (*name).to_owned(),
                value: Value::String(colors.join(",")),
            })
            .collect(),
        ChoiceSource::Unbounded => Vec::new(),
    }
}

/// A rendered form control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    /// Stable `<keyword>-<panel>` identifier events refer to.
    pub id: String,
    pub keyword: String,
    pub label: String,
    pub widget: WidgetKind,
    pub options: Vec<ChoiceOption>,
    pub value: Value,
}

impl Control {
    #[must_use]
    pub fn new(
        id: String,
        descriptor: &OptionDescriptor,
        dataset: Option<&Dataset>,
        value: Value,
    ) -> Self {
        // Comma-joined list selectors match their option by joined string.
        let value = match value {
            Value::Array(items) if descriptor.list_from_text => Value::String(
                items
                    .iter()
                    .map(sort_key)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            other => other,
        };
        Self {
            id,
            keyword: descriptor.keyword.to_owned(),
            label: descriptor.label.to_owned(),
            widget: descriptor.widget,
            options: choice_options(descriptor, dataset),
            value,
        }
    }
}

/// Everything a host needs to draw one panel's form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlSheet {
    pub chart_type: Control,
    pub dataset: Control,
    /// Always-visible options, three per row.
    pub basic: Vec<ControlRow>,
    /// Options behind the "More Options" group, three per row.
    pub extended: Vec<ControlRow>,
    /// Options not valid for the chart type; kept so their ids stay bound.
    pub hidden: Vec<Control>,
}

impl ControlSheet {
    #[must_use]
    pub fn chart_type_control(id: String, chart_type: Option<ChartType>) -> Control {
        Control {
            id,
            keyword: "graph-type".to_owned(),
            label: "Graph Type".to_owned(),
            widget: WidgetKind::Select,
            options: with_none(
                true,
                text_options(&ChartType::ALL.map(ChartType::as_str)),
            ),
            value: chart_type.map_or(Value::Null, |chart_type| {
                Value::String(chart_type.as_str().to_owned())
            }),
        }
    }

    #[must_use]
    pub fn dataset_control(id: String, names: &[&str], selected: Option<&str>) -> Control {
        Control {
            id,
            keyword: "dataframe".to_owned(),
            label: "Dataframe".to_owned(),
            widget: WidgetKind::Select,
            options: with_none(true, text_options(names)),
            value: selected.map_or(Value::Null, |name| Value::String(name.to_owned())),
        }
    }

    /// Chunks controls into rows of [`CONTROLS_PER_ROW`].
    #[must_use]
    pub fn rows(controls: Vec<Control>) -> Vec<ControlRow> {
        let mut rows: Vec<ControlRow> = Vec::new();
        for control in controls {
            match rows.last_mut() {
                Some(row) if row.len() < CONTROLS_PER_ROW => row.push(control),
                _ => {
                    let mut row = ControlRow::new();
                    row.push(control);
                    rows.push(row);
                }
            }
        }
        rows
    }

    /// Every visible control, basic first.
    pub fn visible(&self) -> impl Iterator<Item = &Control> {
        self.basic.iter().chain(&self.extended).flat_map(|row| row.iter())
    }

    #[must_use]
    pub fn find(&self, keyword: &str) -> Option<&Control> {
        self.visible().find(|control| control.keyword == keyword)
    }

    #[must_use]
    pub fn is_hidden(&self, keyword: &str) -> bool {
        self.hidden.iter().any(|control| control.keyword == keyword)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{ControlSheet, choice_options, to_options};
    use crate::core::{Column, Dataset};
    use crate::registry::CATALOG;

    #[test]
    fn options_sort_by_string_form_and_soften_underscores() {
        let options = to_options([json!("scatter_3d"), json!("bar"), json!(false)]);
        let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
        assert_eq!(labels, vec!["False", "bar", "scatter 3d"]);
        assert_eq!(options[2].value, json!("scatter_3d"));
    }

    #[test]
    fn column_choices_include_index_name_and_none() {
        let dataset = Dataset::new(
            "wide",
            vec![
                Column::from_values("b", vec![1_i64]),
                Column::from_values("a", vec![2_i64]),
            ],
        )
        .expect("valid dataset")
        .with_columns_name("metric");
        let x = CATALOG
            .iter()
            .find(|descriptor| descriptor.keyword == "x")
            .expect("x described");
        let options = choice_options(x, Some(&dataset));
        assert_eq!(options[0].value, Value::Null);
        let values: Vec<&Value> = options.iter().skip(1).map(|option| &option.value).collect();
        assert_eq!(values, vec![&json!("a"), &json!("b"), &json!("metric")]);
    }

    #[test]
    fn rows_hold_three_controls() {
        let controls = (0..7)
            .map(|index| ControlSheet::chart_type_control(format!("c-{index}"), None))
            .collect();
        let rows = ControlSheet::rows(controls);
        assert_eq!(rows.iter().map(|row| row.len()).collect::<Vec<_>>(), vec![3, 3, 1]);
    }
}
