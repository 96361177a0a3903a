use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::KwargMap;
use crate::error::{WorkbenchError, WorkbenchResult};

/// Property names that contain an underscore and must not be split.
const UNDERSCORED_PROPERTIES: &[&str] = &["error_x", "error_y", "error_z"];

/// Expands a keyword into its nested property path (`marker_color` →
/// `marker.color`).
#[must_use]
pub fn magic_underscore_path(key: &str) -> Vec<String> {
    let mut path = Vec::new();
    let mut rest = key;
    while !rest.is_empty() {
        if let Some(prop) = UNDERSCORED_PROPERTIES
            .iter()
            .find(|prop| rest == **prop || rest.starts_with(&format!("{prop}_")))
        {
            path.push((*prop).to_owned());
            rest = rest[prop.len()..].trim_start_matches('_');
            continue;
        }
        match rest.split_once('_') {
            Some((head, tail)) => {
                path.push(head.to_owned());
                rest = tail;
            }
            None => {
                path.push(rest.to_owned());
                rest = "";
            }
        }
    }
    path
}

fn set_path(target: &mut Map<String, Value>, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut node = target;
    for segment in parents {
        let entry = node
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(child) = entry else {
            return;
        };
        node = child;
    }
    // A bare string title is shorthand for `title.text`.
    if last == "title" && value.is_string() {
        node.insert(last.clone(), json!({ "text": value }));
    } else {
        node.insert(last.clone(), value);
    }
}

/// Recursively overlays `overlay` onto `base`; scalars and arrays replace.
pub fn deep_merge(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match (base.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                deep_merge(existing, incoming);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Root attributes a trace type rejects, on top of those it never defines.
fn rejected_roots(trace_type: &str) -> &'static [&'static str] {
    match trace_type {
        "histogram" | "box" | "violin" => &["textposition"],
        "histogram2d" | "histogram2dcontour" => &["textposition", "mode"],
        "splom" => &["textposition", "line", "mode"],
        "parcoords" => &["textposition", "marker", "mode", "text"],
        "pie" => &["line", "mode"],
        _ => &[],
    }
}

/// One plotly.js trace object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(Map<String, Value>);

impl Trace {
    #[must_use]
    pub fn new(trace_type: &str) -> Self {
        let mut attributes = Map::new();
        attributes.insert("type".to_owned(), Value::String(trace_type.to_owned()));
        Self(attributes)
    }

    #[must_use]
    pub fn trace_type(&self) -> &str {
        self.0
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("scatter")
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Reads a nested attribute by magic-underscore key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let path = magic_underscore_path(key);
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(first)?, |node, segment| node.get(segment))
    }

    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Sets a root attribute as-is.
    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_owned(), value);
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.set(key, value);
        self
    }

    /// Sets an attribute through its magic-underscore path.
    pub fn set(&mut self, key: &str, value: Value) {
        set_path(&mut self.0, &magic_underscore_path(key), value);
    }

    #[must_use]
    pub fn accepts(&self, key: &str) -> bool {
        let path = magic_underscore_path(key);
        let Some(root) = path.first() else {
            return false;
        };
        !rejected_roots(self.trace_type()).contains(&root.as_str())
    }

    fn ensure_accepts(&self, key: &str) -> WorkbenchResult<()> {
        if self.accepts(key) {
            Ok(())
        } else {
            Err(WorkbenchError::UnsupportedProperty {
                trace_type: self.trace_type().to_owned(),
                property: key.to_owned(),
            })
        }
    }
}

/// Traces plus layout, serializable as plotly.js figure JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Map<String, Value>,
}

impl Figure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-cell subplot grid every composition starts from.
    #[must_use]
    pub fn subplot_base() -> Self {
        let layout = json!({
            "xaxis": { "anchor": "y", "domain": [0.0, 1.0] },
            "yaxis": { "anchor": "x", "domain": [0.0, 1.0] },
        });
        Self {
            data: Vec::new(),
            layout: match layout {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    pub fn add_traces(&mut self, traces: impl IntoIterator<Item = Trace>) {
        self.data.extend(traces);
    }

    /// Applies keyword updates to every trace.
    ///
    /// Fails without touching any trace when one trace rejects a keyword.
    pub fn update_traces(&mut self, kwargs: &KwargMap) -> WorkbenchResult<()> {
        for trace in &self.data {
            for key in kwargs.keys() {
                trace.ensure_accepts(key)?;
            }
        }
        for trace in &mut self.data {
            for (key, value) in kwargs {
                trace.set(key, value.clone());
            }
        }
        Ok(())
    }

    /// Applies keyword updates to the layout.
    pub fn update_layout(&mut self, kwargs: &KwargMap) {
        for (key, value) in kwargs {
            set_path(&mut self.layout, &magic_underscore_path(key), value.clone());
        }
    }

    /// Overlays another layout object, the way a layout update merges.
    pub fn merge_layout(&mut self, layout: &Map<String, Value>) {
        deep_merge(&mut self.layout, layout);
    }

    /// Reads a nested layout attribute by magic-underscore key.
    #[must_use]
    pub fn layout_value(&self, key: &str) -> Option<&Value> {
        let path = magic_underscore_path(key);
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.layout.get(first)?, |node, segment| node.get(segment))
    }

    pub fn to_json_pretty(&self) -> WorkbenchResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WorkbenchError::InvalidData(format!("failed to serialize figure: {e}")))
    }

    pub fn from_json_str(input: &str) -> WorkbenchResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WorkbenchError::InvalidData(format!("failed to parse figure json: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Figure, Trace, magic_underscore_path};
    use crate::core::KwargMap;

    fn kwargs(pairs: &[(&str, serde_json::Value)]) -> KwargMap {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect()
    }

    #[test]
    fn magic_underscore_keeps_error_bar_properties_whole() {
        assert_eq!(magic_underscore_path("marker_color"), vec!["marker", "color"]);
        assert_eq!(magic_underscore_path("error_x"), vec!["error_x"]);
        assert_eq!(
            magic_underscore_path("error_y_array"),
            vec!["error_y", "array"]
        );
        assert_eq!(
            magic_underscore_path("title_font_size"),
            vec!["title", "font", "size"]
        );
    }

    #[test]
    fn layout_titles_expand_to_text() {
        let mut figure = Figure::subplot_base();
        figure.update_layout(&kwargs(&[
            ("xaxis_title", json!("Time")),
            ("title_font_size", json!(18)),
        ]));
        assert_eq!(figure.layout["xaxis"]["title"]["text"], json!("Time"));
        assert_eq!(figure.layout["xaxis"]["anchor"], json!("y"));
        assert_eq!(figure.layout_value("title_font_size"), Some(&json!(18)));
    }

    #[test]
    fn rejected_trace_update_leaves_every_trace_untouched() {
        let mut figure = Figure::new();
        figure.add_trace(Trace::new("scatter"));
        figure.add_trace(Trace::new("histogram"));
        let before = figure.clone();

        let result = figure.update_traces(&kwargs(&[("textposition", json!("bottom right"))]));
        assert!(result.is_err());
        assert_eq!(figure, before);

        figure
            .update_traces(&kwargs(&[("marker_color", json!("red"))]))
            .expect("marker color accepted");
        assert!(
            figure
                .data
                .iter()
                .all(|trace| trace.lookup("marker_color") == Some(&json!("red")))
        );
    }

    #[test]
    fn merge_layout_is_recursive() {
        let mut figure = Figure::subplot_base();
        let overlay = json!({ "xaxis": { "title": { "text": "x" } }, "barmode": "group" });
        figure.merge_layout(overlay.as_object().expect("object"));
        assert_eq!(figure.layout["xaxis"]["anchor"], json!("y"));
        assert_eq!(figure.layout["xaxis"]["title"]["text"], json!("x"));
        assert_eq!(figure.layout["barmode"], json!("group"));
    }
}
