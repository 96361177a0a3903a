use serde_json::{Map, Value, json};

use crate::core::Column;
use crate::error::{WorkbenchError, WorkbenchResult};
use crate::render::Trace;

use super::grouping::Group;
use super::traces::pick;

const MAIN_DOMAIN: [f64; 2] = [0.0, 0.74];
const MARGINAL_DOMAIN: [f64; 2] = [0.75, 1.0];
const TRANSPARENT: &str = "rgba(255,255,255,0)";

/// Which edge of the main plot a marginal distribution sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MarginalAxis {
    /// Above the plot, distributing x values.
    X,
    /// Right of the plot, distributing y values.
    Y,
}

impl MarginalAxis {
    fn data_key(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }

    fn axis_refs(self) -> (&'static str, &'static str) {
        match self {
            Self::X => ("x", "y2"),
            Self::Y => ("x2", "y"),
        }
    }
}

pub(super) fn marginal_trace(
    kind: &str,
    axis: MarginalAxis,
    column: &Column,
    group: &Group<'_>,
) -> WorkbenchResult<Trace> {
    let values = pick(column, &group.rows);
    let mut trace = match kind {
        "histogram" => Trace::new("histogram")
            .with("bingroup", json!(axis.data_key()))
            .with("marker_color", json!(group.color)),
        "box" => Trace::new("box").with("marker_color", json!(group.color)),
        "violin" => Trace::new("violin").with("marker_color", json!(group.color)),
        "rug" => {
            let symbol = match axis {
                MarginalAxis::X => "line-ns-open",
                MarginalAxis::Y => "line-ew-open",
            };
            Trace::new("box")
                .with("boxpoints", json!("all"))
                .with("jitter", json!(0))
                .with("fillcolor", json!(TRANSPARENT))
                .with("line_color", json!(TRANSPARENT))
                .with("marker_symbol", json!(symbol))
                .with("marker_color", json!(group.color))
        }
        other => {
            return Err(WorkbenchError::InvalidValue {
                keyword: "marginal".to_owned(),
                reason: format!("unknown marginal kind `{other}`"),
            });
        }
    };
    let (xaxis, yaxis) = axis.axis_refs();
    trace.insert(axis.data_key(), values);
    trace.insert("xaxis", json!(xaxis));
    trace.insert("yaxis", json!(yaxis));
    trace.insert("name", json!(group.name));
    trace.insert("legendgroup", json!(group.name));
    trace.insert("showlegend", Value::Bool(false));
    Ok(trace)
}

/// Shrinks the main plot and adds the marginal axis.
pub(super) fn apply_marginal_layout(axis: MarginalAxis, layout: &mut Map<String, Value>) {
    let (main_key, marginal_key, anchor) = match axis {
        MarginalAxis::X => ("yaxis", "yaxis2", "x"),
        MarginalAxis::Y => ("xaxis", "xaxis2", "y"),
    };
    let main = layout
        .entry(main_key.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(main) = main {
        main.insert("domain".to_owned(), json!(MAIN_DOMAIN));
    }
    layout.insert(
        marginal_key.to_owned(),
        json!({
            "anchor": anchor,
            "domain": MARGINAL_DOMAIN,
            "showticklabels": false,
            "showgrid": false,
        }),
    );
}
