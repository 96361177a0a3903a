use serde_json::{Map, Value, json};

use crate::core::{ChartType, Column};
use crate::render::deep_merge;

use super::args::Args;
use super::grouping::Grouping;

fn titled(text: &str) -> Value {
    json!({ "title": { "text": text } })
}

fn merge_into(layout: &mut Map<String, Value>, key: &str, value: Value) {
    let mut overlay = Map::new();
    overlay.insert(key.to_owned(), value);
    deep_merge(layout, &overlay);
}

/// Columns that name the cartesian axes.
pub(super) struct AxisColumns<'a> {
    pub x: Option<&'a Column>,
    pub y: Option<&'a Column>,
    pub wide: bool,
    pub continuous_color: Option<&'a Column>,
}

fn y_title(chart_type: ChartType, axes: &AxisColumns<'_>, args: &Args<'_>) -> Option<String> {
    if axes.wide {
        return Some("value".to_owned());
    }
    match (chart_type, axes.y) {
        (_, Some(y)) => Some(y.name.clone()),
        (ChartType::Histogram, None) => Some(
            args.text("histnorm")
                .unwrap_or_else(|| args.text("histfunc").unwrap_or("count"))
                .to_owned(),
        ),
        (ChartType::Timeline, None) => None,
        (_, None) if axes.x.is_some() => Some("index".to_owned()),
        _ => None,
    }
}

fn cartesian_titles(
    chart_type: ChartType,
    axes: &AxisColumns<'_>,
    args: &Args<'_>,
    layout: &mut Map<String, Value>,
) {
    let x_title = match chart_type {
        ChartType::Timeline => None,
        _ => axes
            .x
            .map(|x| x.name.clone())
            .or_else(|| axes.y.map(|_| "index".to_owned())),
    };
    if let Some(title) = x_title {
        merge_into(layout, "xaxis", titled(&title));
    }
    if let Some(title) = y_title(chart_type, axes, args) {
        merge_into(layout, "yaxis", titled(&title));
    }
}

fn scene_titles(axes: &AxisColumns<'_>, args: &Args<'_>) -> Value {
    let mut scene = Map::new();
    for (key, column) in [
        ("xaxis", axes.x),
        ("yaxis", axes.y),
        ("zaxis", args.column("z").ok().flatten()),
    ] {
        if let Some(column) = column {
            scene.insert(key.to_owned(), titled(&column.name));
        }
    }
    for (key, keyword) in [("xaxis", "log_x"), ("yaxis", "log_y"), ("zaxis", "log_z")] {
        if args.flag(keyword) {
            let axis = scene
                .entry(key.to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
            axis["type"] = json!("log");
        }
    }
    scene.insert("domain".to_owned(), json!({ "x": [0.0, 1.0], "y": [0.0, 1.0] }));
    Value::Object(scene)
}

fn ternary_titles(args: &Args<'_>) -> Value {
    let mut ternary = Map::new();
    for axis in ["a", "b", "c"] {
        if let Some(column) = args.column(axis).ok().flatten() {
            ternary.insert(format!("{axis}axis"), titled(&column.name));
        }
    }
    Value::Object(ternary)
}

fn coloraxis(args: &Args<'_>, title: Option<&str>) -> Value {
    let mut axis = Map::new();
    if let Some(scale) = args.text("color_continuous_scale") {
        axis.insert("colorscale".to_owned(), json!(scale));
    }
    if let Some(title) = title {
        axis.insert("colorbar".to_owned(), titled(title));
    }
    Value::Object(axis)
}

/// Layout a constructor call produces, before any user layout update.
pub(super) fn base_layout(
    chart_type: ChartType,
    args: &Args<'_>,
    grouping: &Grouping<'_>,
    axes: &AxisColumns<'_>,
) -> Map<String, Value> {
    let mut layout = Map::new();
    layout.insert("legend".to_owned(), json!({ "tracegroupgap": 0 }));
    layout.insert("margin".to_owned(), json!({ "t": 60 }));

    if let Some(title) = args.text("title") {
        layout.insert("title".to_owned(), json!({ "text": title }));
    }
    for key in ["width", "height"] {
        if let Some(size) = args.number(key) {
            layout.insert(key.to_owned(), json!(size));
        }
    }
    let mode = match chart_type {
        ChartType::Bar | ChartType::Histogram | ChartType::Timeline => {
            Some(("barmode", args.text("barmode").unwrap_or("relative")))
        }
        ChartType::Box => Some(("boxmode", args.text("boxmode").unwrap_or("group"))),
        ChartType::Strip => Some(("boxmode", args.text("stripmode").unwrap_or("group"))),
        ChartType::Violin => Some(("violinmode", args.text("violinmode").unwrap_or("group"))),
        _ => None,
    };
    if let Some((key, value)) = mode {
        layout.insert(key.to_owned(), json!(value));
    }
    if chart_type == ChartType::Bar {
        if let Some(barnorm) = args.text("barnorm") {
            layout.insert("barnorm".to_owned(), json!(barnorm));
        }
    }

    let legend_title = ["color", "symbol", "line_dash", "pattern_shape"]
        .iter()
        .filter_map(|keyword| args.column(keyword).ok().flatten())
        .filter(|column| axes.continuous_color.is_none_or(|color| color.name != column.name))
        .map(|column| column.name.clone())
        .collect::<Vec<_>>();
    if axes.wide {
        merge_into(&mut layout, "legend", titled("variable"));
    } else if !legend_title.is_empty() {
        merge_into(&mut layout, "legend", titled(&legend_title.join(", ")));
    }

    match chart_type {
        ChartType::Scatter3d | ChartType::Line3d => {
            layout.insert("scene".to_owned(), scene_titles(axes, args));
        }
        ChartType::ScatterTernary => {
            layout.insert("ternary".to_owned(), ternary_titles(args));
        }
        ChartType::Pie | ChartType::ParallelCoordinates | ChartType::ScatterMatrix => {}
        _ => {
            cartesian_layout(chart_type, args, grouping, axes, &mut layout);
        }
    }

    let colorbar_title = match chart_type {
        ChartType::DensityHeatmap => Some(
            args.text("histfunc")
                .filter(|_| args.column("z").ok().flatten().is_some())
                .map_or_else(|| "count".to_owned(), |func| format!("{func} of z")),
        ),
        _ => axes.continuous_color.map(|column| column.name.clone()),
    };
    if colorbar_title.is_some() {
        layout.insert(
            "coloraxis".to_owned(),
            coloraxis(args, colorbar_title.as_deref()),
        );
    }
    if chart_type == ChartType::Timeline {
        merge_into(&mut layout, "xaxis", json!({ "type": "date" }));
    }
    layout
}

fn cartesian_layout(
    chart_type: ChartType,
    args: &Args<'_>,
    grouping: &Grouping<'_>,
    axes: &AxisColumns<'_>,
    layout: &mut Map<String, Value>,
) {
    for (key, value) in grouping.facet_layout() {
        layout.insert(key, value);
    }
    cartesian_titles(chart_type, axes, args, layout);
    for (xaxis, yaxis) in grouping.layout_axis_keys() {
        if args.flag("log_x") {
            merge_into(layout, &xaxis, json!({ "type": "log" }));
        }
        if args.flag("log_y") {
            merge_into(layout, &yaxis, json!({ "type": "log" }));
        }
    }
}
