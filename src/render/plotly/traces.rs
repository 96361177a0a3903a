use serde_json::{Value, json};

use crate::core::{Cell, ChartType, Column};
use crate::error::{WorkbenchError, WorkbenchResult};
use crate::render::Trace;

use super::args::Args;
use super::grouping::Group;

const TRANSPARENT: &str = "rgba(255,255,255,0)";

/// Cell values of `column` at `rows`, as a JSON array.
pub(super) fn pick(column: &Column, rows: &[usize]) -> Value {
    Value::Array(
        rows.iter()
            .map(|row| column.cells.get(*row).map_or(Value::Null, Cell::to_json))
            .collect(),
    )
}

fn row_numbers(rows: &[usize]) -> Value {
    Value::Array(rows.iter().map(|row| json!(row)).collect())
}

/// Sets `key` from `column`, or from row numbers when `fallback_to_index`.
fn set_axis(
    trace: &mut Trace,
    key: &str,
    column: Option<&Column>,
    rows: &[usize],
    fallback_to_index: bool,
) {
    match column {
        Some(column) => trace.insert(key, pick(column, rows)),
        None if fallback_to_index => trace.insert(key, row_numbers(rows)),
        None => {}
    }
}

fn set_error_bars(
    trace: &mut Trace,
    args: &Args<'_>,
    axis: &str,
    rows: &[usize],
) -> WorkbenchResult<()> {
    let plus = args.column(&format!("error_{axis}"))?;
    let minus = args.column(&format!("error_{axis}_minus"))?;
    if plus.is_none() && minus.is_none() {
        return Ok(());
    }
    let mut bars = json!({ "type": "data", "symmetric": minus.is_none() });
    if let Some(plus) = plus {
        bars["array"] = pick(plus, rows);
    }
    if let Some(minus) = minus {
        bars["arrayminus"] = pick(minus, rows);
    }
    trace.insert(&format!("error_{axis}"), bars);
    Ok(())
}

fn set_text(trace: &mut Trace, args: &Args<'_>, rows: &[usize]) -> WorkbenchResult<bool> {
    match args.column("text")? {
        Some(text) => {
            trace.insert("text", pick(text, rows));
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Attaches hover columns as custom data with a matching template.
pub(super) fn set_hover_data(
    trace: &mut Trace,
    args: &Args<'_>,
    rows: &[usize],
) -> WorkbenchResult<()> {
    let columns = args.columns("hover_data")?;
    if columns.is_empty() {
        return Ok(());
    }
    let customdata: Vec<Value> = rows
        .iter()
        .map(|row| {
            Value::Array(
                columns
                    .iter()
                    .map(|column| column.cells.get(*row).map_or(Value::Null, Cell::to_json))
                    .collect(),
            )
        })
        .collect();
    let template = columns
        .iter()
        .enumerate()
        .map(|(index, column)| format!("{}=%{{customdata[{index}]}}", column.name))
        .collect::<Vec<_>>()
        .join("<br>");
    trace.insert("customdata", Value::Array(customdata));
    trace.insert("hovertemplate", json!(format!("{template}<extra></extra>")));
    Ok(())
}

fn scatter_family(
    chart_type: ChartType,
    args: &Args<'_>,
    x: Option<&Column>,
    y: Option<&Column>,
    group: &Group<'_>,
) -> WorkbenchResult<Trace> {
    let rows = &group.rows;
    let mut trace = Trace::new("scatter");
    set_axis(&mut trace, "x", x, rows, y.is_some());
    set_axis(&mut trace, "y", y, rows, x.is_some());

    let mut mode = match chart_type {
        ChartType::Scatter => "markers".to_owned(),
        _ if args.flag("markers") => "lines+markers".to_owned(),
        _ => "lines".to_owned(),
    };
    if set_text(&mut trace, args, rows)? {
        mode.push_str("+text");
    }
    trace.insert("mode", json!(mode));

    match chart_type {
        ChartType::Scatter => {
            trace.set("marker_color", json!(group.color));
            if let Some(size) = args.column("size")? {
                trace.set("marker_size", pick(size, rows));
                trace.set("marker_sizemode", json!("area"));
            }
            if let Some(opacity) = args.number("opacity") {
                trace.set("marker_opacity", json!(opacity));
            }
        }
        _ => {
            trace.set("line_color", json!(group.color));
            trace.set("marker_color", json!(group.color));
            if let Some(shape) = args.text("line_shape") {
                trace.set("line_shape", json!(shape));
            }
            if let Some(dash) = group.dash {
                trace.set("line_dash", json!(dash));
            }
        }
    }
    if let Some(symbol) = group.symbol {
        trace.set("marker_symbol", json!(symbol));
    }

    if chart_type == ChartType::Area {
        trace.insert("stackgroup", json!("1"));
        if let Some(groupnorm) = args.text("groupnorm") {
            trace.insert("groupnorm", json!(groupnorm));
        }
        if let Some(pattern) = group.pattern {
            trace.set("fillpattern_shape", json!(pattern));
        }
    } else {
        set_error_bars(&mut trace, args, "x", rows)?;
        set_error_bars(&mut trace, args, "y", rows)?;
    }
    Ok(trace)
}

fn bar(
    args: &Args<'_>,
    x: Option<&Column>,
    y: Option<&Column>,
    group: &Group<'_>,
) -> WorkbenchResult<Trace> {
    let rows = &group.rows;
    let mut trace = Trace::new("bar").with("orientation", json!("v"));
    set_axis(&mut trace, "x", x, rows, true);
    set_axis(&mut trace, "y", y, rows, false);
    trace.set("marker_color", json!(group.color));
    if let Some(pattern) = group.pattern {
        trace.set("marker_pattern_shape", json!(pattern));
    }
    if let Some(base) = args.column("base")? {
        trace.insert("base", pick(base, rows));
    }
    set_text(&mut trace, args, rows)?;
    if args.flag("text_auto") {
        trace.insert("texttemplate", json!("%{y}"));
    }
    if let Some(opacity) = args.number("opacity") {
        trace.set("marker_opacity", json!(opacity));
    }
    set_error_bars(&mut trace, args, "x", rows)?;
    set_error_bars(&mut trace, args, "y", rows)?;
    Ok(trace)
}

fn histogram(args: &Args<'_>, x: Option<&Column>, y: Option<&Column>, group: &Group<'_>) -> Trace {
    let rows = &group.rows;
    let mut trace = Trace::new("histogram").with("marker_color", json!(group.color));
    set_axis(&mut trace, "x", x, rows, false);
    set_axis(&mut trace, "y", y, rows, false);
    let binned_axis = if x.is_some() || y.is_none() { "x" } else { "y" };
    trace.insert("bingroup", json!(binned_axis));
    if x.is_some() && y.is_some() {
        if let Some(histfunc) = args.text("histfunc") {
            trace.insert("histfunc", json!(histfunc));
        }
    }
    if let Some(histnorm) = args.text("histnorm") {
        trace.insert("histnorm", json!(histnorm));
    }
    if args.flag("cumulative") {
        trace.set("cumulative_enabled", json!(true));
    }
    if let Some(nbins) = args.number("nbins") {
        trace.insert(&format!("nbins{binned_axis}"), json!(nbins));
    }
    if let Some(pattern) = group.pattern {
        trace.set("marker_pattern_shape", json!(pattern));
    }
    if let Some(opacity) = args.number("opacity") {
        trace.set("marker_opacity", json!(opacity));
    }
    if args.flag("text_auto") {
        trace.insert("texttemplate", json!("%{value}"));
    }
    trace
}

fn distribution(
    chart_type: ChartType,
    args: &Args<'_>,
    x: Option<&Column>,
    y: Option<&Column>,
    group: &Group<'_>,
) -> Trace {
    let rows = &group.rows;
    let mut trace = match chart_type {
        ChartType::Violin => {
            let mut trace = Trace::new("violin");
            if let Some(points) = args.raw("points") {
                trace.insert("points", points.clone());
            }
            trace.set("box_visible", json!(args.flag("box")));
            trace
        }
        ChartType::Strip => Trace::new("box")
            .with("boxpoints", json!("all"))
            .with("pointpos", json!(0))
            .with("jitter", json!(1))
            .with("fillcolor", json!(TRANSPARENT))
            .with("line_color", json!(TRANSPARENT))
            .with("hoveron", json!("points")),
        _ => {
            let mut trace = Trace::new("box");
            if let Some(points) = args.raw("points") {
                trace.insert("boxpoints", points.clone());
            }
            trace.insert("notched", json!(args.flag("notched")));
            trace
        }
    };
    set_axis(&mut trace, "x", x, rows, false);
    set_axis(&mut trace, "y", y, rows, false);
    trace.set("marker_color", json!(group.color));
    trace.insert("alignmentgroup", json!("True"));
    trace.insert("offsetgroup", json!(group.name));
    trace
}

fn density_contour(
    args: &Args<'_>,
    x: Option<&Column>,
    y: Option<&Column>,
    group: &Group<'_>,
) -> WorkbenchResult<Trace> {
    let rows = &group.rows;
    let mut trace = Trace::new("histogram2dcontour")
        .with("contours_coloring", json!("none"))
        .with("line_color", json!(group.color))
        .with("showscale", json!(false));
    set_axis(&mut trace, "x", x, rows, false);
    set_axis(&mut trace, "y", y, rows, false);
    if let Some(z) = args.column("z")? {
        trace.insert("z", pick(z, rows));
        if let Some(histfunc) = args.text("histfunc") {
            trace.insert("histfunc", json!(histfunc));
        }
    }
    set_binning_2d(&mut trace, args);
    if args.flag("text_auto") {
        trace.insert("texttemplate", json!("%{z}"));
    }
    Ok(trace)
}

fn set_binning_2d(trace: &mut Trace, args: &Args<'_>) {
    if let Some(histnorm) = args.text("histnorm") {
        trace.insert("histnorm", json!(histnorm));
    }
    for key in ["nbinsx", "nbinsy"] {
        if let Some(bins) = args.number(key) {
            trace.insert(key, json!(bins));
        }
    }
}

fn three_dimensional(
    chart_type: ChartType,
    args: &Args<'_>,
    x: Option<&Column>,
    y: Option<&Column>,
    group: &Group<'_>,
) -> WorkbenchResult<Trace> {
    let rows = &group.rows;
    let mode = match chart_type {
        ChartType::Line3d if args.flag("markers") => "lines+markers",
        ChartType::Line3d => "lines",
        _ => "markers",
    };
    let mut trace = Trace::new("scatter3d")
        .with("mode", json!(mode))
        .with("scene", json!("scene"))
        .with("marker_color", json!(group.color));
    set_axis(&mut trace, "x", x, rows, false);
    set_axis(&mut trace, "y", y, rows, false);
    set_axis(&mut trace, "z", args.column("z")?, rows, false);
    if chart_type == ChartType::Line3d {
        trace.set("line_color", json!(group.color));
        if let Some(dash) = group.dash {
            trace.set("line_dash", json!(dash));
        }
    } else if let Some(size) = args.column("size")? {
        trace.set("marker_size", pick(size, rows));
        trace.set("marker_sizemode", json!("area"));
    }
    if let Some(symbol) = group.symbol {
        trace.set("marker_symbol", json!(symbol));
    }
    if let Some(opacity) = args.number("opacity") {
        trace.set("marker_opacity", json!(opacity));
    }
    if set_text(&mut trace, args, rows)? {
        trace.insert("mode", json!(format!("{mode}+text")));
    }
    for axis in ["x", "y", "z"] {
        set_error_bars(&mut trace, args, axis, rows)?;
    }
    Ok(trace)
}

fn ternary(args: &Args<'_>, group: &Group<'_>) -> WorkbenchResult<Trace> {
    let rows = &group.rows;
    let mut trace = Trace::new("scatterternary")
        .with("mode", json!("markers"))
        .with("marker_color", json!(group.color));
    for axis in ["a", "b", "c"] {
        set_axis(&mut trace, axis, args.column(axis)?, rows, false);
    }
    if let Some(size) = args.column("size")? {
        trace.set("marker_size", pick(size, rows));
        trace.set("marker_sizemode", json!("area"));
    }
    if let Some(symbol) = group.symbol {
        trace.set("marker_symbol", json!(symbol));
    }
    if let Some(opacity) = args.number("opacity") {
        trace.set("marker_opacity", json!(opacity));
    }
    if set_text(&mut trace, args, rows)? {
        trace.insert("mode", json!("markers+text"));
    }
    Ok(trace)
}

fn duration(start: &Cell, end: &Cell) -> Option<(Value, f64)> {
    match (start, end) {
        (Cell::DateTime(start_at), Cell::DateTime(end_at)) => Some((
            start.to_json(),
            (*end_at - *start_at).num_milliseconds() as f64,
        )),
        _ => {
            let (start_value, end_value) = (start.as_f64()?, end.as_f64()?);
            Some((start.to_json(), end_value - start_value))
        }
    }
}

fn timeline(args: &Args<'_>, y: Option<&Column>, group: &Group<'_>) -> WorkbenchResult<Trace> {
    let (Some(start), Some(end)) = (args.column("x_start")?, args.column("x_end")?) else {
        return Err(WorkbenchError::InvalidData(
            "timeline requires both `x_start` and `x_end`".to_owned(),
        ));
    };
    let rows = &group.rows;
    let mut bases = Vec::with_capacity(rows.len());
    let mut lengths = Vec::with_capacity(rows.len());
    for row in rows {
        let (Some(start_cell), Some(end_cell)) = (start.cells.get(*row), end.cells.get(*row)) else {
            continue;
        };
        let (base, length) = duration(start_cell, end_cell).ok_or_else(|| {
            WorkbenchError::InvalidData(format!(
                "timeline bounds `{}`/`{}` must both be dates or numbers",
                start.name, end.name
            ))
        })?;
        bases.push(base);
        lengths.push(json!(length));
    }
    let mut trace = Trace::new("bar")
        .with("orientation", json!("h"))
        .with("base", Value::Array(bases))
        .with("x", Value::Array(lengths))
        .with("marker_color", json!(group.color));
    set_axis(&mut trace, "y", y, rows, true);
    if let Some(pattern) = group.pattern {
        trace.set("marker_pattern_shape", json!(pattern));
    }
    if let Some(opacity) = args.number("opacity") {
        trace.set("marker_opacity", json!(opacity));
    }
    set_text(&mut trace, args, rows)?;
    Ok(trace)
}

fn scatter_matrix(args: &Args<'_>, group: &Group<'_>) -> WorkbenchResult<Trace> {
    let mut dimensions = args.columns("dimensions")?;
    if dimensions.is_empty() {
        dimensions = args.dataset.columns().iter().collect();
    }
    let rows = &group.rows;
    let mut trace = Trace::new("splom")
        .with(
            "dimensions",
            Value::Array(
                dimensions
                    .iter()
                    .map(|column| json!({ "label": column.name, "values": pick(column, rows) }))
                    .collect(),
            ),
        )
        .with("marker_color", json!(group.color));
    if let Some(symbol) = group.symbol {
        trace.set("marker_symbol", json!(symbol));
    }
    if let Some(size) = args.column("size")? {
        trace.set("marker_size", pick(size, rows));
    }
    if let Some(opacity) = args.number("opacity") {
        trace.set("marker_opacity", json!(opacity));
    }
    Ok(trace)
}

/// Trace for one group of a grouped chart type.
pub(super) fn group_trace(
    chart_type: ChartType,
    args: &Args<'_>,
    x: Option<&Column>,
    y: Option<&Column>,
    group: &Group<'_>,
) -> WorkbenchResult<Trace> {
    match chart_type {
        ChartType::Scatter | ChartType::Line | ChartType::Area => {
            scatter_family(chart_type, args, x, y, group)
        }
        ChartType::Bar => bar(args, x, y, group),
        ChartType::Histogram => Ok(histogram(args, x, y, group)),
        ChartType::Box | ChartType::Violin | ChartType::Strip => {
            Ok(distribution(chart_type, args, x, y, group))
        }
        ChartType::DensityContour => density_contour(args, x, y, group),
        ChartType::Scatter3d | ChartType::Line3d => {
            three_dimensional(chart_type, args, x, y, group)
        }
        ChartType::ScatterTernary => ternary(args, group),
        ChartType::Timeline => timeline(args, y, group),
        ChartType::ScatterMatrix => scatter_matrix(args, group),
        ChartType::DensityHeatmap => density_heatmap(args, x, y, &group.rows),
        ChartType::Pie | ChartType::ParallelCoordinates => Err(WorkbenchError::InvalidData(
            format!("`{chart_type}` is not built per group"),
        )),
    }
}

pub(super) fn density_heatmap(
    args: &Args<'_>,
    x: Option<&Column>,
    y: Option<&Column>,
    rows: &[usize],
) -> WorkbenchResult<Trace> {
    let mut trace = Trace::new("histogram2d").with("coloraxis", json!("coloraxis"));
    set_axis(&mut trace, "x", x, rows, false);
    set_axis(&mut trace, "y", y, rows, false);
    if let Some(z) = args.column("z")? {
        trace.insert("z", pick(z, rows));
        if let Some(histfunc) = args.text("histfunc") {
            trace.insert("histfunc", json!(histfunc));
        }
    }
    set_binning_2d(&mut trace, args);
    if let Some(opacity) = args.number("opacity") {
        trace.insert("opacity", json!(opacity));
    }
    if args.flag("text_auto") {
        trace.insert("texttemplate", json!("%{z}"));
    }
    Ok(trace)
}

pub(super) fn pie(args: &Args<'_>, palette: &[String]) -> WorkbenchResult<Trace> {
    let rows: Vec<usize> = (0..args.dataset.row_count()).collect();
    let names = args.column("names")?;
    let mut trace = Trace::new("pie");
    set_axis(&mut trace, "labels", names, &rows, true);
    if let Some(values) = args.column("values")? {
        trace.insert("values", pick(values, &rows));
    }
    let color_source = args.column("color")?.or(names);
    if let Some(color_source) = color_source {
        let distinct = color_source.distinct();
        let colors: Vec<Value> = color_source
            .cells
            .iter()
            .map(|cell| {
                let index = distinct
                    .iter()
                    .position(|value| *value == cell.display())
                    .unwrap_or(0);
                palette
                    .get(index % palette.len().max(1))
                    .map_or(Value::Null, |color| json!(color))
            })
            .collect();
        trace.set("marker_colors", Value::Array(colors));
    }
    if let Some(opacity) = args.number("opacity") {
        trace.insert("opacity", json!(opacity));
    }
    set_hover_data(&mut trace, args, &rows)?;
    Ok(trace)
}

pub(super) fn parallel_coordinates(args: &Args<'_>) -> WorkbenchResult<Trace> {
    let mut dimensions = args.columns("dimensions")?;
    if dimensions.is_empty() {
        dimensions = args
            .dataset
            .columns()
            .iter()
            .filter(|column| column.kind().is_continuous())
            .collect();
    }
    let rows: Vec<usize> = (0..args.dataset.row_count()).collect();
    let mut trace = Trace::new("parcoords").with(
        "dimensions",
        Value::Array(
            dimensions
                .iter()
                .map(|column| json!({ "label": column.name, "values": pick(column, &rows) }))
                .collect(),
        ),
    );
    if let Some(color) = args.column("color")? {
        trace.set("line_color", pick(color, &rows));
        trace.set("line_coloraxis", json!("coloraxis"));
    }
    Ok(trace)
}
