use chart_kindergarten::core::{ChartType, Column, Dataset, KwargMap};
use chart_kindergarten::render::{ChartBackend, Figure, PlotlyBackend};
use chart_kindergarten::WorkbenchError;
use serde_json::{Value, json};

fn tips() -> Dataset {
    Dataset::new(
        "tips",
        vec![
            Column::from_values("total_bill", vec![16.99, 10.34, 21.01, 23.68, 24.59, 25.29]),
            Column::from_values("tip", vec![1.01, 1.66, 3.5, 3.31, 3.61, 4.71]),
            Column::from_values("size", vec![2_i64, 3, 3, 2, 4, 4]),
            Column::from_values("sex", vec!["F", "M", "M", "M", "F", "M"]),
            Column::from_values("day", vec!["Sun", "Sun", "Sat", "Sat", "Sun", "Sat"]),
            Column::from_values("smoker", vec![false, false, true, false, true, true]),
        ],
    )
    .expect("valid dataset")
}

fn kwargs(pairs: &[(&str, Value)]) -> KwargMap {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect()
}

fn build(chart_type: ChartType, pairs: &[(&str, Value)]) -> Figure {
    PlotlyBackend
        .construct(chart_type, &tips(), &kwargs(pairs))
        .expect("figure builds")
}

#[test]
fn wide_form_y_yields_trace_per_column() {
    let figure = build(
        ChartType::Line,
        &[("x", json!("size")), ("y", json!(["total_bill", "tip"]))],
    );
    assert_eq!(figure.data.len(), 2);
    assert_eq!(figure.data[0].get("name"), Some(&json!("total_bill")));
    assert_eq!(figure.data[1].get("name"), Some(&json!("tip")));
    assert_eq!(figure.data[0].get("mode"), Some(&json!("lines")));
    assert_eq!(figure.layout["legend"]["title"]["text"], json!("variable"));
    assert_eq!(figure.layout["yaxis"]["title"]["text"], json!("value"));
}

#[test]
fn custom_palette_colors_groups_in_order() {
    let figure = build(
        ChartType::Bar,
        &[
            ("x", json!("day")),
            ("y", json!("tip")),
            ("color", json!("sex")),
            ("color_discrete_sequence", json!(["red", "blue"])),
        ],
    );
    assert_eq!(figure.data[0].lookup("marker_color"), Some(&json!("red")));
    assert_eq!(figure.data[1].lookup("marker_color"), Some(&json!("blue")));
    assert_eq!(figure.layout["barmode"], json!("relative"));
}

#[test]
fn facets_assign_numbered_axes() {
    let figure = build(
        ChartType::Scatter,
        &[
            ("x", json!("total_bill")),
            ("y", json!("tip")),
            ("facet_col", json!("day")),
        ],
    );
    assert_eq!(figure.data.len(), 2);
    assert_eq!(figure.data[0].get("xaxis"), Some(&json!("x")));
    assert_eq!(figure.data[1].get("xaxis"), Some(&json!("x2")));
    assert_eq!(figure.layout["xaxis2"]["anchor"], json!("y2"));
    let annotations = figure.layout["annotations"].as_array().expect("annotations");
    assert_eq!(annotations[0]["text"], json!("day=Sun"));
}

#[test]
fn histogram_options_map_to_trace_attributes() {
    let figure = build(
        ChartType::Histogram,
        &[
            ("x", json!("total_bill")),
            ("nbins", json!(5)),
            ("cumulative", json!(true)),
            ("histnorm", json!("percent")),
            ("marginal", json!("rug")),
        ],
    );
    assert_eq!(figure.data.len(), 2);
    let histogram = &figure.data[0];
    assert_eq!(histogram.get("nbinsx"), Some(&json!(5.0)));
    assert_eq!(histogram.lookup("cumulative_enabled"), Some(&json!(true)));
    assert_eq!(histogram.get("histnorm"), Some(&json!("percent")));
    assert_eq!(figure.data[1].get("boxpoints"), Some(&json!("all")));
    assert_eq!(figure.layout["yaxis"]["title"]["text"], json!("percent"));
}

#[test]
fn box_and_strip_share_the_box_trace() {
    let box_figure = build(
        ChartType::Box,
        &[("y", json!("tip")), ("points", json!(false)), ("notched", json!(true))],
    );
    assert_eq!(box_figure.data[0].get("boxpoints"), Some(&json!(false)));
    assert_eq!(box_figure.data[0].get("notched"), Some(&json!(true)));

    let strip = build(ChartType::Strip, &[("y", json!("tip")), ("stripmode", json!("overlay"))]);
    assert_eq!(strip.data[0].get("boxpoints"), Some(&json!("all")));
    assert_eq!(strip.layout["boxmode"], json!("overlay"));
}

#[test]
fn hover_data_becomes_custom_data() {
    let figure = build(
        ChartType::Scatter,
        &[
            ("x", json!("total_bill")),
            ("y", json!("tip")),
            ("hover_data", json!(["day", "smoker"])),
        ],
    );
    let trace = &figure.data[0];
    assert_eq!(trace.get("customdata").and_then(|data| data.get(0)), Some(&json!(["Sun", false])));
    let template = trace
        .get("hovertemplate")
        .and_then(Value::as_str)
        .expect("template");
    assert!(template.contains("smoker=%{customdata[1]}"));
}

#[test]
fn error_bars_reference_columns() {
    let figure = build(
        ChartType::Scatter,
        &[("x", json!("total_bill")), ("y", json!("tip")), ("error_y", json!("size"))],
    );
    let error_y = figure.data[0].get("error_y").expect("error bars");
    assert_eq!(error_y["array"], json!([2, 3, 3, 2, 4, 4]));
    assert_eq!(error_y["symmetric"], json!(true));
}

#[test]
fn pie_uses_names_and_values() {
    let figure = build(ChartType::Pie, &[("names", json!("day")), ("values", json!("tip"))]);
    assert_eq!(figure.data.len(), 1);
    let pie = &figure.data[0];
    assert_eq!(pie.get("labels").and_then(Value::as_array).map(Vec::len), Some(6));
    let colors = pie.lookup("marker_colors").and_then(Value::as_array).expect("colors");
    assert_eq!(colors[0], colors[1]);
    assert_ne!(colors[0], colors[2]);
}

#[test]
fn dimensions_default_to_dataset_columns() {
    let matrix = build(ChartType::ScatterMatrix, &[]);
    assert_eq!(matrix.data[0].get("dimensions").and_then(Value::as_array).map(Vec::len), Some(6));

    let parallel = build(ChartType::ParallelCoordinates, &[("color", json!("size"))]);
    let dimensions = parallel.data[0]
        .get("dimensions")
        .and_then(Value::as_array)
        .expect("dimensions");
    assert_eq!(dimensions.len(), 3);
    assert_eq!(parallel.data[0].lookup("line_coloraxis"), Some(&json!("coloraxis")));
    assert_eq!(parallel.layout["coloraxis"]["colorbar"]["title"]["text"], json!("size"));
}

#[test]
fn three_dimensional_charts_use_the_scene() {
    let figure = build(
        ChartType::Scatter3d,
        &[
            ("x", json!("total_bill")),
            ("y", json!("tip")),
            ("z", json!("size")),
            ("log_z", json!(true)),
        ],
    );
    assert_eq!(figure.data[0].get("scene"), Some(&json!("scene")));
    assert_eq!(figure.layout["scene"]["zaxis"]["title"]["text"], json!("size"));
    assert_eq!(figure.layout["scene"]["zaxis"]["type"], json!("log"));
}

#[test]
fn density_heatmap_bins_into_a_color_axis() {
    let figure = build(
        ChartType::DensityHeatmap,
        &[
            ("x", json!("total_bill")),
            ("y", json!("tip")),
            ("nbinsx", json!(4)),
            ("color_continuous_scale", json!("Viridis")),
        ],
    );
    assert_eq!(figure.data[0].trace_type(), "histogram2d");
    assert_eq!(figure.data[0].get("nbinsx"), Some(&json!(4.0)));
    assert_eq!(figure.layout["coloraxis"]["colorscale"], json!("Viridis"));
}

#[test]
fn log_axes_apply_to_every_facet() {
    let figure = build(
        ChartType::Scatter,
        &[
            ("x", json!("total_bill")),
            ("facet_row", json!("sex")),
            ("log_x", json!(true)),
        ],
    );
    assert_eq!(figure.layout["xaxis"]["type"], json!("log"));
    assert_eq!(figure.layout["xaxis2"]["type"], json!("log"));
}

#[test]
fn unknown_columns_are_errors() {
    let err = PlotlyBackend
        .construct(ChartType::Scatter, &tips(), &kwargs(&[("x", json!("nope"))]))
        .expect_err("unknown column");
    assert!(matches!(err, WorkbenchError::UnknownColumn { column, .. } if column == "nope"));

    let err = PlotlyBackend
        .construct(ChartType::Timeline, &tips(), &kwargs(&[("x_start", json!("tip"))]))
        .expect_err("timeline needs both bounds");
    assert!(matches!(err, WorkbenchError::InvalidData(_)));
}

#[test]
fn columns_index_name_is_not_plottable() {
    let dataset = tips().with_columns_name("measure");
    let err = PlotlyBackend
        .construct(ChartType::Bar, &dataset, &kwargs(&[("x", json!("measure"))]))
        .expect_err("index name has no values");
    assert!(matches!(err, WorkbenchError::InvalidValue { .. }));
}
