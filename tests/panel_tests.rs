use std::sync::Arc;

use chart_kindergarten::core::{ChartType, Column, Dataset, DatasetRegistry};
use chart_kindergarten::panel::{Panel, RenderMode};
use chart_kindergarten::registry::OptionRegistry;
use chart_kindergarten::render::{NullBackend, PlotlyBackend};
use chart_kindergarten::WorkbenchError;
use serde_json::json;

fn datasets() -> DatasetRegistry {
    let mut datasets = DatasetRegistry::new();
    datasets.insert(
        Dataset::new(
            "sales",
            vec![
                Column::from_values("month", vec![1_i64, 2, 3, 4]),
                Column::from_values("revenue", vec![10.0, 12.5, 9.0, 14.0]),
                Column::from_values("cost", vec![4.0, 5.5, 6.0, 7.0]),
                Column::from_values("region", vec!["north", "south", "north", "south"]),
            ],
        )
        .expect("valid dataset"),
    );
    datasets
}

fn scatter_panel(datasets: &DatasetRegistry) -> Panel {
    let mut panel = Panel::new(0, Arc::new(OptionRegistry::build()));
    panel.set_chart_type(Some(ChartType::Scatter));
    panel.set_dataset(datasets, "sales").expect("dataset registered");
    panel
}

#[test]
fn chart_type_change_resets_to_applicable_defaults() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel.set_option("x", json!("month")).expect("x accepted");
    assert_eq!(panel.get("x"), Some(&json!("month")));

    panel.set_chart_type(Some(ChartType::Box));
    assert_eq!(panel.get("x"), None);
    assert_eq!(panel.get("boxmode"), Some(&json!("group")));
    assert_eq!(panel.get("points"), Some(&json!("outliers")));
    assert_eq!(panel.get("barmode"), None);

    panel.set_chart_type(None);
    assert!(panel.kwargs_map().is_empty());
    assert!(!panel.is_renderable());
}

#[test]
fn single_y_selection_renders_as_scalar() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel.set_option("y", json!(["revenue"])).expect("y accepted");
    let kwargs = panel.kwargs(RenderMode::Live);
    assert_eq!(kwargs.construction.get("y"), Some(&json!("revenue")));

    let figure = panel.render(&NullBackend, RenderMode::Live).expect("renders");
    assert_eq!(figure.data[0].lookup("meta_y"), Some(&json!("revenue")));
}

#[test]
fn comma_joined_palette_is_stored_as_list() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel
        .set_option("color_discrete_sequence", json!("a,b,c"))
        .expect("palette accepted");
    assert_eq!(panel.get("color_discrete_sequence"), Some(&json!(["a", "b", "c"])));
}

#[test]
fn empty_string_absents_a_keyword() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel.set_option("color", json!("region")).expect("color accepted");
    panel.set_option("color", json!("")).expect("color cleared");
    assert!(!panel.kwargs_map().contains_key("color"));

    panel.set_option("barmode", json!("")).expect("not applicable");
    panel.set_option("points", json!("")).expect("not applicable");
    assert!(!panel.kwargs_map().contains_key("barmode"));
}

#[test]
fn inapplicable_and_unknown_keywords_are_ignored() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    assert!(!panel.set_option("names", json!("region")).expect("ignored"));
    assert!(!panel.set_option("no_such_option", json!(1)).expect("ignored"));
    assert!(!panel.kwargs_map().contains_key("names"));

    let mut blank = Panel::new(1, Arc::new(OptionRegistry::build()));
    assert!(!blank.set_option("x", json!("month")).expect("ignored"));
}

#[test]
fn invalid_values_are_rejected() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    let err = panel
        .set_option("log_x", json!("maybe"))
        .expect_err("not a boolean");
    assert!(matches!(err, WorkbenchError::InvalidValue { .. }));
    assert_eq!(panel.get("log_x"), Some(&json!(false)));
}

#[test]
fn mapping_keeps_registry_order() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel.set_option("y", json!("revenue")).expect("y accepted");
    panel.set_option("x", json!("month")).expect("x accepted");
    let keys: Vec<&str> = panel.kwargs_map().keys().map(String::as_str).collect();
    let x = keys.iter().position(|key| *key == "x").expect("x stored");
    let y = keys.iter().position(|key| *key == "y").expect("y stored");
    assert!(x < y);
}

#[test]
fn reproduction_mode_drops_defaults() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel.set_option("x", json!("month")).expect("x accepted");
    panel.set_option("log_y", json!(true)).expect("log accepted");
    panel.set_option("marker_size", json!("12")).expect("size accepted");
    panel.set_option("xaxis_title", json!("Month")).expect("title accepted");

    let live = panel.kwargs(RenderMode::Live);
    assert!(live.construction.contains_key("log_x"));
    assert!(live.construction.contains_key("color_discrete_sequence"));

    let terse = panel.kwargs(RenderMode::Reproduction);
    assert_eq!(
        terse.construction.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["x", "log_y"]
    );
    assert_eq!(terse.traces.get("marker_size"), Some(&json!(12)));
    assert_eq!(panel.layout_kwargs().get("xaxis_title"), Some(&json!("Month")));
}

#[test]
fn zaxis_title_targets_the_scene() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel.set_chart_type(Some(ChartType::Scatter3d));
    panel.set_option("zaxis_title", json!("Depth")).expect("title accepted");
    assert_eq!(
        panel.layout_kwargs().get("scene_zaxis_title"),
        Some(&json!("Depth"))
    );
}

#[test]
fn render_without_dataset_or_chart_type_is_empty() {
    let registry = Arc::new(OptionRegistry::build());
    let mut panel = Panel::new(0, Arc::clone(&registry));
    assert!(panel
        .render(&PlotlyBackend, RenderMode::Live)
        .expect("renders")
        .is_empty());

    panel.set_chart_type(Some(ChartType::Bar));
    assert!(panel.is_renderable());
    assert!(panel
        .render(&PlotlyBackend, RenderMode::Live)
        .expect("renders")
        .is_empty());
}

#[test]
fn dataset_change_rebuilds_column_choices_and_empty_name_unbinds() {
    let mut datasets = datasets();
    datasets.insert(
        Dataset::new(
            "costs",
            vec![
                Column::from_values("r", vec![1.0, 2.0]),
                Column::from_values("q", vec!["a", "b"]),
            ],
        )
        .expect("valid dataset"),
    );
    let mut panel = scatter_panel(&datasets);
    panel.set_option("x", json!("month")).expect("x accepted");
    let x_choices = |panel: &Panel| -> Vec<serde_json::Value> {
        let sheet = panel.controls(&datasets);
        let x = sheet.find("x").expect("x visible");
        x.options.iter().map(|option| option.value.clone()).collect()
    };
    assert_eq!(
        x_choices(&panel),
        vec![json!(null), json!("cost"), json!("month"), json!("region"), json!("revenue")]
    );

    panel.set_dataset(&datasets, "costs").expect("dataset registered");
    assert_eq!(panel.dataset_name(), Some("costs"));
    assert_eq!(panel.get("x"), Some(&json!("month")));
    assert_eq!(x_choices(&panel), vec![json!(null), json!("q"), json!("r")]);

    panel.set_dataset(&datasets, "").expect("unbinds");
    assert_eq!(panel.dataset_name(), None);
    assert_eq!(panel.get("x"), Some(&json!("month")));

    let err = panel.set_dataset(&datasets, "missing").expect_err("unknown dataset");
    assert!(matches!(err, WorkbenchError::UnknownDataset(name) if name == "missing"));
}

#[test]
fn lowercase_boolean_choice_is_stored_typed() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel.set_chart_type(Some(ChartType::Box));
    panel.set_option("points", json!("false")).expect("points accepted");
    assert_eq!(panel.get("points"), Some(&json!(false)));
}

#[test]
fn scatter_render_places_text_and_forces_legend() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel.set_option("x", json!("month")).expect("x accepted");
    panel.set_option("y", json!("revenue")).expect("y accepted");
    panel.set_option("marker_color", json!("steelblue")).expect("color accepted");

    let figure = panel.render(&PlotlyBackend, RenderMode::Live).expect("renders");
    assert_eq!(figure.data.len(), 1);
    let trace = &figure.data[0];
    assert_eq!(trace.get("textposition"), Some(&json!("bottom right")));
    assert_eq!(trace.get("showlegend"), Some(&json!(true)));
    assert_eq!(trace.lookup("marker_color"), Some(&json!("steelblue")));
}

#[test]
fn rejected_text_position_is_swallowed() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    panel.set_option("x", json!("month")).expect("x accepted");
    panel.set_option("y", json!("revenue")).expect("y accepted");
    panel.set_option("marginal_x", json!("histogram")).expect("marginal accepted");

    let figure = panel.render(&PlotlyBackend, RenderMode::Live).expect("renders");
    assert_eq!(figure.data.len(), 2);
    assert!(figure.data.iter().all(|trace| trace.get("textposition").is_none()));
}

#[test]
fn figure_source_lists_non_default_keywords() {
    let datasets = datasets();
    let mut panel = scatter_panel(&datasets);
    assert_eq!(
        panel.figure_source("trace_0").as_deref(),
        Some("# Trace 0\ntrace_0 = px.scatter(sales)\n")
    );

    panel.set_option("x", json!("month")).expect("x accepted");
    panel.set_option("name", json!("Revenue")).expect("name accepted");
    assert_eq!(
        panel.figure_source("trace_0").as_deref(),
        Some(
            "# Trace 0\ntrace_0 = px.scatter(sales, **{'x': 'month'})\n\
             trace_0.update_traces(**{'name': 'Revenue'})\n"
        )
    );
}

#[test]
fn controls_split_basic_extended_and_hidden() {
    let datasets = datasets();
    let panel = scatter_panel(&datasets);
    let sheet = panel.controls(&datasets);

    assert_eq!(sheet.chart_type.id, "graph-type-0");
    assert_eq!(sheet.chart_type.value, json!("scatter"));
    assert_eq!(sheet.dataset.value, json!("sales"));
    assert!(sheet.basic.iter().all(|row| row.len() <= 3));

    let x = sheet.find("x").expect("x visible");
    assert_eq!(x.id, "x-0");
    assert_eq!(x.options.len(), 5);
    assert!(sheet.find("title").is_some());
    assert!(sheet.is_hidden("names"));

    let palette = sheet.find("color_discrete_sequence").expect("palette visible");
    assert!(
        palette
            .options
            .iter()
            .any(|option| option.value == palette.value)
    );
}
