use chart_kindergarten::core::ChartType;
use chart_kindergarten::registry::{
    KwargTarget, OptionRegistry, UNSUPPORTED_PARAMS, WidgetKind, is_unsupported, signature,
};
use serde_json::json;

#[test]
fn registry_covers_every_constructor_parameter() {
    let registry = OptionRegistry::build();
    assert!(
        registry.params_without_implementation().is_empty(),
        "undescribed parameters: {:?}",
        registry.params_without_implementation()
    );
}

#[test]
fn denied_parameters_never_become_options() {
    let registry = OptionRegistry::build();
    for param in UNSUPPORTED_PARAMS {
        assert!(registry.get(param).is_none(), "{param} should be denied");
    }
}

#[test]
fn applicability_follows_constructor_signatures() {
    let registry = OptionRegistry::build();
    for chart_type in ChartType::ALL {
        for param in signature(chart_type)
            .iter()
            .filter(|param| !is_unsupported(param))
        {
            assert!(
                registry.is_applicable(param, chart_type),
                "{param} should apply to {chart_type}"
            );
        }
    }
    assert!(registry.is_applicable("names", ChartType::Pie));
    assert!(!registry.is_applicable("names", ChartType::Scatter));
    assert!(registry.is_applicable("x_start", ChartType::Timeline));
    assert!(!registry.is_applicable("x", ChartType::Timeline));
}

#[test]
fn style_and_layout_options_use_explicit_chart_types() {
    let registry = OptionRegistry::build();
    assert_eq!(registry.target("line_color"), Some(KwargTarget::Traces));
    assert!(registry.is_applicable("line_color", ChartType::Line));
    assert!(!registry.is_applicable("line_color", ChartType::Scatter));
    assert!(registry.is_applicable("marker_symbol", ChartType::Scatter));

    assert_eq!(registry.target("xaxis_title"), Some(KwargTarget::Layout));
    for chart_type in ChartType::ALL {
        assert!(registry.is_applicable("xaxis_title", chart_type));
    }
    assert_eq!(registry.chart_types("zaxis_title").len(), 2);
    assert_eq!(registry.target("x"), Some(KwargTarget::Construction));
}

#[test]
fn defaults_match_constructor_defaults() {
    let registry = OptionRegistry::build();
    assert_eq!(registry.default_value("barmode"), Some(json!("relative")));
    assert_eq!(registry.default_value("boxmode"), Some(json!("group")));
    assert_eq!(registry.default_value("stripmode"), Some(json!("group")));
    assert_eq!(registry.default_value("points"), Some(json!("outliers")));
    assert_eq!(registry.default_value("histfunc"), Some(json!("count")));
    assert_eq!(registry.default_value("log_x"), Some(json!(false)));
    assert_eq!(registry.default_value("x"), None);
    assert_eq!(registry.default_value("title"), None);

    let sequence = registry
        .default_value("color_discrete_sequence")
        .expect("palette default");
    assert_eq!(sequence.as_array().map(Vec::len), Some(10));
    assert_eq!(sequence[0], json!("#636EFA"));
}

#[test]
fn applicable_options_keep_registry_order() {
    let registry = OptionRegistry::build();
    let keywords: Vec<&str> = registry
        .applicable(ChartType::Pie)
        .map(|option| option.keyword())
        .collect();
    let names = keywords.iter().position(|kw| *kw == "names").expect("names");
    let values = keywords.iter().position(|kw| *kw == "values").expect("values");
    assert!(names < values);
    assert!(!keywords.contains(&"x"));

    let descriptor = registry.descriptor("y").expect("y described");
    assert_eq!(descriptor.widget, WidgetKind::MultiSelect);
    assert!(descriptor.basic);
}
