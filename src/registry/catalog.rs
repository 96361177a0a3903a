//! The fixed list of option descriptors, in display order.

use crate::core::ChartType::{self, Line, Line3d, Scatter, Scatter3d};
use crate::core::palette::DEFAULT_QUALITATIVE_PALETTE;

use super::descriptor::{Choice, ChoiceSource, DefaultRule, OptionDescriptor};

const ALL_CHART_TYPES: &[ChartType] = &ChartType::ALL;

const MODE_GROUP_OVERLAY: &[Choice] = &[Choice::Text("group"), Choice::Text("overlay")];
const MARGINALS: &[Choice] = &[
    Choice::Text("histogram"),
    Choice::Text("rug"),
    Choice::Text("box"),
    Choice::Text("violin"),
];
const NORMALIZATIONS: &[Choice] = &[Choice::Text("fraction"), Choice::Text("percent")];

pub static CATALOG: &[OptionDescriptor] = &[
    OptionDescriptor::select("x", "X-Axis").basic(),
    OptionDescriptor::multi_select("dimensions", "Dimensions").basic(),
    OptionDescriptor::select("x_start", "X-Axis Start Values").basic(),
    OptionDescriptor::select("x_end", "X-Axis End Values").basic(),
    OptionDescriptor::multi_select("y", "Y-Axis").basic(),
    OptionDescriptor::select("z", "Z-Axis").basic(),
    OptionDescriptor::text("title", "Title"),
    OptionDescriptor::select("a", "A").basic(),
    OptionDescriptor::select("b", "B").basic(),
    OptionDescriptor::select("c", "C").basic(),
    OptionDescriptor::select("names", "Names").basic(),
    OptionDescriptor::select("values", "Values").basic(),
    OptionDescriptor::select("line_group", "Group By"),
    OptionDescriptor::select("line_dash", "Dash Type"),
    OptionDescriptor::select("color", "Color"),
    OptionDescriptor::select("line_color", "Line Color")
        .with_choices(ChoiceSource::NamedColors)
        .for_traces(&[Line]),
    OptionDescriptor::select("pattern_shape", "Pattern Shape"),
    OptionDescriptor::select("barmode", "Bar Mode")
        .with_default(DefaultRule::Text("relative"))
        .with_static_choices(
            &[
                Choice::Text("relative"),
                Choice::Text("group"),
                Choice::Text("overlay"),
            ],
            false,
        ),
    OptionDescriptor::select("boxmode", "Box Mode")
        .with_default(DefaultRule::Text("group"))
        .with_static_choices(MODE_GROUP_OVERLAY, false),
    OptionDescriptor::select("violinmode", "Violin Mode")
        .with_default(DefaultRule::Text("group"))
        .with_static_choices(MODE_GROUP_OVERLAY, false),
    OptionDescriptor::select("stripmode", "Strip Mode")
        .with_default(DefaultRule::Text("group"))
        .with_static_choices(MODE_GROUP_OVERLAY, false),
    OptionDescriptor::select("points", "Points to Show")
        .with_default(DefaultRule::Text("outliers"))
        .with_static_choices(
            &[
                Choice::Text("outliers"),
                Choice::Text("suspectedoutliers"),
                Choice::Text("all"),
                Choice::Bool(false),
            ],
            false,
        ),
    OptionDescriptor::select("color_continuous_scale", "Color Scale")
        .with_choices(ChoiceSource::ColorScales),
    OptionDescriptor::select("color_discrete_sequence", "Color Sequence")
        .with_default(DefaultRule::Palette(DEFAULT_QUALITATIVE_PALETTE))
        .with_choices(ChoiceSource::QualitativePalettes)
        .list_from_text(),
    OptionDescriptor::select("size", "Size"),
    OptionDescriptor::select("symbol", "Symbol"),
    OptionDescriptor::select("error_x", "X-Axis Error Bars"),
    OptionDescriptor::select("error_y", "Y-Axis Error Bars"),
    OptionDescriptor::select("error_z", "Z-Axis Error Bars"),
    OptionDescriptor::select("error_x_minus", "X-Axis Error Bars in Negative Direction"),
    OptionDescriptor::select("error_y_minus", "Y-Axis Error Bars in Negative Direction"),
    OptionDescriptor::select("error_z_minus", "Z-Axis Error Bars in Negative Direction"),
    OptionDescriptor::checklist("hover_data", "Show on Hover"),
    OptionDescriptor::select("marginal", "Marginal Distribution")
        .with_static_choices(MARGINALS, true),
    OptionDescriptor::select("marginal_x", "X-Axis Marginal Distribution")
        .with_static_choices(MARGINALS, true),
    OptionDescriptor::select("marginal_y", "Y-Axis Marginal Distribution")
        .with_static_choices(MARGINALS, true),
    OptionDescriptor::select("facet_col", "Facet Column"),
    OptionDescriptor::select("facet_row", "Facet Row"),
    OptionDescriptor::switch("log_x", "Logarithmic X-Axis"),
    OptionDescriptor::switch("log_y", "Logarithmic Y-Axis"),
    OptionDescriptor::switch("log_z", "Logarithmic Z-Axis"),
    OptionDescriptor::switch("markers", "Markers"),
    OptionDescriptor::select("marker_color", "Marker Color")
        .with_choices(ChoiceSource::NamedColors)
        .for_traces(&[Scatter]),
    OptionDescriptor::select("marker_symbol", "Marker Symbol")
        .with_choices(ChoiceSource::MarkerSymbols)
        .for_traces(&[Scatter, Line]),
    OptionDescriptor::text("name", "Legend Name").for_traces(&[Scatter, Line]),
    OptionDescriptor::switch("notched", "Notched Boxes"),
    OptionDescriptor::switch("cumulative", "Cumulative"),
    OptionDescriptor::switch("text_auto", "Show Text"),
    OptionDescriptor::switch("box", "Show Box"),
    OptionDescriptor::numeric("nbins", "Bins", 0.0, 1000.0, 1.0),
    OptionDescriptor::numeric("nbinsx", "X Bins", 0.0, 1000.0, 1.0),
    OptionDescriptor::numeric("nbinsy", "Y Bins", 0.0, 1000.0, 1.0),
    OptionDescriptor::numeric("marker_size", "Marker Size", 0.0, 100.0, 1.0)
        .for_traces(&[Scatter, Line]),
    OptionDescriptor::numeric("opacity", "Opacity", 0.0, 1.0, 0.05),
    OptionDescriptor::select("line_shape", "Line Shape")
        .with_static_choices(&[Choice::Text("linear"), Choice::Text("spline")], false),
    OptionDescriptor::select("groupnorm", "Normalization")
        .with_static_choices(NORMALIZATIONS, true),
    OptionDescriptor::select("barnorm", "Bar Normalization")
        .with_static_choices(NORMALIZATIONS, true),
    OptionDescriptor::select("histnorm", "Histogram Normalization").with_static_choices(
        &[
            Choice::Text("percent"),
            Choice::Text("probability"),
            Choice::Text("density"),
            Choice::Text("probability density"),
        ],
        true,
    ),
    OptionDescriptor::select("histfunc", "Aggregation Function")
        .with_default(DefaultRule::Text("count"))
        .with_static_choices(
            &[
                Choice::Text("count"),
                Choice::Text("sum"),
                Choice::Text("avg"),
                Choice::Text("min"),
                Choice::Text("max"),
            ],
            true,
        ),
    OptionDescriptor::select("text", "Text"),
    OptionDescriptor::select("base", "Base Position"),
    OptionDescriptor::numeric("width", "Width", 0.0, 10_000.0, 50.0),
    OptionDescriptor::numeric("height", "Height", 0.0, 10_000.0, 50.0),
    OptionDescriptor::text("xaxis_title", "X-Axis Title").for_layout(ALL_CHART_TYPES),
    OptionDescriptor::text("yaxis_title", "Y-Axis Title").for_layout(ALL_CHART_TYPES),
    OptionDescriptor::text("zaxis_title", "Z-Axis Title").for_layout(&[Scatter3d, Line3d]),
    OptionDescriptor::text("legend_title", "Legend Title").for_layout(ALL_CHART_TYPES),
    OptionDescriptor::numeric("title_font_size", "Title Font Size", 0.0, 100.0, 1.0)
        .for_layout(ALL_CHART_TYPES),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::CATALOG;
    use crate::registry::KwargTarget;

    #[test]
    fn catalog_keywords_are_unique() {
        let mut seen = HashSet::new();
        for descriptor in CATALOG {
            assert!(seen.insert(descriptor.keyword), "duplicate {}", descriptor.keyword);
        }
    }

    #[test]
    fn non_construction_options_declare_chart_types() {
        for descriptor in CATALOG
            .iter()
            .filter(|descriptor| descriptor.target != KwargTarget::Construction)
        {
            assert!(
                !descriptor.chart_types.is_empty(),
                "{} has no chart types",
                descriptor.keyword
            );
        }
    }
}
