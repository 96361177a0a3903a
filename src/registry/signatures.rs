//! Keyword signatures of the plotly-express constructors each chart type
//! reproduces to, authored from the documented call signatures.

use crate::core::ChartType;

/// Signature parameters the workbench deliberately does not expose.
pub const UNSUPPORTED_PARAMS: &[&str] = &[
    "animation_group",
    "category_orders",
    "facet_row_spacing",
    "data_frame",
    "facet_col_wrap",
    "labels",
    "range_y",
    "custom_data",
    "color_discrete_map",
    "facet_col_spacing",
    "orientation",
    "template",
    "hover_name",
    "range_x",
    "animation_frame",
    "trendline_scope",
    "symbol_map",
    "line_dash_map",
    "symbol_sequence",
    "trendline_color_override",
    "line_dash_sequence",
    "trendline",
    "color_continuous_midpoint",
    "range_color",
    "render_mode",
    "pattern_shape_sequence",
    "pattern_shape_map",
    "hole",
    "size_max",
    "trendline_options",
    "range_z",
];

#[must_use]
pub fn is_unsupported(param: &str) -> bool {
    UNSUPPORTED_PARAMS.contains(&param)
}

const SCATTER: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "color",
    "symbol",
    "size",
    "hover_name",
    "hover_data",
    "custom_data",
    "text",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "error_x",
    "error_x_minus",
    "error_y",
    "error_y_minus",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "orientation",
    "color_discrete_sequence",
    "color_discrete_map",
    "color_continuous_scale",
    "range_color",
    "color_continuous_midpoint",
    "symbol_sequence",
    "symbol_map",
    "opacity",
    "size_max",
    "marginal_x",
    "marginal_y",
    "trendline",
    "trendline_options",
    "trendline_color_override",
    "trendline_scope",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "render_mode",
    "title",
    "template",
    "width",
    "height",
];

const DENSITY_CONTOUR: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "z",
    "color",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "hover_name",
    "hover_data",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "orientation",
    "color_discrete_sequence",
    "color_discrete_map",
    "marginal_x",
    "marginal_y",
    "trendline",
    "trendline_options",
    "trendline_color_override",
    "trendline_scope",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "histfunc",
    "histnorm",
    "nbinsx",
    "nbinsy",
    "text_auto",
    "title",
    "template",
    "width",
    "height",
];

const DENSITY_HEATMAP: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "z",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "hover_name",
    "hover_data",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "orientation",
    "color_continuous_scale",
    "range_color",
    "color_continuous_midpoint",
    "marginal_x",
    "marginal_y",
    "opacity",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "histfunc",
    "histnorm",
    "nbinsx",
    "nbinsy",
    "text_auto",
    "title",
    "template",
    "width",
    "height",
];

const LINE: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "line_group",
    "color",
    "line_dash",
    "symbol",
    "hover_name",
    "hover_data",
    "custom_data",
    "text",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "error_x",
    "error_x_minus",
    "error_y",
    "error_y_minus",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "orientation",
    "color_discrete_sequence",
    "color_discrete_map",
    "line_dash_sequence",
    "line_dash_map",
    "symbol_sequence",
    "symbol_map",
    "markers",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "line_shape",
    "render_mode",
    "title",
    "template",
    "width",
    "height",
];

const AREA: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "line_group",
    "color",
    "pattern_shape",
    "symbol",
    "hover_name",
    "hover_data",
    "custom_data",
    "text",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "pattern_shape_sequence",
    "pattern_shape_map",
    "symbol_sequence",
    "symbol_map",
    "markers",
    "orientation",
    "groupnorm",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "line_shape",
    "title",
    "template",
    "width",
    "height",
];

const BAR: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "color",
    "pattern_shape",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "hover_name",
    "hover_data",
    "custom_data",
    "text",
    "base",
    "error_x",
    "error_x_minus",
    "error_y",
    "error_y_minus",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "color_continuous_scale",
    "pattern_shape_sequence",
    "pattern_shape_map",
    "range_color",
    "color_continuous_midpoint",
    "opacity",
    "orientation",
    "barmode",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "text_auto",
    "title",
    "template",
    "width",
    "height",
];

const TIMELINE: &[&str] = &[
    "data_frame",
    "x_start",
    "x_end",
    "y",
    "color",
    "pattern_shape",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "hover_name",
    "hover_data",
    "custom_data",
    "text",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "pattern_shape_sequence",
    "pattern_shape_map",
    "color_continuous_scale",
    "range_color",
    "color_continuous_midpoint",
    "opacity",
    "range_x",
    "range_y",
    "title",
    "template",
    "width",
    "height",
];

const HISTOGRAM: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "color",
    "pattern_shape",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "hover_name",
    "hover_data",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "pattern_shape_sequence",
    "pattern_shape_map",
    "marginal",
    "opacity",
    "orientation",
    "barmode",
    "barnorm",
    "histnorm",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "histfunc",
    "cumulative",
    "nbins",
    "text_auto",
    "title",
    "template",
    "width",
    "height",
];

const VIOLIN: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "color",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "hover_name",
    "hover_data",
    "custom_data",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "orientation",
    "violinmode",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "points",
    "box",
    "title",
    "template",
    "width",
    "height",
];

const BOX: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "color",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "hover_name",
    "hover_data",
    "custom_data",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "orientation",
    "boxmode",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "points",
    "notched",
    "title",
    "template",
    "width",
    "height",
];

const STRIP: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "color",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "hover_name",
    "hover_data",
    "custom_data",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "orientation",
    "stripmode",
    "log_x",
    "log_y",
    "range_x",
    "range_y",
    "title",
    "template",
    "width",
    "height",
];

const SCATTER_3D: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "z",
    "color",
    "symbol",
    "size",
    "text",
    "hover_name",
    "hover_data",
    "custom_data",
    "error_x",
    "error_x_minus",
    "error_y",
    "error_y_minus",
    "error_z",
    "error_z_minus",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "size_max",
    "color_discrete_sequence",
    "color_discrete_map",
    "color_continuous_scale",
    "range_color",
    "color_continuous_midpoint",
    "symbol_sequence",
    "symbol_map",
    "opacity",
    "log_x",
    "log_y",
    "log_z",
    "range_x",
    "range_y",
    "range_z",
    "title",
    "template",
    "width",
    "height",
];

const LINE_3D: &[&str] = &[
    "data_frame",
    "x",
    "y",
    "z",
    "color",
    "line_dash",
    "text",
    "line_group",
    "symbol",
    "hover_name",
    "hover_data",
    "custom_data",
    "error_x",
    "error_x_minus",
    "error_y",
    "error_y_minus",
    "error_z",
    "error_z_minus",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "line_dash_sequence",
    "line_dash_map",
    "symbol_sequence",
    "symbol_map",
    "markers",
    "log_x",
    "log_y",
    "log_z",
    "range_x",
    "range_y",
    "range_z",
    "title",
    "template",
    "width",
    "height",
];

const SCATTER_TERNARY: &[&str] = &[
    "data_frame",
    "a",
    "b",
    "c",
    "color",
    "symbol",
    "size",
    "text",
    "hover_name",
    "hover_data",
    "custom_data",
    "animation_frame",
    "animation_group",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "color_continuous_scale",
    "range_color",
    "color_continuous_midpoint",
    "symbol_sequence",
    "symbol_map",
    "opacity",
    "size_max",
    "title",
    "template",
    "width",
    "height",
];

const SCATTER_MATRIX: &[&str] = &[
    "data_frame",
    "dimensions",
    "color",
    "symbol",
    "size",
    "hover_name",
    "hover_data",
    "custom_data",
    "category_orders",
    "labels",
    "color_discrete_sequence",
    "color_discrete_map",
    "color_continuous_scale",
    "range_color",
    "color_continuous_midpoint",
    "symbol_sequence",
    "symbol_map",
    "opacity",
    "size_max",
    "title",
    "template",
    "width",
    "height",
];

const PARALLEL_COORDINATES: &[&str] = &[
    "data_frame",
    "dimensions",
    "color",
    "labels",
    "color_continuous_scale",
    "range_color",
    "color_continuous_midpoint",
    "title",
    "template",
    "width",
    "height",
];

const PIE: &[&str] = &[
    "data_frame",
    "names",
    "values",
    "color",
    "facet_row",
    "facet_col",
    "facet_col_wrap",
    "facet_row_spacing",
    "facet_col_spacing",
    "color_discrete_sequence",
    "color_discrete_map",
    "hover_name",
    "hover_data",
    "custom_data",
    "category_orders",
    "labels",
    "title",
    "template",
    "width",
    "height",
    "opacity",
    "hole",
];

/// Constructor keyword list for a chart type.
#[must_use]
pub fn signature(chart_type: ChartType) -> &'static [&'static str] {
    match chart_type {
        ChartType::Scatter => SCATTER,
        ChartType::DensityContour => DENSITY_CONTOUR,
        ChartType::DensityHeatmap => DENSITY_HEATMAP,
        ChartType::Line => LINE,
        ChartType::Area => AREA,
        ChartType::Bar => BAR,
        ChartType::Timeline => TIMELINE,
        ChartType::Histogram => HISTOGRAM,
        ChartType::Violin => VIOLIN,
        ChartType::Box => BOX,
        ChartType::Strip => STRIP,
        ChartType::Scatter3d => SCATTER_3D,
        ChartType::Line3d => LINE_3D,
        ChartType::ScatterTernary => SCATTER_TERNARY,
        ChartType::ScatterMatrix => SCATTER_MATRIX,
        ChartType::ParallelCoordinates => PARALLEL_COORDINATES,
        ChartType::Pie => PIE,
    }
}
