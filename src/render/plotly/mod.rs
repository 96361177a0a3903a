//! Backend that builds plotly.js figure JSON the way plotly-express would.

mod args;
mod grouping;
mod layout;
mod marginal;
mod traces;

use serde_json::json;
use tracing::debug;

use crate::core::{ChartType, Column, Dataset, KwargMap};
use crate::error::WorkbenchResult;

use self::args::Args;
use self::grouping::{GroupSpec, Grouping};
use self::layout::AxisColumns;
use self::marginal::MarginalAxis;
use super::{ChartBackend, Figure};

/// plotly.js trace type a chart type's constructor emits.
#[must_use]
pub fn trace_type(chart_type: ChartType) -> &'static str {
    match chart_type {
        ChartType::Scatter | ChartType::Line | ChartType::Area => "scatter",
        ChartType::Bar | ChartType::Timeline => "bar",
        ChartType::Histogram => "histogram",
        ChartType::Box | ChartType::Strip => "box",
        ChartType::Violin => "violin",
        ChartType::Pie => "pie",
        ChartType::DensityHeatmap => "histogram2d",
        ChartType::DensityContour => "histogram2dcontour",
        ChartType::ScatterMatrix => "splom",
        ChartType::ParallelCoordinates => "parcoords",
        ChartType::Scatter3d | ChartType::Line3d => "scatter3d",
        ChartType::ScatterTernary => "scatterternary",
    }
}

/// Chart types that map a numeric `color` column onto a colour axis
/// instead of splitting traces.
fn supports_continuous_color(chart_type: ChartType) -> bool {
    matches!(
        chart_type,
        ChartType::Scatter
            | ChartType::Bar
            | ChartType::Scatter3d
            | ChartType::ScatterTernary
            | ChartType::ScatterMatrix
            | ChartType::Timeline
    )
}

/// Chart types drawn on numbered cartesian axes and therefore facetable.
fn is_cartesian(chart_type: ChartType) -> bool {
    !matches!(
        chart_type,
        ChartType::Pie
            | ChartType::ParallelCoordinates
            | ChartType::ScatterMatrix
            | ChartType::Scatter3d
            | ChartType::Line3d
            | ChartType::ScatterTernary
    )
}

/// Turns constructor keywords into plotly.js traces and layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlotlyBackend;

impl PlotlyBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn grouped(
        chart_type: ChartType,
        args: &Args<'_>,
        figure: &mut Figure,
    ) -> WorkbenchResult<()> {
        let x = args.column("x")?;
        let y_columns = args.columns("y")?;
        let wide = y_columns.len() > 1;
        let y = if wide { None } else { y_columns.first().copied() };

        let color = args.column("color")?;
        let continuous_color = color.filter(|column| {
            supports_continuous_color(chart_type) && column.kind().is_continuous()
        });
        let spec = if chart_type == ChartType::DensityHeatmap {
            GroupSpec {
                facet_row: args.column("facet_row")?,
                facet_col: args.column("facet_col")?,
                ..GroupSpec::default()
            }
        } else {
            GroupSpec {
                color: color.filter(|_| continuous_color.is_none()),
                symbol: args.column("symbol")?,
                dash: args.column("line_dash")?,
                pattern: args.column("pattern_shape")?,
                line_group: args.column("line_group")?,
                facet_row: args.column("facet_row")?,
                facet_col: args.column("facet_col")?,
                variables: if wide { y_columns.clone() } else { Vec::new() },
            }
        };
        let palette = args.palette();
        let grouping = Grouping::build(&spec, args.dataset.row_count(), &palette);
        let cartesian = is_cartesian(chart_type);

        for group in &grouping.groups {
            let group_y = group.variable.or(y);
            let mut trace = traces::group_trace(chart_type, args, x, group_y, group)?;
            if chart_type != ChartType::DensityHeatmap {
                trace.insert("name", json!(group.name));
                trace.insert("legendgroup", json!(group.name));
                trace.insert("showlegend", json!(group.show_legend));
            }
            if cartesian && grouping.is_faceted() {
                let (xaxis, yaxis) = grouping.axis_refs(group.cell);
                trace.insert("xaxis", json!(xaxis));
                trace.insert("yaxis", json!(yaxis));
            }
            if let Some(color) = continuous_color {
                trace.set("marker_color", traces::pick(color, &group.rows));
                trace.set("marker_coloraxis", json!("coloraxis"));
            }
            traces::set_hover_data(&mut trace, args, &group.rows)?;
            figure.add_trace(trace);
        }

        let axes = AxisColumns {
            x,
            y,
            wide,
            continuous_color,
        };
        figure.merge_layout(&layout::base_layout(chart_type, args, &grouping, &axes));

        if cartesian && !grouping.is_faceted() {
            Self::marginals(chart_type, args, &grouping, x, y, figure)?;
        }
        Ok(())
    }

    fn marginals(
        chart_type: ChartType,
        args: &Args<'_>,
        grouping: &Grouping<'_>,
        x: Option<&Column>,
        y: Option<&Column>,
        figure: &mut Figure,
    ) -> WorkbenchResult<()> {
        let mut requests: Vec<(&str, MarginalAxis, &Column)> = Vec::new();
        if chart_type == ChartType::Histogram {
            if let Some(kind) = args.text("marginal") {
                match (x, y) {
                    (Some(x), _) => requests.push((kind, MarginalAxis::X, x)),
                    (None, Some(y)) => requests.push((kind, MarginalAxis::Y, y)),
                    (None, None) => {}
                }
            }
        } else {
            if let (Some(kind), Some(x)) = (args.text("marginal_x"), x) {
                requests.push((kind, MarginalAxis::X, x));
            }
            if let (Some(kind), Some(y)) = (args.text("marginal_y"), y) {
                requests.push((kind, MarginalAxis::Y, y));
            }
        }

        for (kind, axis, column) in requests {
            for group in &grouping.groups {
                figure.add_trace(marginal::marginal_trace(kind, axis, column, group)?);
            }
            marginal::apply_marginal_layout(axis, &mut figure.layout);
            debug!(kind, axis = ?axis, column = %column.name, "marginal distribution added");
        }
        Ok(())
    }
}

impl ChartBackend for PlotlyBackend {
    fn construct(
        &self,
        chart_type: ChartType,
        dataset: &Dataset,
        kwargs: &KwargMap,
    ) -> WorkbenchResult<Figure> {
        let args = Args::new(dataset, kwargs);
        let mut figure = Figure::new();
        match chart_type {
            ChartType::Pie | ChartType::ParallelCoordinates => {
                let (trace, continuous_color) = if chart_type == ChartType::Pie {
                    (traces::pie(&args, &args.palette())?, None)
                } else {
                    (traces::parallel_coordinates(&args)?, args.column("color")?)
                };
                figure.add_trace(trace);
                let axes = AxisColumns {
                    x: None,
                    y: None,
                    wide: false,
                    continuous_color,
                };
                let grouping = Grouping::build(&GroupSpec::default(), 0, &[]);
                figure.merge_layout(&layout::base_layout(chart_type, &args, &grouping, &axes));
            }
            _ => Self::grouped(chart_type, &args, &mut figure)?,
        }
        debug!(
            chart_type = chart_type.as_str(),
            traces = figure.data.len(),
            "figure constructed"
        );
        Ok(figure)
    }
}
