use tracing::warn;

use crate::panel::{Panel, RenderMode, python_kwargs};
use crate::render::{ChartBackend, Figure};

const SCRIPT_PRELUDE: &str = "
import plotly.graph_objs as go
from plotly.subplots import make_subplots
import plotly.express as px

fig = make_subplots()
";

/// Layers every panel into one figure.
///
/// Traces and constructor layouts are added in panel order; the panels'
/// layout overrides follow, so later panels win on shared keys.
pub fn compose<'p, B: ChartBackend>(
    panels: impl IntoIterator<Item = &'p Panel> + Clone,
    backend: &B,
) -> Figure {
    let mut figure = Figure::subplot_base();
    for panel in panels.clone() {
        match panel.render(backend, RenderMode::Live) {
            Ok(rendered) => {
                figure.add_traces(rendered.data);
                figure.merge_layout(&rendered.layout);
            }
            Err(err) => {
                warn!(panel = panel.id(), error = %err, "panel render failed; skipped");
            }
        }
    }
    for panel in panels {
        figure.update_layout(&panel.layout_kwargs());
    }
    figure
}

/// Python script that rebuilds the composed figure outside the workbench.
pub fn reproduction_script<'p>(panels: impl IntoIterator<Item = &'p Panel> + Clone) -> String {
    let mut script = SCRIPT_PRELUDE.to_owned();
    for panel in panels.clone() {
        let varname = format!("trace_{}", panel.id());
        let Some(source) = panel.figure_source(&varname) else {
            continue;
        };
        script.push('\n');
        script.push_str(source.trim_end_matches('\n'));
        script.push_str(&format!(
            "\nfig.add_traces(list({varname}.select_traces()))\n\
             fig.update_layout({varname}.layout)\n"
        ));
    }
    for panel in panels {
        let layout = panel.layout_kwargs();
        if !layout.is_empty() {
            script.push_str(&format!("\nfig.update_layout(**{})", python_kwargs(&layout)));
        }
    }
    script.push_str("\nfig.update_layout(showlegend=True)");
    script.push_str("\nfig.show()");
    script
}
