mod backend;
mod figure;
mod null_backend;
pub mod plotly;

pub use backend::ChartBackend;
pub use figure::{Figure, Trace, deep_merge, magic_underscore_path};
pub use null_backend::NullBackend;
pub use plotly::PlotlyBackend;
