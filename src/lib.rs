//! chart-kindergarten: form-driven chart builder core.
//!
//! An option registry describes every chart parameter a form can set and
//! which chart types accept it. Panels hold one chart's dataset, chart type
//! and keyword mapping; the composer layers panels into one plotly.js figure
//! and a Python script that reproduces it.

pub mod api;
pub mod core;
pub mod error;
pub mod panel;
pub mod registry;
pub mod render;
pub mod telemetry;

pub use api::{ControlEvent, Workbench, WorkbenchConfig, WorkbenchUpdate};
pub use error::{WorkbenchError, WorkbenchResult};
