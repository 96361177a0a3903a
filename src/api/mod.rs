//! Host-facing surface: configuration, control ids, composition and the
//! workbench state object.

mod composer;
mod config;
mod control_id;
mod json_contract;
mod workbench;

pub use composer::{compose, reproduction_script};
pub use config::WorkbenchConfig;
pub use control_id::{ControlId, ControlTarget};
pub use json_contract::{
    FIGURE_JSON_SCHEMA_V1, FigureJsonContractV1, WORKBENCH_CONFIG_JSON_SCHEMA_V1,
    WorkbenchConfigJsonContractV1,
};
pub use workbench::{ControlEvent, Workbench, WorkbenchUpdate};
