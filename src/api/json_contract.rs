use serde::{Deserialize, Serialize};

use crate::error::{WorkbenchError, WorkbenchResult};
use crate::render::{ChartBackend, Figure};

use super::{Workbench, WorkbenchConfig};

pub const WORKBENCH_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const FIGURE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbenchConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: WorkbenchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureJsonContractV1 {
    pub schema_version: u32,
    pub figure: Figure,
}

impl WorkbenchConfig {
    pub fn to_json_contract_v1_pretty(&self) -> WorkbenchResult<String> {
        let payload = WorkbenchConfigJsonContractV1 {
            schema_version: WORKBENCH_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            WorkbenchError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> WorkbenchResult<Self> {
        if let Ok(payload) = serde_json::from_str::<WorkbenchConfigJsonContractV1>(input) {
            if payload.schema_version != WORKBENCH_CONFIG_JSON_SCHEMA_V1 {
                return Err(WorkbenchError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }
        serde_json::from_str::<Self>(input).map_err(|e| {
            WorkbenchError::InvalidData(format!("failed to parse config json payload: {e}"))
        })
    }
}

impl Figure {
    pub fn to_json_contract_v1_pretty(&self) -> WorkbenchResult<String> {
        let payload = FigureJsonContractV1 {
            schema_version: FIGURE_JSON_SCHEMA_V1,
            figure: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            WorkbenchError::InvalidData(format!("failed to serialize figure contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> WorkbenchResult<Self> {
        if let Ok(payload) = serde_json::from_str::<FigureJsonContractV1>(input) {
            if payload.schema_version != FIGURE_JSON_SCHEMA_V1 {
                return Err(WorkbenchError::InvalidData(format!(
                    "unsupported figure schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.figure);
        }
        Self::from_json_str(input)
    }
}

impl<B: ChartBackend> Workbench<B> {
    pub fn figure_json_contract_v1_pretty(&self) -> WorkbenchResult<String> {
        self.figure().to_json_contract_v1_pretty()
    }
}
