use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::extensions::MarkerSet;

use super::SessionSettings;

pub const MARKER_STORE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStoreJsonContractV1 {
    pub schema_version: u32,
    pub markers: MarkerSet,
}

impl MarkerSet {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = MarkerStoreJsonContractV1 {
            schema_version: MARKER_STORE_JSON_SCHEMA_V1,
            markers: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize marker store contract v1: {e}"))
        })
    }

    /// Parses either a versioned store document or a bare marker list.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(markers) = serde_json::from_str::<MarkerSet>(input) {
            return Ok(markers);
        }
        let payload: MarkerStoreJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse marker store json payload: {e}"))
        })?;
        if payload.schema_version != MARKER_STORE_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported marker store schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.markers)
    }
}

impl SessionSettings {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize session settings: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse session settings json: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }
}
