//! Facade panelisation.
//!
//! Generates panel IDs for a U x V facade grid in row-major order. The host
//! environment maps the IDs onto its panel surfaces; only the labelling logic
//! lives here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParamkitError, Result};
use crate::tools::Tool;

fn default_prefix() -> String {
    "P".to_string()
}

/// Parameters for panel ID generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelizerParams {
    /// Panel count in the U direction.
    pub u_count: u32,
    /// Panel count in the V direction.
    pub v_count: u32,
    /// ID prefix, default "P".
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

/// Panel IDs in row-major order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelizerOutput {
    pub panel_ids: Vec<String>,
}

/// Generate panel IDs in row-major order.
///
/// `u_count = 2, v_count = 3` gives:
///
/// ```text
/// P-01-01, P-02-01
/// P-01-02, P-02-02
/// P-01-03, P-02-03
/// ```
pub fn generate_panel_ids(params: &PanelizerParams) -> Result<Vec<String>> {
    if params.u_count == 0 || params.v_count == 0 {
        return Err(ParamkitError::InvalidParams {
            tool: "panelizer".to_string(),
            message: "U and V counts must be greater than zero.".to_string(),
        });
    }

    let total = params
        .u_count
        .checked_mul(params.v_count)
        .ok_or_else(|| ParamkitError::InvalidParams {
            tool: "panelizer".to_string(),
            message: "U and V counts produce too many panels.".to_string(),
        })?;

    let mut panel_ids = Vec::with_capacity(total as usize);
    for v in 1..=params.v_count {
        for u in 1..=params.u_count {
            panel_ids.push(format!("{}-{:02}-{:02}", params.prefix, u, v));
        }
    }

    Ok(panel_ids)
}

/// The panelizer tool.
pub struct Panelizer;

impl Tool for Panelizer {
    fn entry(&self) -> &'static str {
        "panelizer"
    }

    fn summary(&self) -> &'static str {
        "Generate facade panel IDs in row-major order"
    }

    fn run(&self, params: Value) -> Result<Value> {
        let params: PanelizerParams =
            serde_json::from_value(params).map_err(|e| ParamkitError::InvalidParams {
                tool: "panelizer".to_string(),
                message: e.to_string(),
            })?;
        let panel_ids = generate_panel_ids(&params)?;
        Ok(serde_json::to_value(PanelizerOutput { panel_ids })
            .map_err(|e| ParamkitError::Other(e.into()))?)
    }
}
