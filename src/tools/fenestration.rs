//! Adaptive fenestration sizing.
//!
//! Data-driven opening scaling for facade panels: panel data values are
//! normalized, binned into discrete categories, and mapped to an opening
//! scale per panel. The opening shape itself is host geometry; it enters
//! here only as the area of the unscaled shape, and uniform 2-D scaling
//! makes the opening area grow with the square of the scale factor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParamkitError, Result};
use crate::tools::Tool;

const TOOL: &str = "fenestration";

fn default_max_opening() -> f64 {
    0.5
}

fn default_categories() -> usize {
    11
}

fn default_invert() -> bool {
    true
}

/// One facade panel with its driving data value.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelSample {
    /// Panel ID (typically from the panelizer).
    pub id: String,
    /// Panel surface area.
    pub area: f64,
    /// Driving data value (irradiation, views, any scalar).
    pub value: f64,
}

/// Parameters for adaptive fenestration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FenestrationParams {
    /// Panels with their data values.
    pub panels: Vec<PanelSample>,
    /// Area of the unscaled opening shape.
    pub opening_area: f64,
    /// Smallest opening scale.
    #[serde(default)]
    pub min_opening: f64,
    /// Largest opening scale.
    #[serde(default = "default_max_opening")]
    pub max_opening: f64,
    /// Number of discrete categories.
    #[serde(default = "default_categories")]
    pub categories: usize,
    /// High data values get small openings when set.
    #[serde(default = "default_invert")]
    pub invert: bool,
}

/// Per-panel fenestration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FenestrationRecord {
    pub id: String,
    pub data_value: f64,
    pub normalized_value: f64,
    pub category: usize,
    pub scale: f64,
    pub opening_area: f64,
    pub opening_percent: f64,
}

/// Output of the fenestration tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FenestrationOutput {
    pub records: Vec<FenestrationRecord>,
}

/// Normalize data values to the 0-1 range.
///
/// All-equal input normalizes to 0.5 everywhere so downstream scaling still
/// produces a mid-range opening.
pub fn normalize_data(values: &[f64]) -> Vec<f64> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![0.5; values.len()];
    }

    values.iter().map(|v| (v - min) / (max - min)).collect()
}

/// Bin normalized values into discrete categories, clamping the top bin.
pub fn bin_into_categories(normalized: &[f64], categories: usize) -> Vec<usize> {
    normalized
        .iter()
        .map(|n| ((n * categories as f64) as usize).min(categories - 1))
        .collect()
}

/// Opening scale for a normalized value.
pub fn opening_scale(normalized: f64, min_scale: f64, max_scale: f64, invert: bool) -> f64 {
    if invert {
        max_scale - normalized * (max_scale - min_scale)
    } else {
        min_scale + normalized * (max_scale - min_scale)
    }
}

/// Compute fenestration records for a set of panels.
pub fn adaptive_fenestration(params: &FenestrationParams) -> Result<Vec<FenestrationRecord>> {
    if params.panels.is_empty() {
        return Err(ParamkitError::InvalidParams {
            tool: TOOL.to_string(),
            message: "at least one panel is required".to_string(),
        });
    }
    if params.categories == 0 {
        return Err(ParamkitError::InvalidParams {
            tool: TOOL.to_string(),
            message: "categories must be greater than zero".to_string(),
        });
    }
    if params.max_opening < params.min_opening {
        return Err(ParamkitError::InvalidParams {
            tool: TOOL.to_string(),
            message: "max_opening must not be smaller than min_opening".to_string(),
        });
    }
    if params.opening_area < 0.0 {
        return Err(ParamkitError::InvalidParams {
            tool: TOOL.to_string(),
            message: "opening_area must not be negative".to_string(),
        });
    }

    let values: Vec<f64> = params.panels.iter().map(|p| p.value).collect();
    let normalized = normalize_data(&values);
    let categories = bin_into_categories(&normalized, params.categories);

    let records = params
        .panels
        .iter()
        .zip(normalized.iter())
        .zip(categories.iter())
        .map(|((panel, &norm), &category)| {
            let scale = opening_scale(norm, params.min_opening, params.max_opening, params.invert);
            // Uniform 2-D scaling: area grows with the square of the scale
            let opening_area = if scale == 0.0 {
                0.0
            } else {
                params.opening_area * scale * scale
            };
            let opening_percent = if panel.area > 0.0 {
                opening_area / panel.area * 100.0
            } else {
                0.0
            };

            FenestrationRecord {
                id: panel.id.clone(),
                data_value: panel.value,
                normalized_value: norm,
                category,
                scale,
                opening_area,
                opening_percent,
            }
        })
        .collect();

    Ok(records)
}

/// The fenestration tool.
pub struct Fenestration;

impl Tool for Fenestration {
    fn entry(&self) -> &'static str {
        TOOL
    }

    fn summary(&self) -> &'static str {
        "Size facade openings from per-panel data values"
    }

    fn run(&self, params: Value) -> Result<Value> {
        let params: FenestrationParams =
            serde_json::from_value(params).map_err(|e| ParamkitError::InvalidParams {
                tool: TOOL.to_string(),
                message: e.to_string(),
            })?;
        let records = adaptive_fenestration(&params)?;
        Ok(serde_json::to_value(FenestrationOutput { records })
            .map_err(|e| ParamkitError::Other(e.into()))?)
    }
}
