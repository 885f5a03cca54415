//! Tower twisting.
//!
//! Takes a closed base polygon and produces the floor rings of a twisted
//! tower: each floor is the base copied upward and rotated about a vertical
//! axis. Side panels between consecutive floors come out as quads, the
//! geometry-agnostic stand-in for the host's loft.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParamkitError, Result};
use crate::tools::Tool;

const TOOL: &str = "twister";

/// Parameters for tower twisting.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TwisterParams {
    /// Closed base polygon as XYZ vertices. A duplicated closing vertex is
    /// accepted and dropped.
    pub base: Vec<[f64; 3]>,
    /// Number of floors to generate (at least 2).
    pub floor_count: u32,
    /// Vertical distance between floors.
    pub floor_height: f64,
    /// Rotation increment in degrees per floor.
    pub rotation_per_floor: f64,
    /// Rotation axis in XY; defaults to the base bounding-box center.
    #[serde(default)]
    pub axis: Option<[f64; 2]>,
}

/// One quad side panel between two consecutive floors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadPanel {
    /// Storey index (0 spans floors 0 and 1).
    pub storey: usize,
    /// Corners in order: lower edge start, lower edge end, upper edge end,
    /// upper edge start.
    pub corners: [[f64; 3]; 4],
}

/// Output of the twister tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwisterOutput {
    /// Transformed floor rings, ground floor first.
    pub floors: Vec<Vec<[f64; 3]>>,
    /// Quad side panels, one per base edge per storey.
    pub panels: Vec<QuadPanel>,
}

/// Generate the twisted tower floor rings and side panels.
pub fn twist_tower(params: &TwisterParams) -> Result<TwisterOutput> {
    let base = closed_ring(&params.base)?;

    if params.floor_count < 2 {
        return Err(ParamkitError::InvalidParams {
            tool: TOOL.to_string(),
            message: "Floor count must be at least 2.".to_string(),
        });
    }
    if params.floor_height <= 0.0 {
        return Err(ParamkitError::InvalidParams {
            tool: TOOL.to_string(),
            message: "Floor height must be > 0.".to_string(),
        });
    }

    let axis = params
        .axis
        .map(|a| DVec2::new(a[0], a[1]))
        .unwrap_or_else(|| bbox_center(&base));

    let mut floors: Vec<Vec<[f64; 3]>> = Vec::with_capacity(params.floor_count as usize);
    for i in 0..params.floor_count {
        let z_offset = f64::from(i) * params.floor_height;
        let angle = f64::from(i) * params.rotation_per_floor.to_radians();

        let ring = base
            .iter()
            .map(|p| {
                let rotated = axis + DVec2::from_angle(angle).rotate(p.truncate() - axis);
                [rotated.x, rotated.y, p.z + z_offset]
            })
            .collect();
        floors.push(ring);
    }

    let mut panels = Vec::new();
    for storey in 0..floors.len() - 1 {
        let lower = &floors[storey];
        let upper = &floors[storey + 1];
        for j in 0..lower.len() {
            let k = (j + 1) % lower.len();
            panels.push(QuadPanel {
                storey,
                corners: [lower[j], lower[k], upper[k], upper[j]],
            });
        }
    }

    Ok(TwisterOutput { floors, panels })
}

/// Validate the base polygon and return it as a ring without a duplicated
/// closing vertex.
fn closed_ring(base: &[[f64; 3]]) -> Result<Vec<DVec3>> {
    let mut points: Vec<DVec3> = base.iter().map(|p| DVec3::from_array(*p)).collect();

    if points.len() >= 2 && points.first() == points.last() {
        points.pop();
    }

    if points.len() < 3 {
        return Err(ParamkitError::InvalidParams {
            tool: TOOL.to_string(),
            message: "Base curve must be closed. \
                      Provide at least 3 vertices forming a closed ring."
                .to_string(),
        });
    }

    Ok(points)
}

fn bbox_center(points: &[DVec3]) -> DVec2 {
    let mut min = DVec2::splat(f64::INFINITY);
    let mut max = DVec2::splat(f64::NEG_INFINITY);
    for p in points {
        min = min.min(p.truncate());
        max = max.max(p.truncate());
    }
    (min + max) / 2.0
}

/// The twister tool.
pub struct Twister;

impl Tool for Twister {
    fn entry(&self) -> &'static str {
        TOOL
    }

    fn summary(&self) -> &'static str {
        "Create twisted tower floor rings from a closed base polygon"
    }

    fn run(&self, params: Value) -> Result<Value> {
        let params: TwisterParams =
            serde_json::from_value(params).map_err(|e| ParamkitError::InvalidParams {
                tool: TOOL.to_string(),
                message: e.to_string(),
            })?;
        let output = twist_tower(&params)?;
        Ok(serde_json::to_value(output).map_err(|e| ParamkitError::Other(e.into()))?)
    }
}
