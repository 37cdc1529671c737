//! Typed subset of the building-model document.
//!
//! The model arrives as a structured JSON document encoding rooms,
//! apertures and radiance sensor grids. Only the fields the scene
//! assembly consumes are modeled here; required fields are enforced at
//! the serde boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{VizError, VizResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub identifier: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    pub properties: ModelProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelProperties {
    #[serde(default)]
    pub radiance: Option<RadianceProperties>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadianceProperties {
    #[serde(default)]
    pub sensor_grids: Vec<SensorGrid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub identifier: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub faces: Vec<Face>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    pub identifier: String,
    pub geometry: Face3D,
    #[serde(default)]
    pub apertures: Vec<Aperture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aperture {
    pub identifier: String,
    pub geometry: Face3D,
}

/// A planar face: an outer boundary loop plus optional hole loops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face3D {
    pub boundary: Vec<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Vec<[f64; 3]>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorGrid {
    pub identifier: String,
    #[serde(default)]
    pub full_identifier: Option<String>,
    #[serde(default)]
    pub room_identifier: Option<String>,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
    #[serde(default)]
    pub mesh: Option<Mesh3D>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub pos: [f64; 3],
    pub dir: [f64; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh3D {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<usize>>,
}

impl Model {
    /// Parse a model document and check the pieces the pipeline needs.
    pub fn from_document(document: Value) -> VizResult<Self> {
        let model: Model = serde_json::from_value(document)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> VizResult<()> {
        if self.identifier.is_empty() {
            return Err(VizError::InvalidModel {
                message: "model identifier is empty".to_string(),
            });
        }
        if self.sensor_grids().is_empty() {
            return Err(VizError::InvalidModel {
                message: "model has no sensor grids".to_string(),
            });
        }
        for grid in self.sensor_grids() {
            if grid.sensors.is_empty() && grid.mesh.is_none() {
                return Err(VizError::InvalidModel {
                    message: format!("sensor grid '{}' has no sensors", grid.identifier),
                });
            }
        }
        Ok(())
    }

    pub fn sensor_grids(&self) -> &[SensorGrid] {
        self.properties
            .radiance
            .as_ref()
            .map(|radiance| radiance.sensor_grids.as_slice())
            .unwrap_or(&[])
    }
}

impl SensorGrid {
    /// Identifier the result files are named after.
    pub fn full_id(&self) -> &str {
        self.full_identifier.as_deref().unwrap_or(&self.identifier)
    }

    /// Number of sensor points the grid's results must cover.
    pub fn sensor_count(&self) -> usize {
        if let Some(mesh) = &self.mesh {
            mesh.faces.len()
        } else {
            self.sensors.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_document() -> Value {
        json!({
            "identifier": "office",
            "rooms": [],
            "properties": {
                "radiance": {
                    "sensor_grids": [{
                        "identifier": "room_1",
                        "sensors": [{"pos": [0.0, 0.0, 0.8], "dir": [0.0, 0.0, 1.0]}]
                    }]
                }
            }
        })
    }

    #[test]
    fn parses_minimal_document() {
        let model = Model::from_document(minimal_document()).expect("valid model");
        assert_eq!(model.sensor_grids().len(), 1);
        assert_eq!(model.sensor_grids()[0].sensor_count(), 1);
    }

    #[test]
    fn rejects_model_without_grids() {
        let document = json!({
            "identifier": "office",
            "properties": {"radiance": {"sensor_grids": []}}
        });
        let err = Model::from_document(document).expect_err("should reject");
        assert!(err.to_string().contains("no sensor grids"));
    }

    #[test]
    fn rejects_missing_required_fields() {
        let document = json!({"properties": {}});
        assert!(Model::from_document(document).is_err());
    }

    #[test]
    fn mesh_face_count_wins_over_sensor_list() {
        let grid = SensorGrid {
            identifier: "g".to_string(),
            full_identifier: None,
            room_identifier: None,
            sensors: Vec::new(),
            mesh: Some(Mesh3D {
                vertices: vec![[0.0; 3], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
                faces: vec![vec![0, 1, 2, 3]],
            }),
        };
        assert_eq!(grid.sensor_count(), 1);
    }
}
