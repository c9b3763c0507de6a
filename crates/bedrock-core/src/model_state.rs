// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Model State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Restart records of the bedrock thermal unit.
//!
//! Two records: the most recent top surface flux and the full temperature
//! profile with its vertical axis. On disk they are NPZ archives with arrays
//! `heat_flux_from_bedrock`, `litho_temp` and `zb`.

use crate::axis::ColumnAxis;
use bedrock_types::error::{BedrockError, BedrockResult};
use ndarray::{Array1, Array2, Array3, Ix1, Ix2, Ix3, OwnedRepr};
use ndarray_npy::{NpzReader, NpzWriter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub const TOP_SURFACE_FLUX_NAME: &str = "heat_flux_from_bedrock";
pub const TEMPERATURE_NAME: &str = "litho_temp";
pub const AXIS_NAME: &str = "zb";

/// Attributes of the bedrock depth coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalAxisMetadata {
    pub name: String,
    pub units: String,
    pub long_name: String,
    pub axis: String,
    /// Orientation; "up" means values increase toward the surface.
    pub positive: String,
    pub coordinates: Vec<f64>,
}

impl VerticalAxisMetadata {
    pub fn from_coordinates(coordinates: Vec<f64>) -> Self {
        VerticalAxisMetadata {
            name: AXIS_NAME.to_string(),
            units: "m".to_string(),
            long_name: "Z-coordinate in bedrock".to_string(),
            axis: "Z".to_string(),
            positive: "up".to_string(),
            coordinates,
        }
    }

    pub fn for_axis(axis: &ColumnAxis) -> Self {
        Self::from_coordinates(axis.coordinates().to_vec())
    }
}

/// Top surface flux [W/m²], shaped [ny, nx].
#[derive(Debug, Clone, PartialEq)]
pub struct FluxRecord {
    pub name: String,
    pub units: String,
    pub values: Array2<f64>,
}

impl FluxRecord {
    pub fn top_surface(values: Array2<f64>) -> Self {
        FluxRecord {
            name: TOP_SURFACE_FLUX_NAME.to_string(),
            units: "W m-2".to_string(),
            values,
        }
    }
}

/// Bedrock temperature [K], shaped [ny, nx, levels].
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRecord {
    pub name: String,
    pub units: String,
    pub axis: VerticalAxisMetadata,
    pub values: Array3<f64>,
}

impl TemperatureRecord {
    pub fn new(axis: VerticalAxisMetadata, values: Array3<f64>) -> Self {
        TemperatureRecord {
            name: TEMPERATURE_NAME.to_string(),
            units: "K".to_string(),
            axis,
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Everything needed to restart a bedrock thermal unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelState {
    pub flux: FluxRecord,
    /// Absent for units without a bedrock layer or still bootstrapping.
    pub temperature: Option<TemperatureRecord>,
}

impl ModelState {
    pub fn write_npz<P: AsRef<Path>>(&self, path: P) -> BedrockResult<()> {
        let file = File::create(path.as_ref())?;
        let mut npz = NpzWriter::new(file);
        npz.add_array(self.flux.name.as_str(), &self.flux.values)
            .map_err(|e| write_error(&self.flux.name, e))?;
        if let Some(temperature) = &self.temperature {
            let axis = Array1::from(temperature.axis.coordinates.clone());
            npz.add_array(AXIS_NAME, &axis)
                .map_err(|e| write_error(AXIS_NAME, e))?;
            npz.add_array(temperature.name.as_str(), &temperature.values)
                .map_err(|e| write_error(&temperature.name, e))?;
        }
        npz.finish()
            .map_err(|e| BedrockError::ModelState(format!("Failed to finish NPZ archive: {e}")))?;
        Ok(())
    }

    pub fn read_npz<P: AsRef<Path>>(path: P) -> BedrockResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut npz = NpzReader::new(file).map_err(|e| {
            BedrockError::ModelState(format!(
                "Failed to open bedrock state archive '{}': {e}",
                path.display()
            ))
        })?;

        let flux = FluxRecord::top_surface(read_array2_f64(&mut npz, TOP_SURFACE_FLUX_NAME)?);

        let names = npz.names().map_err(|e| {
            BedrockError::ModelState(format!("Failed to list NPZ archive entries: {e}"))
        })?;
        let has_temperature = names
            .iter()
            .any(|n| n == TEMPERATURE_NAME || n == &format!("{TEMPERATURE_NAME}.npy"));
        let temperature = if has_temperature {
            let values = read_array3_f64(&mut npz, TEMPERATURE_NAME)?;
            let z = read_array1_f64(&mut npz, AXIS_NAME)?;
            if z.len() != values.len_of(ndarray::Axis(2)) {
                return Err(BedrockError::shape_mismatch(
                    AXIS_NAME,
                    &[values.len_of(ndarray::Axis(2))],
                    &[z.len()],
                ));
            }
            Some(TemperatureRecord::new(
                VerticalAxisMetadata::from_coordinates(z.to_vec()),
                values,
            ))
        } else {
            None
        };

        Ok(ModelState { flux, temperature })
    }
}

fn write_error(key: &str, e: impl std::fmt::Display) -> BedrockError {
    BedrockError::ModelState(format!("Failed to write key '{key}' to NPZ: {e}"))
}

fn read_array1_f64(npz: &mut NpzReader<File>, key: &str) -> BedrockResult<Array1<f64>> {
    npz.by_name::<OwnedRepr<f64>, Ix1>(&format!("{key}.npy"))
        .or_else(|_| npz.by_name::<OwnedRepr<f64>, Ix1>(key))
        .map_err(|e| BedrockError::ModelState(format!("Failed to read key '{key}' from NPZ: {e}")))
}

fn read_array2_f64(npz: &mut NpzReader<File>, key: &str) -> BedrockResult<Array2<f64>> {
    npz.by_name::<OwnedRepr<f64>, Ix2>(&format!("{key}.npy"))
        .or_else(|_| npz.by_name::<OwnedRepr<f64>, Ix2>(key))
        .map_err(|e| BedrockError::ModelState(format!("Failed to read key '{key}' from NPZ: {e}")))
}

fn read_array3_f64(npz: &mut NpzReader<File>, key: &str) -> BedrockResult<Array3<f64>> {
    npz.by_name::<OwnedRepr<f64>, Ix3>(&format!("{key}.npy"))
        .or_else(|_| npz.by_name::<OwnedRepr<f64>, Ix3>(key))
        .map_err(|e| BedrockError::ModelState(format!("Failed to read key '{key}' from NPZ: {e}")))
}
