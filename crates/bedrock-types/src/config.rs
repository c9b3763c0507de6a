// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{
    BEDROCK_DENSITY, BEDROCK_LAYER_DEPTH, BEDROCK_LAYER_LEVELS, BEDROCK_SPECIFIC_HEAT_CAPACITY,
    BEDROCK_THERMAL_CONDUCTIVITY, GEOTHERMAL_FLUX,
};
use crate::error::{BedrockError, BedrockResult};
use serde::{Deserialize, Serialize};

/// Top-level bedrock thermal unit configuration.
/// Every field is optional in JSON; missing values fall back to the defaults in `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedrockConfig {
    #[serde(default)]
    pub grid: BedrockGridConfig,
    #[serde(default)]
    pub thermal: BedrockThermalParams,
    /// Geothermal flux used when no flux field is supplied at initialization [W/m²].
    #[serde(default = "default_geothermal_flux")]
    pub geothermal_flux: f64,
}

/// Vertical extent of the bedrock thermal layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedrockGridConfig {
    /// Layer depth [m].
    #[serde(rename = "Lbz", default = "default_depth")]
    pub depth: f64,
    /// Number of levels, including both boundaries.
    #[serde(rename = "Mbz", default = "default_levels")]
    pub levels: usize,
}

/// Physical constants of the bedrock, fixed for the lifetime of a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedrockThermalParams {
    /// Thermal conductivity [W/(m·K)].
    #[serde(default = "default_conductivity")]
    pub conductivity: f64,
    /// Density [kg/m³].
    #[serde(default = "default_density")]
    pub density: f64,
    /// Specific heat capacity [J/(kg·K)].
    #[serde(default = "default_specific_heat_capacity")]
    pub specific_heat_capacity: f64,
}

fn default_geothermal_flux() -> f64 {
    GEOTHERMAL_FLUX
}
fn default_depth() -> f64 {
    BEDROCK_LAYER_DEPTH
}
fn default_levels() -> usize {
    BEDROCK_LAYER_LEVELS
}
fn default_conductivity() -> f64 {
    BEDROCK_THERMAL_CONDUCTIVITY
}
fn default_density() -> f64 {
    BEDROCK_DENSITY
}
fn default_specific_heat_capacity() -> f64 {
    BEDROCK_SPECIFIC_HEAT_CAPACITY
}

impl Default for BedrockGridConfig {
    fn default() -> Self {
        BedrockGridConfig {
            depth: default_depth(),
            levels: default_levels(),
        }
    }
}

impl Default for BedrockThermalParams {
    fn default() -> Self {
        BedrockThermalParams {
            conductivity: default_conductivity(),
            density: default_density(),
            specific_heat_capacity: default_specific_heat_capacity(),
        }
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        BedrockConfig {
            grid: BedrockGridConfig::default(),
            thermal: BedrockThermalParams::default(),
            geothermal_flux: default_geothermal_flux(),
        }
    }
}

impl BedrockThermalParams {
    /// Thermal diffusivity D = k / (ρ c) [m²/s].
    pub fn diffusivity(&self) -> f64 {
        self.conductivity / (self.density * self.specific_heat_capacity)
    }

    pub fn validate(&self) -> BedrockResult<()> {
        let checks = [
            ("conductivity", self.conductivity),
            ("density", self.density),
            ("specific_heat_capacity", self.specific_heat_capacity),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(BedrockError::InvalidConfiguration(format!(
                    "bedrock {name} must be finite and > 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl BedrockConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> BedrockResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Checks the physical parameters and the default geothermal flux.
    ///
    /// Layer depth and level count are checked where the column axis is built,
    /// since a single level selects the layer-free unit.
    pub fn validate(&self) -> BedrockResult<()> {
        self.thermal.validate()?;
        if !self.geothermal_flux.is_finite() {
            return Err(BedrockError::InvalidConfiguration(format!(
                "geothermal flux must be finite, got {}",
                self.geothermal_flux
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/bedrock-types/ at compile time,
    /// so we go up 2 levels to reach the workspace root.
    fn config_path(relative: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(relative)
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_load_greenland_config() {
        let cfg = BedrockConfig::from_file(&config_path("configs/greenland_bedrock.json")).unwrap();
        assert!((cfg.grid.depth - 1000.0).abs() < 1e-12);
        assert_eq!(cfg.grid.levels, 41);
        assert!((cfg.thermal.conductivity - 3.0).abs() < 1e-12);
        assert!((cfg.geothermal_flux - 0.06).abs() < 1e-12);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_load_layer_free_config() {
        let cfg = BedrockConfig::from_file(&config_path("configs/no_bedrock_layer.json")).unwrap();
        assert_eq!(cfg.grid.levels, 1);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid": {{ "Mbz": 11 }} }}"#).unwrap();
        let cfg = BedrockConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.grid.levels, 11);
        assert!((cfg.grid.depth - BEDROCK_LAYER_DEPTH).abs() < 1e-12);
        assert_eq!(cfg.thermal, BedrockThermalParams::default());
        assert!((cfg.geothermal_flux - GEOTHERMAL_FLUX).abs() < 1e-15);
    }

    #[test]
    fn test_diffusivity() {
        let params = BedrockThermalParams {
            conductivity: 2.5,
            density: 1.8,
            specific_heat_capacity: 1.0,
        };
        assert!((params.diffusivity() - 2.5 / 1.8).abs() < 1e-15);

        let defaults = BedrockThermalParams::default();
        assert!((defaults.diffusivity() - 3.0 / 3.3e6).abs() < 1e-18);
    }

    #[test]
    fn test_validate_rejects_non_physical_params() {
        for (k, rho, c) in [
            (0.0, 3300.0, 1000.0),
            (3.0, -1.0, 1000.0),
            (3.0, 3300.0, f64::NAN),
            (f64::INFINITY, 3300.0, 1000.0),
        ] {
            let mut cfg = BedrockConfig::default();
            cfg.thermal = BedrockThermalParams {
                conductivity: k,
                density: rho,
                specific_heat_capacity: c,
            };
            match cfg.validate() {
                Err(BedrockError::InvalidConfiguration(_)) => {}
                other => panic!("Unexpected result: {other:?}"),
            }
        }

        let mut cfg = BedrockConfig::default();
        cfg.geothermal_flux = f64::NAN;
        let err = cfg.validate().expect_err("NaN flux must fail");
        assert!(err.to_string().contains("geothermal flux"));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = BedrockConfig::from_file(&config_path("configs/greenland_bedrock.json")).unwrap();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        assert!(json.contains("\"Lbz\""));
        assert!(json.contains("\"Mbz\""));
        let cfg2: BedrockConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }
}
