// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Bedrock thermal conductivity [W/(m·K)].
pub const BEDROCK_THERMAL_CONDUCTIVITY: f64 = 3.0;

/// Bedrock density [kg/m³].
pub const BEDROCK_DENSITY: f64 = 3300.0;

/// Bedrock specific heat capacity [J/(kg·K)].
pub const BEDROCK_SPECIFIC_HEAT_CAPACITY: f64 = 1000.0;

/// Default geothermal flux through the base of the thermal layer [W/m²].
pub const GEOTHERMAL_FLUX: f64 = 0.042;

/// Default depth of the bedrock thermal layer [m].
pub const BEDROCK_LAYER_DEPTH: f64 = 1000.0;

/// Default number of levels in the bedrock thermal layer.
pub const BEDROCK_LAYER_LEVELS: usize = 20;

/// Tolerance used when checking that consecutive update intervals are contiguous.
/// Absolute below |t| = 1 s, relative above.
pub const TIME_CONTIGUITY_TOLERANCE: f64 = 1e-12;
