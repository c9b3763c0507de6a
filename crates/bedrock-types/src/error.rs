// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BedrockError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Non-causal timestep: dt = {dt} s (backward heat equation is not allowed)")]
    NonCausalTimestep { dt: f64 },

    #[error(
        "Next update must be contiguous with the last one: \
         stored t = {stored_t} s, dt = {stored_dt} s; desired t = {t} s, dt = {dt} s"
    )]
    DiscontinuousSchedule {
        stored_t: f64,
        stored_dt: f64,
        t: f64,
        dt: f64,
    },

    #[error("Unstable timestep: dt = {dt} s exceeds the maximum stable dt = {max_dt} s")]
    UnstableTimestep { dt: f64, max_dt: f64 },

    #[error("Bedrock temperature is not available (bootstrapping is needed)")]
    BootstrapRequired,

    #[error("Grid index out of bounds: row={row}, col={col}")]
    GridOutOfBounds { row: usize, col: usize },

    #[error("Shape mismatch for {name}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model state error: {0}")]
    ModelState(String),
}

impl BedrockError {
    pub fn shape_mismatch(name: &str, expected: &[usize], actual: &[usize]) -> Self {
        BedrockError::ShapeMismatch {
            name: name.to_string(),
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}

pub type BedrockResult<T> = Result<T, BedrockError>;
