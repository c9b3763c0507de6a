// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Timestep Control
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stability and continuity checks for bedrock updates.
//!
//! The explicit scheme
//!
//! T_k^{n+1} = T_k^n + R (T_{k-1}^n - 2 T_k^n + T_{k+1}^n),  R = D Δt / Δz²
//!
//! keeps all coefficients non-negative iff R ≤ 1/2, i.e. Δt ≤ Δz² / (2D).
//! The grid is equally spaced and D is constant, so the bound is fixed for
//! the lifetime of a unit.

use bedrock_types::constants::TIME_CONTIGUITY_TOLERANCE;
use bedrock_types::error::{BedrockError, BedrockResult};

/// Largest time step a component can take, or no bound at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxTimestep {
    value: Option<f64>,
    description: &'static str,
}

impl MaxTimestep {
    /// A non-finite `value` (e.g. zero diffusivity) means no bound.
    pub fn finite(value: f64, description: &'static str) -> Self {
        MaxTimestep {
            value: Some(value).filter(|v| v.is_finite()),
            description,
        }
    }

    pub fn unbounded(description: &'static str) -> Self {
        MaxTimestep {
            value: None,
            description,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_some()
    }

    /// Bound in seconds, `None` when unbounded.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

/// Δz² / (2D) [s].
pub fn max_stable_timestep(dz: f64, diffusivity: f64) -> f64 {
    dz * dz / (2.0 * diffusivity)
}

/// Whether `t` starts where the interval `[prev_t, prev_t + prev_dt]` ended.
///
/// Absolute tolerance while the expected start is below 1 s in magnitude,
/// relative tolerance above.
pub fn is_contiguous(prev_t: f64, prev_dt: f64, t: f64) -> bool {
    let expected = prev_t + prev_dt;
    let diff = (t - expected).abs();
    if expected.abs() < 1.0 {
        diff < TIME_CONTIGUITY_TOLERANCE
    } else {
        diff / expected.abs() < TIME_CONTIGUITY_TOLERANCE
    }
}

/// Gatekeeper for diffusion steps: remembers the last accepted `(t, dt)`.
#[derive(Debug, Clone)]
pub struct TimestepController {
    max_dt: MaxTimestep,
    last: Option<(f64, f64)>,
}

impl TimestepController {
    pub fn new(max_dt: MaxTimestep) -> Self {
        TimestepController { max_dt, last: None }
    }

    pub fn max_timestep(&self) -> MaxTimestep {
        self.max_dt
    }

    /// Last accepted `(t, dt)`, `None` before the first step.
    pub fn last_interval(&self) -> Option<(f64, f64)> {
        self.last
    }

    /// Forget the clock, e.g. on re-initialization.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Check `(t, dt)` without recording it.
    pub fn check(&self, t: f64, dt: f64) -> BedrockResult<()> {
        // NaN fails this comparison too.
        if !(dt >= 0.0) {
            return Err(BedrockError::NonCausalTimestep { dt });
        }
        if !t.is_finite() {
            return Err(BedrockError::PhysicsViolation(format!(
                "bedrock update requires a finite start time, got t={t}"
            )));
        }

        if let Some((stored_t, stored_dt)) = self.last {
            if !is_contiguous(stored_t, stored_dt, t) {
                return Err(BedrockError::DiscontinuousSchedule {
                    stored_t,
                    stored_dt,
                    t,
                    dt,
                });
            }
        }

        if let Some(max_dt) = self.max_dt.value() {
            if max_dt.is_finite() && dt > max_dt {
                return Err(BedrockError::UnstableTimestep { dt, max_dt });
            }
        }
        Ok(())
    }

    /// Check `(t, dt)` and, on success, record it as the new clock state.
    pub fn authorize(&mut self, t: f64, dt: f64) -> BedrockResult<()> {
        self.check(t, dt)?;
        self.last = Some((t, dt));
        Ok(())
    }
}
