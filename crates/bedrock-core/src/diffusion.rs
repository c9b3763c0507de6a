// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Diffusion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Explicit (forward Euler) step of the bedrock heat equation.
//!
//! ∂T/∂t = D ∂²T/∂z²,  T(0) = T_top,  -k ∂T/∂z (-L) = q_b
//!
//! The base uses a mirror ghost node T_{-1} = T_1 + 2 q_b Δz / k.

use crate::field::ThermalField;
use bedrock_types::error::BedrockResult;
use ndarray::{Array2, ArrayViewMut1, Zip};

/// Advance one column by one step with mesh ratio `r = D dt / dz²`.
///
/// Updates in place: `prev_old` carries T_{k-1}^n across the sweep, so every
/// new value is built from old values only.
pub fn step_column(
    mut column: ArrayViewMut1<'_, f64>,
    top_temperature: f64,
    bottom_flux: f64,
    r: f64,
    dz: f64,
    conductivity: f64,
) {
    let k0 = column.len() - 1;

    // Dirichlet condition, explicit in time.
    column[k0] = top_temperature;

    let ghost = column[1] + 2.0 * bottom_flux * dz / conductivity;
    let mut prev_old = column[0];
    column[0] = prev_old + r * (ghost - 2.0 * prev_old + column[1]);

    for k in 1..k0 {
        let old = column[k];
        column[k] = old + r * (prev_old - 2.0 * old + column[k + 1]);
        prev_old = old;
    }

    column[k0] = top_temperature;
}

/// Advance every column of `field` in parallel.
///
/// Inputs are borrowed for the whole sweep, so all columns see the same
/// boundary data.
pub fn step_field(
    field: &mut ThermalField,
    top_temperature: &Array2<f64>,
    bottom_flux: &Array2<f64>,
    r: f64,
    dz: f64,
    conductivity: f64,
) -> BedrockResult<()> {
    field.check_grid_field("bedrock top temperature", top_temperature.view())?;
    field.check_grid_field("geothermal flux", bottom_flux.view())?;

    Zip::from(field.columns_mut())
        .and(top_temperature)
        .and(bottom_flux)
        .par_for_each(|column, &t_top, &q_b| {
            step_column(column, t_top, q_b, r, dz, conductivity);
        });
    Ok(())
}
