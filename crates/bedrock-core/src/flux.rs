// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Top Surface Flux
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Heat flux from the bedrock into the base of the ice.
//!
//! G_0 = -k ∂T/∂z at z = 0, positive upward. With at least three levels the
//! gradient is the second-order one-sided difference
//!
//! ∂T/∂z ≈ (3 T(0) - 4 T(-Δz) + T(-2Δz)) / (2Δz),
//!
//! and first order with two levels. Both are exact for linear profiles.

use crate::field::ThermalField;
use bedrock_types::error::BedrockResult;
use ndarray::{Array2, ArrayView1, Zip};

/// Flux through the top of one column [W/m²].
pub fn top_surface_flux_column(column: ArrayView1<'_, f64>, dz: f64, conductivity: f64) -> f64 {
    let k0 = column.len() - 1;
    if column.len() >= 3 {
        -conductivity * (3.0 * column[k0] - 4.0 * column[k0 - 1] + column[k0 - 2]) / (2.0 * dz)
    } else {
        -conductivity * (column[k0] - column[k0 - 1]) / dz
    }
}

/// Recompute `out` from every column of `field`.
pub fn reconstruct_top_surface_flux(
    field: &ThermalField,
    dz: f64,
    conductivity: f64,
    out: &mut Array2<f64>,
) -> BedrockResult<()> {
    field.check_grid_field("top surface flux", out.view())?;

    Zip::from(out)
        .and(field.columns())
        .par_for_each(|flux, column| {
            *flux = top_surface_flux_column(column, dz, conductivity);
        });
    Ok(())
}
