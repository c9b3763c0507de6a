// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Bootstrap
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cold-start fill of bedrock columns.
//!
//! With no restart data, each column gets the steady-state profile for a
//! prescribed geothermal flux: linear in depth, equal to the interface
//! temperature at z = 0 and warming downward at q_b / k per metre.

use crate::field::ThermalField;
use bedrock_types::error::BedrockResult;
use ndarray::{Array2, ArrayViewMut1, Zip};

/// Fill one column from its interface temperature [K] and basal flux [W/m²].
pub fn bootstrap_column(
    mut column: ArrayViewMut1<'_, f64>,
    top_temperature: f64,
    bottom_flux: f64,
    dz: f64,
    conductivity: f64,
) {
    let k0 = column.len() - 1;
    let increment = dz * bottom_flux / conductivity;

    column[k0] = top_temperature;
    for k in (0..k0).rev() {
        column[k] = column[k + 1] + increment;
    }
}

/// Bootstrap every column of `field` in parallel.
pub fn bootstrap_field(
    field: &mut ThermalField,
    top_temperature: &Array2<f64>,
    bottom_flux: &Array2<f64>,
    dz: f64,
    conductivity: f64,
) -> BedrockResult<()> {
    field.check_grid_field("bedrock top temperature", top_temperature.view())?;
    field.check_grid_field("geothermal flux", bottom_flux.view())?;

    let (ny, nx) = field.grid_shape();
    log::info!(
        "bootstrapping {}x{} bedrock columns: temperature linear in depth from the top \
         bedrock temperature and the geothermal flux",
        ny,
        nx
    );

    Zip::from(field.columns_mut())
        .and(top_temperature)
        .and(bottom_flux)
        .par_for_each(|column, &t_top, &q_b| {
            bootstrap_column(column, t_top, q_b, dz, conductivity);
        });
    Ok(())
}
