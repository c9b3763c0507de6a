// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Bedrock Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Column-wise heat diffusion in the bedrock thermal layer beneath an ice sheet.
//!
//! Each horizontal grid point carries a vertical column of bedrock temperatures,
//! advanced with an explicit centered scheme under a prescribed interface
//! temperature (top) and geothermal flux (bottom). The heat flux into the ice
//! is reconstructed after every change of the thermal state.

pub mod axis;
pub mod bootstrap;
pub mod diffusion;
pub mod field;
pub mod flux;
pub mod model_state;
pub mod timestep;
pub mod unit;
