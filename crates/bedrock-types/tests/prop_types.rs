// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Property-Based Tests (proptest) for bedrock-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for bedrock-types using proptest.
//!
//! Covers: Grid2D construction invariants, configuration validation,
//! configuration serialization roundtrip.

use bedrock_types::config::{BedrockConfig, BedrockThermalParams};
use bedrock_types::state::Grid2D;
use proptest::prelude::*;

// ── Grid2D Construction Invariants ───────────────────────────────────

proptest! {
    /// Grid dimensions and field shapes match constructor arguments.
    #[test]
    fn grid_dimensions_match(
        nx in 1usize..128,
        ny in 1usize..128,
    ) {
        let grid = Grid2D::new(nx, ny);

        prop_assert_eq!(grid.nx, nx);
        prop_assert_eq!(grid.ny, ny);
        prop_assert_eq!(grid.shape(), (ny, nx));
        prop_assert_eq!(grid.n_points(), nx * ny);
        let filled = grid.filled(0.0);
        prop_assert_eq!(filled.shape(), &[ny, nx]);
    }

    /// Filled fields carry the requested value everywhere.
    #[test]
    fn grid_filled_is_uniform(nx in 1usize..32, ny in 1usize..32, value in -1e3f64..1e3) {
        let field = Grid2D::new(nx, ny).filled(value);
        prop_assert!(field.iter().all(|&v| v == value));
    }
}

// ── Configuration Invariants ─────────────────────────────────────────

proptest! {
    /// Positive, finite physical parameters always validate and give D > 0.
    #[test]
    fn positive_params_validate(
        k in 0.1f64..10.0,
        rho in 1000.0f64..5000.0,
        c in 100.0f64..2000.0,
    ) {
        let params = BedrockThermalParams {
            conductivity: k,
            density: rho,
            specific_heat_capacity: c,
        };
        prop_assert!(params.validate().is_ok());
        let d = params.diffusivity();
        prop_assert!(d > 0.0 && d.is_finite());
        prop_assert!((d * rho * c - k).abs() < 1e-12 * k);
    }

    /// Non-positive conductivity is always rejected.
    #[test]
    fn non_positive_conductivity_rejected(k in -10.0f64..=0.0) {
        let mut cfg = BedrockConfig::default();
        cfg.thermal.conductivity = k;
        prop_assert!(cfg.validate().is_err());
    }

    /// JSON roundtrip preserves every field.
    #[test]
    fn config_json_roundtrip(
        depth in 1.0f64..5000.0,
        levels in 0usize..200,
        flux in -0.2f64..0.2,
    ) {
        let mut cfg = BedrockConfig::default();
        cfg.grid.depth = depth;
        cfg.grid.levels = levels;
        cfg.geothermal_flux = flux;
        let json = serde_json::to_string(&cfg).unwrap();
        let back: BedrockConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.grid.levels, levels);
        prop_assert!((back.grid.depth - depth).abs() <= 1e-12 * depth);
        prop_assert!((back.geothermal_flux - flux).abs() <= 1e-15);
        prop_assert_eq!(back.thermal, cfg.thermal);
    }
}
