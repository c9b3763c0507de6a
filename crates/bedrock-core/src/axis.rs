// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Column Axis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Equally spaced vertical axis of the bedrock thermal layer.

use bedrock_types::error::{BedrockError, BedrockResult};
use ndarray::Array1;

/// Depth coordinates of a bedrock column, from `-depth` (base) up to `0`
/// (ice/bedrock interface).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnAxis {
    depth: f64,
    dz: f64,
    z: Array1<f64>,
}

impl ColumnAxis {
    /// Build an axis of `levels` points spanning `depth` metres.
    ///
    /// The last coordinate is pinned to exactly 0 so the interface is not
    /// displaced by rounding in `-depth + k dz`.
    pub fn new(depth: f64, levels: usize) -> BedrockResult<Self> {
        if !depth.is_finite() || depth <= 0.0 {
            return Err(BedrockError::InvalidConfiguration(format!(
                "Invalid bedrock thermal layer depth: {depth} m"
            )));
        }
        if levels < 2 {
            return Err(BedrockError::InvalidConfiguration(format!(
                "Invalid number of levels of the bedrock thermal layer: {levels}"
            )));
        }

        let dz = depth / (levels - 1) as f64;
        let mut z = Array1::from_shape_fn(levels, |k| -depth + k as f64 * dz);
        z[levels - 1] = 0.0;

        Ok(ColumnAxis { depth, dz, z })
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn levels(&self) -> usize {
        self.z.len()
    }

    /// Equal spacing `depth / (levels - 1)` [m].
    pub fn spacing(&self) -> f64 {
        self.dz
    }

    /// Depth coordinates [m], increasing upward.
    pub fn coordinates(&self) -> &Array1<f64> {
        &self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_endpoints_and_spacing() {
        let axis = ColumnAxis::new(1000.0, 11).unwrap();
        assert_eq!(axis.levels(), 11);
        assert!((axis.spacing() - 100.0).abs() < 1e-12);
        assert_eq!(axis.coordinates()[0], -1000.0);
        assert_eq!(axis.coordinates()[10], 0.0);
        for k in 1..10 {
            let delta = axis.coordinates()[k] - axis.coordinates()[k - 1];
            assert!((delta - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_two_level_axis() {
        let axis = ColumnAxis::new(250.0, 2).unwrap();
        assert_eq!(axis.coordinates().to_vec(), vec![-250.0, 0.0]);
        assert!((axis.spacing() - 250.0).abs() < 1e-12);
    }

    #[test]
    fn test_last_level_pinned_to_zero() {
        // 0.1 * 3 != 0.3 in binary; the pin removes the residual.
        let axis = ColumnAxis::new(0.3, 4).unwrap();
        assert_eq!(axis.coordinates()[3], 0.0);
    }

    #[test]
    fn test_axis_rejects_invalid_configuration() {
        for (depth, levels) in [(0.0, 10), (-5.0, 10), (f64::NAN, 10), (1000.0, 1), (1000.0, 0)] {
            match ColumnAxis::new(depth, levels) {
                Err(BedrockError::InvalidConfiguration(_)) => {}
                other => panic!("Unexpected result for ({depth}, {levels}): {other:?}"),
            }
        }
    }
}
