// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array2;

/// Horizontal grid of locally resident columns.
/// 2D fields on this grid are shaped [ny, nx]: ny rows, nx cols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid2D {
    pub nx: usize,
    pub ny: usize,
}

impl Grid2D {
    pub fn new(nx: usize, ny: usize) -> Self {
        Grid2D { nx, ny }
    }

    /// Shape of a 2D field on this grid.
    pub fn shape(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }

    pub fn n_points(&self) -> usize {
        self.nx * self.ny
    }

    /// A 2D field with every point set to `value`.
    pub fn filled(&self, value: f64) -> Array2<f64> {
        Array2::from_elem(self.shape(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_is_rows_by_cols() {
        let grid = Grid2D::new(7, 3);
        assert_eq!(grid.shape(), (3, 7));
        assert_eq!(grid.n_points(), 21);
        let field = grid.filled(263.15);
        assert_eq!(field.shape(), &[3, 7]);
        assert!(field.iter().all(|&v| v == 263.15));
    }

    #[test]
    fn test_single_point_grid() {
        let grid = Grid2D::new(1, 1);
        assert_eq!(grid.shape(), (1, 1));
        assert_eq!(grid.filled(0.0).len(), 1);
    }
}
