// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Thermal Field
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-column storage of bedrock temperatures.
//!
//! Temperatures live in one `[ny, nx, levels]` array, so the column at grid
//! point `(i, j)` (col `i`, row `j`) is a contiguous run of `levels` values
//! with index `levels - 1` at the ice/bedrock interface.

use bedrock_types::error::{BedrockError, BedrockResult};
use ndarray::iter::{Lanes, LanesMut};
use ndarray::{s, Array3, ArrayView1, ArrayView2, ArrayView3, ArrayViewMut1, Axis, Ix2};

#[derive(Debug, Clone)]
pub struct ThermalField {
    values: Array3<f64>,
    revision: u64,
}

impl ThermalField {
    /// Zero-initialized field for `ny x nx` columns of `levels` samples [K].
    pub fn new(ny: usize, nx: usize, levels: usize) -> Self {
        ThermalField {
            values: Array3::zeros((ny, nx, levels)),
            revision: 0,
        }
    }

    /// `(ny, nx)` of the horizontal grid.
    pub fn grid_shape(&self) -> (usize, usize) {
        let (ny, nx, _) = self.values.dim();
        (ny, nx)
    }

    pub fn levels(&self) -> usize {
        self.values.len_of(Axis(2))
    }

    /// Incremented on every mutation; used to tell whether initialization
    /// supplied real data.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn mark_modified(&mut self) {
        self.revision += 1;
    }

    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    fn check_bounds(&self, i: usize, j: usize) -> BedrockResult<()> {
        let (ny, nx) = self.grid_shape();
        if i >= nx || j >= ny {
            return Err(BedrockError::GridOutOfBounds { row: j, col: i });
        }
        Ok(())
    }

    /// Check that a 2D input field matches the horizontal grid of the columns.
    pub fn check_grid_field(&self, name: &str, field: ArrayView2<'_, f64>) -> BedrockResult<()> {
        let (ny, nx) = self.grid_shape();
        if field.dim() != (ny, nx) {
            return Err(BedrockError::shape_mismatch(name, &[ny, nx], field.shape()));
        }
        Ok(())
    }

    pub fn get_column(&self, i: usize, j: usize) -> BedrockResult<ArrayView1<'_, f64>> {
        self.check_bounds(i, j)?;
        Ok(self.values.slice(s![j, i, ..]))
    }

    /// Mutable view of one column. Counts as a mutation.
    pub fn get_column_mut(&mut self, i: usize, j: usize) -> BedrockResult<ArrayViewMut1<'_, f64>> {
        self.check_bounds(i, j)?;
        self.mark_modified();
        Ok(self.values.slice_mut(s![j, i, ..]))
    }

    pub fn set_column(&mut self, i: usize, j: usize, column: &[f64]) -> BedrockResult<()> {
        self.check_bounds(i, j)?;
        if column.len() != self.levels() {
            return Err(BedrockError::shape_mismatch(
                "bedrock column",
                &[self.levels()],
                &[column.len()],
            ));
        }
        self.values
            .slice_mut(s![j, i, ..])
            .assign(&ArrayView1::from(column));
        self.mark_modified();
        Ok(())
    }

    /// Replace every column at once, e.g. from a restart record.
    pub fn load(&mut self, values: ArrayView3<'_, f64>) -> BedrockResult<()> {
        if values.shape() != self.values.shape() {
            return Err(BedrockError::shape_mismatch(
                "bedrock temperature",
                self.values.shape(),
                values.shape(),
            ));
        }
        self.values.assign(&values);
        self.mark_modified();
        Ok(())
    }

    /// Producer over all columns, shaped `[ny, nx]`, for use with `ndarray::Zip`.
    pub fn columns(&self) -> Lanes<'_, f64, Ix2> {
        self.values.lanes(Axis(2))
    }

    /// Mutable producer over all columns. Counts as a mutation.
    pub fn columns_mut(&mut self) -> LanesMut<'_, f64, Ix2> {
        self.mark_modified();
        self.values.lanes_mut(Axis(2))
    }
}
