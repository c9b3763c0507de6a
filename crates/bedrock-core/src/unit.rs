// ─────────────────────────────────────────────────────────────────────
// SCPN Bedrock Thermal — Bed Thermal Unit
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bedrock thermal units: the boundary condition seen by the ice at its base.
//!
//! `FullBedThermalUnit` diffuses heat through a layer of bedrock columns and
//! reports the flux reaching the ice. `MinimalBedThermalUnit` has no layer and
//! passes the geothermal flux straight through.

use crate::axis::ColumnAxis;
use crate::bootstrap::bootstrap_field;
use crate::diffusion::step_field;
use crate::field::ThermalField;
use crate::flux::reconstruct_top_surface_flux;
use crate::model_state::{FluxRecord, ModelState, TemperatureRecord, VerticalAxisMetadata};
use crate::timestep::{max_stable_timestep, MaxTimestep, TimestepController};
use bedrock_types::config::BedrockConfig;
use bedrock_types::error::{BedrockError, BedrockResult};
use bedrock_types::state::Grid2D;
use ndarray::{Array2, Array3};
use rayon::prelude::*;

const MAX_TIMESTEP_DESCRIPTION: &str = "bedrock thermal layer";

/// Whether the columns hold integrated temperatures yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalState {
    /// No usable profile: the next update fills columns from the boundary data first.
    Bootstrapping,
    /// Columns hold a profile from a restart, a bootstrap or previous steps.
    Integrating,
}

/// Data available when a run starts.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Geothermal flux [W/m²]; the configured constant when absent.
    pub geothermal_flux: Option<Array2<f64>>,
    /// Temperature record from a restart file.
    pub temperature: Option<TemperatureRecord>,
}

pub trait BedThermalUnit: Send + Sync {
    fn init(&mut self, opts: InitOptions) -> BedrockResult<()>;

    /// Advance over `[t, t + dt]` given the temperature at the top of the bedrock [K].
    fn update(&mut self, top_temperature: &Array2<f64>, t: f64, dt: f64) -> BedrockResult<()>;

    fn max_timestep(&self) -> MaxTimestep;

    /// Heat flux from the bedrock into the ice [W/m²], positive upward.
    fn flux_through_top_surface(&self) -> &Array2<f64>;

    /// Geothermal flux entering the base of the layer [W/m²].
    fn flux_through_bottom_surface(&self) -> &Array2<f64>;

    fn set_flux_through_bottom_surface(&mut self, flux: &Array2<f64>) -> BedrockResult<()>;

    fn depth(&self) -> f64;

    fn levels(&self) -> usize;

    fn vertical_spacing(&self) -> f64;

    fn model_state(&self) -> ModelState;
}

/// Pick the unit matching the configured layer: more than one level gets
/// the full diffusion model, otherwise the layer-free pass-through.
pub fn create_bed_thermal_unit(
    grid: &Grid2D,
    config: &BedrockConfig,
) -> BedrockResult<Box<dyn BedThermalUnit>> {
    if config.grid.levels >= 2 {
        Ok(Box::new(FullBedThermalUnit::new(grid, config)?))
    } else {
        Ok(Box::new(MinimalBedThermalUnit::new(grid, config)?))
    }
}

fn check_input_field(name: &str, shape: (usize, usize), field: &Array2<f64>) -> BedrockResult<()> {
    if field.dim() != shape {
        return Err(BedrockError::shape_mismatch(
            name,
            &[shape.0, shape.1],
            field.shape(),
        ));
    }
    let finite = match field.as_slice_memory_order() {
        Some(values) => values.par_iter().all(|v| v.is_finite()),
        None => field.iter().all(|v| v.is_finite()),
    };
    if !finite {
        return Err(BedrockError::PhysicsViolation(format!(
            "{name} contains non-finite values"
        )));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// Full model
// ─────────────────────────────────────────────────────────────────────

/// Bedrock thermal layer with explicit column-wise heat diffusion.
#[derive(Debug, Clone)]
pub struct FullBedThermalUnit {
    axis: ColumnAxis,
    conductivity: f64,
    diffusivity: f64,
    default_geothermal_flux: f64,
    state: ThermalState,
    temperature: ThermalField,
    controller: TimestepController,
    bottom_flux: Array2<f64>,
    top_flux: Array2<f64>,
}

impl FullBedThermalUnit {
    pub fn new(grid: &Grid2D, config: &BedrockConfig) -> BedrockResult<Self> {
        config.validate()?;
        let axis = ColumnAxis::new(config.grid.depth, config.grid.levels)?;
        let conductivity = config.thermal.conductivity;
        let diffusivity = config.thermal.diffusivity();
        let max_dt = max_stable_timestep(axis.spacing(), diffusivity);

        let (ny, nx) = grid.shape();
        let bottom_flux = grid.filled(config.geothermal_flux);

        Ok(FullBedThermalUnit {
            temperature: ThermalField::new(ny, nx, axis.levels()),
            axis,
            conductivity,
            diffusivity,
            default_geothermal_flux: config.geothermal_flux,
            state: ThermalState::Bootstrapping,
            controller: TimestepController::new(MaxTimestep::finite(
                max_dt,
                MAX_TIMESTEP_DESCRIPTION,
            )),
            top_flux: bottom_flux.clone(),
            bottom_flux,
        })
    }

    pub fn state(&self) -> ThermalState {
        self.state
    }

    pub fn axis(&self) -> &ColumnAxis {
        &self.axis
    }

    /// D = k / (ρ c) [m²/s].
    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    pub fn conductivity(&self) -> f64 {
        self.conductivity
    }

    /// Last accepted `(t, dt)`.
    pub fn last_interval(&self) -> Option<(f64, f64)> {
        self.controller.last_interval()
    }

    pub fn revision(&self) -> u64 {
        self.temperature.revision()
    }

    /// Bedrock temperature [K], shaped [ny, nx, levels].
    pub fn temperature(&self) -> BedrockResult<&Array3<f64>> {
        match self.state {
            ThermalState::Bootstrapping => Err(BedrockError::BootstrapRequired),
            ThermalState::Integrating => Ok(self.temperature.values()),
        }
    }

    fn grid_shape(&self) -> (usize, usize) {
        self.temperature.grid_shape()
    }

    /// Fill every column with the linear steady-state profile.
    ///
    /// The flux published here is the one of the not yet integrated state.
    /// Does nothing once the columns hold integrated or restarted data.
    pub fn bootstrap(&mut self, top_temperature: &Array2<f64>) -> BedrockResult<()> {
        check_input_field("bedrock top temperature", self.grid_shape(), top_temperature)?;
        if self.state == ThermalState::Integrating {
            log::debug!("bedrock temperature already set; skipping bootstrap");
            return Ok(());
        }
        bootstrap_field(
            &mut self.temperature,
            top_temperature,
            &self.bottom_flux,
            self.axis.spacing(),
            self.conductivity,
        )?;
        self.update_flux_through_top_surface()?;
        self.state = ThermalState::Integrating;
        Ok(())
    }

    fn update_flux_through_top_surface(&mut self) -> BedrockResult<()> {
        match self.state {
            ThermalState::Bootstrapping => {
                self.top_flux.assign(&self.bottom_flux);
                Ok(())
            }
            ThermalState::Integrating => reconstruct_top_surface_flux(
                &self.temperature,
                self.axis.spacing(),
                self.conductivity,
                &mut self.top_flux,
            ),
        }
    }

    fn diffuse(&mut self, top_temperature: &Array2<f64>, r: f64) -> BedrockResult<()> {
        step_field(
            &mut self.temperature,
            top_temperature,
            &self.bottom_flux,
            r,
            self.axis.spacing(),
            self.conductivity,
        )
    }
}

impl BedThermalUnit for FullBedThermalUnit {
    fn init(&mut self, opts: InitOptions) -> BedrockResult<()> {
        log::info!(
            "initializing the bedrock thermal unit: {} levels over {} m",
            self.axis.levels(),
            self.axis.depth()
        );
        let shape = self.grid_shape();
        if let Some(flux) = &opts.geothermal_flux {
            check_input_field("geothermal flux", shape, flux)?;
        }
        let record = opts.temperature.as_ref().filter(|r| !r.is_empty());
        if let Some(record) = record {
            let expected = [shape.0, shape.1, self.axis.levels()];
            if record.values.shape() != &expected[..] {
                return Err(BedrockError::shape_mismatch(
                    "bedrock temperature record",
                    &expected,
                    record.values.shape(),
                ));
            }
        }

        match &opts.geothermal_flux {
            Some(flux) => self.bottom_flux.assign(flux),
            None => self.bottom_flux.fill(self.default_geothermal_flux),
        }

        let revision = self.temperature.revision();
        if let Some(record) = record {
            self.temperature.load(record.values.view())?;
        }
        self.state = if self.temperature.revision() == revision {
            log::info!("  no bedrock temperature record; columns will be bootstrapped");
            ThermalState::Bootstrapping
        } else {
            log::info!("  bedrock temperature read from the restart record");
            ThermalState::Integrating
        };
        self.controller.reset();

        self.update_flux_through_top_surface()
    }

    fn update(&mut self, top_temperature: &Array2<f64>, t: f64, dt: f64) -> BedrockResult<()> {
        check_input_field("bedrock top temperature", self.grid_shape(), top_temperature)?;
        self.controller.authorize(t, dt)?;

        let dz = self.axis.spacing();
        let r = self.diffusivity * dt / (dz * dz);
        log::debug!("bedrock thermal step: t = {t} s, dt = {dt} s, R = {r:.4}");

        match self.state {
            ThermalState::Bootstrapping => {
                bootstrap_field(
                    &mut self.temperature,
                    top_temperature,
                    &self.bottom_flux,
                    dz,
                    self.conductivity,
                )?;
                self.state = ThermalState::Integrating;
                self.diffuse(top_temperature, r)?;
            }
            ThermalState::Integrating => self.diffuse(top_temperature, r)?,
        }

        self.update_flux_through_top_surface()
    }

    fn max_timestep(&self) -> MaxTimestep {
        self.controller.max_timestep()
    }

    fn flux_through_top_surface(&self) -> &Array2<f64> {
        &self.top_flux
    }

    fn flux_through_bottom_surface(&self) -> &Array2<f64> {
        &self.bottom_flux
    }

    fn set_flux_through_bottom_surface(&mut self, flux: &Array2<f64>) -> BedrockResult<()> {
        check_input_field("geothermal flux", self.grid_shape(), flux)?;
        self.bottom_flux.assign(flux);
        self.update_flux_through_top_surface()
    }

    fn depth(&self) -> f64 {
        self.axis.depth()
    }

    fn levels(&self) -> usize {
        self.axis.levels()
    }

    fn vertical_spacing(&self) -> f64 {
        self.axis.spacing()
    }

    fn model_state(&self) -> ModelState {
        let temperature = match self.state {
            ThermalState::Bootstrapping => None,
            ThermalState::Integrating => Some(TemperatureRecord::new(
                VerticalAxisMetadata::for_axis(&self.axis),
                self.temperature.values().clone(),
            )),
        };
        ModelState {
            flux: FluxRecord::top_surface(self.top_flux.clone()),
            temperature,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Layer-free model
// ─────────────────────────────────────────────────────────────────────

/// No bedrock layer: the ice sees the geothermal flux directly.
#[derive(Debug, Clone)]
pub struct MinimalBedThermalUnit {
    default_geothermal_flux: f64,
    controller: TimestepController,
    bottom_flux: Array2<f64>,
    top_flux: Array2<f64>,
}

impl MinimalBedThermalUnit {
    pub fn new(grid: &Grid2D, config: &BedrockConfig) -> BedrockResult<Self> {
        config.validate()?;
        let bottom_flux = grid.filled(config.geothermal_flux);
        Ok(MinimalBedThermalUnit {
            default_geothermal_flux: config.geothermal_flux,
            controller: TimestepController::new(MaxTimestep::unbounded(MAX_TIMESTEP_DESCRIPTION)),
            top_flux: bottom_flux.clone(),
            bottom_flux,
        })
    }
}

impl BedThermalUnit for MinimalBedThermalUnit {
    fn init(&mut self, opts: InitOptions) -> BedrockResult<()> {
        log::info!("initializing the bedrock thermal unit: no bedrock thermal layer");
        match &opts.geothermal_flux {
            Some(flux) => {
                check_input_field("geothermal flux", self.bottom_flux.dim(), flux)?;
                self.bottom_flux.assign(flux);
            }
            None => self.bottom_flux.fill(self.default_geothermal_flux),
        }
        self.controller.reset();
        self.top_flux.assign(&self.bottom_flux);
        Ok(())
    }

    fn update(&mut self, top_temperature: &Array2<f64>, t: f64, dt: f64) -> BedrockResult<()> {
        check_input_field("bedrock top temperature", self.bottom_flux.dim(), top_temperature)?;
        self.controller.authorize(t, dt)?;
        self.top_flux.assign(&self.bottom_flux);
        Ok(())
    }

    fn max_timestep(&self) -> MaxTimestep {
        self.controller.max_timestep()
    }

    fn flux_through_top_surface(&self) -> &Array2<f64> {
        &self.top_flux
    }

    fn flux_through_bottom_surface(&self) -> &Array2<f64> {
        &self.bottom_flux
    }

    fn set_flux_through_bottom_surface(&mut self, flux: &Array2<f64>) -> BedrockResult<()> {
        check_input_field("geothermal flux", self.bottom_flux.dim(), flux)?;
        self.bottom_flux.assign(flux);
        self.top_flux.assign(&self.bottom_flux);
        Ok(())
    }

    fn depth(&self) -> f64 {
        0.0
    }

    fn levels(&self) -> usize {
        0
    }

    fn vertical_spacing(&self) -> f64 {
        0.0
    }

    fn model_state(&self) -> ModelState {
        ModelState {
            flux: FluxRecord::top_surface(self.top_flux.clone()),
            temperature: None,
        }
    }
}
