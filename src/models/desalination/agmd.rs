//! Air gap membrane distillation (AGMD) closure models.
//!
//! An AGMD module is discretized into segments along the flow direction. Each
//! segment has a hot feed channel, a porous hydrophobic membrane, a stagnant
//! air gap, a condensing plate, and a cold coolant channel. Water evaporates
//! at the feed side of the membrane, diffuses through the pores and the gap,
//! and condenses on the plate.
//!
//! This module provides [`twine_core::Model`] implementations that turn a
//! segment's iterated [`OperatingState`] into the coefficients and fluxes an
//! outer solver needs:
//!
//! - [`SegmentClosure`]: the full segment closure, see [`evaluate_segment`].
//! - [`FluxClosure`]: the trans-membrane mass flux alone.
//!
//! Both check their input against its physical domain before evaluating it,
//! unless told otherwise through [`ClosureConfig`].
//!
//! The computational core is in the internal `core` module. The closures
//! in it are also exported as free functions for callers that need a single
//! coefficient.

mod core;

use twine_core::Model;
use uom::si::f64::MassFlux;

pub use self::core::{
    AgmdError, AirGap, AirGapConfig, ChannelCoefficients, ChannelConfig, ChannelGeometry,
    ConfigError, DesignConfig, FluxConditions, FluxResult, MembraneConfig, MembraneParameters,
    ModuleDesign, OperatingState, SegmentResult, StreamState, VaporPermeabilities,
    channel_coefficients, constants, effective_diffusivity, evaluate_segment,
    heat_transfer_coefficient, heat_flux, interfacial_salinity, knudsen_diffusion, mass_flux,
    mass_transfer_coefficient, mass_velocity, membrane_conductivity, molecular_diffusion,
    polarized_salinity, reynolds_number, vapor_permeability,
};

use crate::support::properties::{MoistAirModel, SaltWaterModel};

/// Options for a [`SegmentClosure`] or [`FluxClosure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosureConfig {
    /// Check every input with [`OperatingState::check`] or
    /// [`FluxConditions::check`] before evaluating it.
    ///
    /// Solvers that already keep their iterates in the physical domain can
    /// turn this off.
    pub validate_state: bool,
}

impl Default for ClosureConfig {
    fn default() -> Self {
        Self {
            validate_state: true,
        }
    }
}

/// Segment closure as a [`Model`] of the operating state.
///
/// # Example
///
/// ```
/// use agmd_models::{
///     models::desalination::agmd::{DesignConfig, OperatingState, SegmentClosure, StreamState},
///     support::properties::{ConstantProperties, ConstantPropertiesParameters},
/// };
/// use twine_core::Model;
/// use uom::{
///     ConstZero,
///     si::{
///         f64::{MassFlux, MassRate, Pressure, Ratio, ThermodynamicTemperature},
///         mass_rate::kilogram_per_second,
///         pressure::pascal,
///         ratio::percent,
///         thermodynamic_temperature::degree_celsius,
///     },
/// };
///
/// let design = DesignConfig::from_toml_str(
///     r"
///     feed = { height = 0.002, width = 0.3, channels = 1, spacer_porosity = 0.85 }
///     coolant = { height = 0.0015, width = 0.3, channels = 1, spacer_porosity = 0.9 }
///     membrane = { porosity = 0.8, tortuosity = 1.5, thickness = 1e-4, pore_diameter = 2e-7, polymer_conductivity = 0.2 }
///     air_gap = { thickness = 0.002 }
///     ",
/// )?
/// .into_design()?;
/// let properties = ConstantProperties::new(ConstantPropertiesParameters::warm_seawater())?;
///
/// let celsius = ThermodynamicTemperature::new::<degree_celsius>;
/// let stream = |t_bulk, t_wall, salinity| StreamState {
///     mass_flow_rate: MassRate::new::<kilogram_per_second>(0.1),
///     bulk_temperature: celsius(t_bulk),
///     wall_temperature: celsius(t_wall),
///     bulk_salinity: Ratio::new::<percent>(salinity),
///     wall_salinity: Ratio::new::<percent>(salinity),
/// };
/// let state = OperatingState {
///     feed: stream(70.0, 64.0, 3.5),
///     coolant: stream(25.0, 30.0, 0.0),
///     membrane_temperature: celsius(62.0),
///     membrane_gap_temperature: celsius(60.0),
///     gap_temperature: celsius(45.0),
///     feed_vapor_pressure: Pressure::new::<pascal>(23_900.0),
///     boundary_vapor_pressure: Pressure::new::<pascal>(4_250.0),
///     vacuum_pressure: Pressure::new::<pascal>(-81_325.0),
/// };
///
/// let closure = SegmentClosure::new(&design, &properties, &properties);
/// let result = closure.call(&state)?;
/// assert!(result.flux.mass_flux > MassFlux::ZERO);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SegmentClosure<'a, Water, Air> {
    design: &'a ModuleDesign,
    water: &'a Water,
    air: &'a Air,
    config: ClosureConfig,
}

impl<'a, Water, Air> SegmentClosure<'a, Water, Air>
where
    Water: SaltWaterModel,
    Air: MoistAirModel,
{
    /// Creates a closure that validates every input state.
    #[must_use]
    pub fn new(design: &'a ModuleDesign, water: &'a Water, air: &'a Air) -> Self {
        Self::with_config(design, water, air, ClosureConfig::default())
    }

    #[must_use]
    pub fn with_config(
        design: &'a ModuleDesign,
        water: &'a Water,
        air: &'a Air,
        config: ClosureConfig,
    ) -> Self {
        Self {
            design,
            water,
            air,
            config,
        }
    }
}

impl<Water, Air> Model for SegmentClosure<'_, Water, Air>
where
    Water: SaltWaterModel,
    Air: MoistAirModel,
{
    type Input = OperatingState;
    type Output = SegmentResult;
    type Error = AgmdError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        if self.config.validate_state {
            input.check()?;
        }
        evaluate_segment(self.design, input, self.water, self.air)
    }
}

/// Trans-membrane mass flux as a [`Model`] of the flux conditions.
#[derive(Debug, Clone, Copy)]
pub struct FluxClosure<'a> {
    membrane: &'a MembraneParameters,
    air_gap: &'a AirGap,
    config: ClosureConfig,
}

impl<'a> FluxClosure<'a> {
    /// Creates a closure that validates every input.
    #[must_use]
    pub fn new(membrane: &'a MembraneParameters, air_gap: &'a AirGap) -> Self {
        Self::with_config(membrane, air_gap, ClosureConfig::default())
    }

    #[must_use]
    pub fn with_config(
        membrane: &'a MembraneParameters,
        air_gap: &'a AirGap,
        config: ClosureConfig,
    ) -> Self {
        Self {
            membrane,
            air_gap,
            config,
        }
    }
}

impl Model for FluxClosure<'_> {
    type Input = FluxConditions;
    type Output = MassFlux;
    type Error = AgmdError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        if self.config.validate_state {
            input.check()?;
        }
        Ok(mass_flux(self.membrane, self.air_gap, input))
    }
}
