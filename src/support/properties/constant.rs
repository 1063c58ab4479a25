//! Fixed-value property provider.
//!
//! `ConstantProperties` returns the same salt-water and moist-air properties
//! for every state inside its domain. Prandtl and Schmidt numbers are derived
//! from the configured values so the set stays self-consistent:
//!
//! - `Pr = μ·cp / k`
//! - `Sc = μ / (ρ·D)`
//!
//! # When To Use
//!
//! Use it for tests and for short modules where the feed and coolant
//! temperatures barely change. For full-length modules plug in a provider
//! backed by real salt-water and humid-air correlations.
//!
//! # Domain
//!
//! Temperatures must lie in the liquid-water range `[0 °C, 100 °C]` and
//! salinities in `[0, 1)`. Anything else is [`PropertyError::OutOfDomain`].

use thiserror::Error;
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    f64::{
        DiffusionCoefficient, DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive, UnitIntervalUpperOpen},
    units::SpecificEnthalpy,
};

use super::{MoistAirModel, MoistAirProperties, PropertyError, SaltWaterModel, SaltWaterProperties};

const MIN_LIQUID_CELSIUS: f64 = 0.0;
const MAX_LIQUID_CELSIUS: f64 = 100.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstantPropertiesError {
    #[error("invalid dynamic viscosity: {0:?}")]
    DynViscosity(DynamicViscosity),
    #[error("invalid water thermal conductivity: {0:?}")]
    WaterConductivity(ThermalConductivity),
    #[error("invalid mass diffusivity: {0:?}")]
    MassDiffusivity(DiffusionCoefficient),
    #[error("invalid cp: {0:?}")]
    Cp(SpecificHeatCapacity),
    #[error("invalid density: {0:?}")]
    Density(MassDensity),
    #[error("invalid latent heat: {0:?}")]
    LatentHeat(SpecificEnthalpy),
    #[error("invalid air thermal conductivity: {0:?}")]
    AirConductivity(ThermalConductivity),
}

/// Values returned by a [`ConstantProperties`] provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantPropertiesParameters {
    pub dyn_viscosity: DynamicViscosity,
    pub water_conductivity: ThermalConductivity,
    pub mass_diffusivity: DiffusionCoefficient,
    pub cp: SpecificHeatCapacity,
    pub density: MassDensity,
    pub latent_heat: SpecificEnthalpy,
    pub air_conductivity: ThermalConductivity,
}

impl ConstantPropertiesParameters {
    /// Returns seawater near 60 °C with pore air at the same temperature.
    #[must_use]
    pub fn warm_seawater() -> Self {
        Self {
            dyn_viscosity: DynamicViscosity::new::<pascal_second>(4.8e-4),
            water_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.64),
            mass_diffusivity: DiffusionCoefficient::new::<square_meter_per_second>(2.5e-9),
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(3_990.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1_008.0),
            latent_heat: SpecificEnthalpy::new::<kilojoule_per_kilogram>(2_358.0),
            air_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.028),
        }
    }
}

/// Property provider returning fixed values inside the liquid-water domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantProperties {
    water: SaltWaterProperties,
    density: MassDensity,
    latent_heat: SpecificEnthalpy,
    air: MoistAirProperties,
}

impl ConstantProperties {
    /// Creates a provider from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConstantPropertiesError`] if any parameter is not strictly positive.
    pub fn new(parameters: ConstantPropertiesParameters) -> Result<Self, ConstantPropertiesError> {
        let ConstantPropertiesParameters {
            dyn_viscosity,
            water_conductivity,
            mass_diffusivity,
            cp,
            density,
            latent_heat,
            air_conductivity,
        } = parameters;

        if !is_positive(&dyn_viscosity) {
            return Err(ConstantPropertiesError::DynViscosity(dyn_viscosity));
        }
        if !is_positive(&water_conductivity) {
            return Err(ConstantPropertiesError::WaterConductivity(water_conductivity));
        }
        if !is_positive(&mass_diffusivity) {
            return Err(ConstantPropertiesError::MassDiffusivity(mass_diffusivity));
        }
        if !is_positive(&cp) {
            return Err(ConstantPropertiesError::Cp(cp));
        }
        if !is_positive(&density) {
            return Err(ConstantPropertiesError::Density(density));
        }
        if !is_positive(&latent_heat) {
            return Err(ConstantPropertiesError::LatentHeat(latent_heat));
        }
        if !is_positive(&air_conductivity) {
            return Err(ConstantPropertiesError::AirConductivity(air_conductivity));
        }

        let prandtl: Ratio = dyn_viscosity * cp / water_conductivity;
        let schmidt: Ratio = dyn_viscosity / (density * mass_diffusivity);

        Ok(Self {
            water: SaltWaterProperties {
                dyn_viscosity,
                thermal_conductivity: water_conductivity,
                mass_diffusivity,
                prandtl,
                schmidt,
            },
            density,
            latent_heat,
            air: MoistAirProperties {
                thermal_conductivity: air_conductivity,
            },
        })
    }

    fn check_temperature(temperature: ThermodynamicTemperature) -> Result<(), PropertyError> {
        let celsius = temperature.get::<degree_celsius>();
        if (MIN_LIQUID_CELSIUS..=MAX_LIQUID_CELSIUS).contains(&celsius) {
            Ok(())
        } else {
            Err(PropertyError::OutOfDomain {
                context: format!(
                    "temperature {celsius} °C outside liquid range \
                     [{MIN_LIQUID_CELSIUS}, {MAX_LIQUID_CELSIUS}] °C"
                ),
            })
        }
    }
}

fn is_positive<T>(value: &T) -> bool
where
    StrictlyPositive: Constraint<T>,
{
    StrictlyPositive::check(value).is_ok()
}

impl SaltWaterModel for ConstantProperties {
    fn salt_water(
        &self,
        temperature: ThermodynamicTemperature,
        salinity: Ratio,
    ) -> Result<SaltWaterProperties, PropertyError> {
        Self::check_temperature(temperature)?;
        UnitIntervalUpperOpen::check(&salinity).map_err(|err| PropertyError::OutOfDomain {
            context: format!("salinity {}: {err}", salinity.get::<ratio>()),
        })?;
        Ok(self.water)
    }

    fn density(
        &self,
        temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Result<MassDensity, PropertyError> {
        Self::check_temperature(temperature)?;
        Ok(self.density)
    }

    fn latent_heat(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        Self::check_temperature(temperature)?;
        Ok(self.latent_heat)
    }
}

impl MoistAirModel for ConstantProperties {
    fn moist_air(
        &self,
        temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Result<MoistAirProperties, PropertyError> {
        Self::check_temperature(temperature)?;
        Ok(self.air)
    }
}
