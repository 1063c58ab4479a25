//! Fluid property provider interface.
//!
//! The transport closures never compute fluid properties themselves. They are
//! handed [`SaltWaterProperties`] and [`MoistAirProperties`] by a provider
//! implementing [`SaltWaterModel`] and [`MoistAirModel`]. Providers must be
//! deterministic and total over their valid domain; outside it they return
//! [`PropertyError::OutOfDomain`].
//!
//! [`ConstantProperties`] is a fixed-value provider for tests and quick
//! estimates where property variation along the module is negligible.

mod constant;
mod error;

pub use constant::{ConstantProperties, ConstantPropertiesError, ConstantPropertiesParameters};
pub use error::PropertyError;

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    f64::{
        DiffusionCoefficient, DynamicViscosity, MassDensity, Pressure, Ratio, ThermalConductivity,
        ThermodynamicTemperature,
    },
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::SpecificEnthalpy,
};

/// Transport properties of salt water at a given temperature and salinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaltWaterProperties {
    pub dyn_viscosity: DynamicViscosity,
    pub thermal_conductivity: ThermalConductivity,
    /// Diffusivity of dissolved salt in water.
    pub mass_diffusivity: DiffusionCoefficient,
    pub prandtl: Ratio,
    pub schmidt: Ratio,
}

impl SaltWaterProperties {
    /// Checks that every property is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidState`] naming the first offending field.
    pub fn check(&self) -> Result<(), PropertyError> {
        let fields = [
            ("dynamic viscosity", self.dyn_viscosity.get::<pascal_second>()),
            (
                "thermal conductivity",
                self.thermal_conductivity.get::<watt_per_meter_kelvin>(),
            ),
            (
                "mass diffusivity",
                self.mass_diffusivity.get::<square_meter_per_second>(),
            ),
            ("Prandtl number", self.prandtl.get::<ratio>()),
            ("Schmidt number", self.schmidt.get::<ratio>()),
        ];
        for (name, value) in fields {
            if let Err(err) = StrictlyPositive::check(&value) {
                return Err(PropertyError::InvalidState {
                    context: format!("salt water {name} = {value}: {err}"),
                });
            }
        }
        Ok(())
    }
}

/// Properties of the moist air filling the membrane pores and the air gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAirProperties {
    pub thermal_conductivity: ThermalConductivity,
}

impl MoistAirProperties {
    /// Checks that the conductivity is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidState`] otherwise.
    pub fn check(&self) -> Result<(), PropertyError> {
        let value = self.thermal_conductivity.get::<watt_per_meter_kelvin>();
        StrictlyPositive::check(&value).map_err(|err| PropertyError::InvalidState {
            context: format!("moist air thermal conductivity = {value}: {err}"),
        })
    }
}

/// A provider of salt-water properties.
pub trait SaltWaterModel {
    /// Returns the transport properties at `temperature` and `salinity` (salt mass fraction).
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the properties cannot be evaluated.
    fn salt_water(
        &self,
        temperature: ThermodynamicTemperature,
        salinity: Ratio,
    ) -> Result<SaltWaterProperties, PropertyError>;

    /// Returns the salt-water density at `temperature` and gauge `pressure`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the density cannot be evaluated.
    fn density(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MassDensity, PropertyError>;

    /// Returns the latent heat of vaporization of water at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the latent heat cannot be evaluated.
    fn latent_heat(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError>;
}

/// A provider of moist-air properties.
pub trait MoistAirModel {
    /// Returns the moist-air properties at `temperature` and absolute `pressure`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the properties cannot be evaluated.
    fn moist_air(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MoistAirProperties, PropertyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> SaltWaterProperties {
        SaltWaterProperties {
            dyn_viscosity: DynamicViscosity::new::<pascal_second>(4.7e-4),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.65),
            mass_diffusivity: DiffusionCoefficient::new::<square_meter_per_second>(2.5e-9),
            prandtl: Ratio::new::<ratio>(2.9),
            schmidt: Ratio::new::<ratio>(190.0),
        }
    }

    #[test]
    fn positive_properties_pass() {
        assert!(props().check().is_ok());
    }

    #[test]
    fn check_names_the_bad_field() {
        let bad = SaltWaterProperties {
            schmidt: Ratio::new::<ratio>(0.0),
            ..props()
        };
        let PropertyError::InvalidState { context } = bad.check().unwrap_err() else {
            panic!("expected an invalid state error");
        };
        assert!(context.contains("Schmidt"));
    }

    #[test]
    fn nan_air_conductivity_fails() {
        let air = MoistAirProperties {
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(f64::NAN),
        };
        assert!(air.check().is_err());
    }
}
