//! Trans-membrane water and heat flux.
//!
//! The water flux is the combined vapor permeability times the difference in
//! vapor pressure across the membrane and air gap:
//!
//! ```text
//! J = Π(T_m, T_g)·(p_feed − p_boundary)
//! ```
//!
//! The heat flux adds the latent heat carried by the vapor to conduction
//! through the membrane matrix:
//!
//! ```text
//! q = J·Δh_vap + (k_eff / L_mem)·(T_feed,wall − T_membrane,gap)
//! ```

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{
        HeatFluxDensity, MassFlux, Pressure, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature,
    },
    heat_flux_density::watt_per_square_meter,
    length::meter,
    mass_flux::kilogram_per_square_meter_second,
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    units::SpecificEnthalpy,
};

use super::{
    constants::ATM_PRESSURE,
    design::{AirGap, MembraneParameters},
    error::{AgmdError, check, check_temperature},
    membrane::permeabilities_si,
};

/// Temperatures and pressures that drive the water flux.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxConditions {
    /// Mean membrane temperature, used for membrane diffusion.
    pub membrane_temperature: ThermodynamicTemperature,
    /// Mean air gap temperature, used for gap diffusion.
    pub gap_temperature: ThermodynamicTemperature,
    /// Water vapor pressure at the feed side of the membrane.
    pub feed_vapor_pressure: Pressure,
    /// Water vapor pressure at the condensate film boundary.
    pub boundary_vapor_pressure: Pressure,
    /// Gauge pressure of the pores and the gap.
    pub vacuum_pressure: Pressure,
}

impl FluxConditions {
    /// Checks the conditions against their physical domain.
    ///
    /// # Errors
    ///
    /// Returns [`AgmdError::InvalidPhysicalInput`] if a temperature is at or
    /// below absolute zero, a vapor pressure is negative, or the vacuum leaves
    /// no absolute pressure in the gap.
    pub fn check(&self) -> Result<(), AgmdError> {
        check_temperature("membrane_temperature", self.membrane_temperature)?;
        check_temperature("gap_temperature", self.gap_temperature)?;
        check::<_, NonNegative>("feed_vapor_pressure", &self.feed_vapor_pressure)?;
        check::<_, NonNegative>("boundary_vapor_pressure", &self.boundary_vapor_pressure)?;
        check::<_, StrictlyPositive>("vacuum_pressure", &self.gap_pressure())
    }

    /// Returns the absolute pressure in the pores and the gap.
    #[must_use]
    pub fn gap_pressure(&self) -> Pressure {
        Pressure::new::<pascal>(ATM_PRESSURE + self.vacuum_pressure.get::<pascal>())
    }
}

/// Water and heat flux through the membrane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxResult {
    /// Positive from the feed toward the air gap.
    pub mass_flux: MassFlux,
    pub heat_flux: HeatFluxDensity,
}

/// Returns the net water mass flux through the membrane and air gap.
///
/// # Example
///
/// ```
/// use agmd_models::models::desalination::agmd::{AirGap, FluxConditions, MembraneParameters, mass_flux};
/// use uom::si::{
///     f64::{Length, MassFlux, Pressure, Ratio, ThermalConductivity, ThermodynamicTemperature},
///     length::{micrometer, millimeter},
///     mass_flux::kilogram_per_square_meter_second,
///     pressure::pascal,
///     ratio::ratio,
///     thermal_conductivity::watt_per_meter_kelvin,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let membrane = MembraneParameters::new(
///     Ratio::new::<ratio>(0.8),
///     Ratio::new::<ratio>(1.5),
///     Length::new::<micrometer>(100.0),
///     Length::new::<micrometer>(0.2),
///     ThermalConductivity::new::<watt_per_meter_kelvin>(0.2),
/// )?;
/// let air_gap = AirGap::new(Length::new::<millimeter>(2.0))?;
///
/// let conditions = FluxConditions {
///     membrane_temperature: ThermodynamicTemperature::new::<degree_celsius>(60.0),
///     gap_temperature: ThermodynamicTemperature::new::<degree_celsius>(60.0),
///     feed_vapor_pressure: Pressure::new::<pascal>(19_946.0),
///     boundary_vapor_pressure: Pressure::new::<pascal>(7_000.0),
///     vacuum_pressure: Pressure::new::<pascal>(-81_325.0),
/// };
///
/// let flux = mass_flux(&membrane, &air_gap, &conditions);
/// assert!(flux > MassFlux::new::<kilogram_per_square_meter_second>(1e-3));
/// # Ok::<(), agmd_models::models::desalination::agmd::AgmdError>(())
/// ```
#[must_use]
pub fn mass_flux(
    membrane: &MembraneParameters,
    air_gap: &AirGap,
    conditions: &FluxConditions,
) -> MassFlux {
    let [_, _, permeability] = permeabilities_si(
        &membrane.si(),
        air_gap.thickness().get::<meter>(),
        conditions.membrane_temperature.get::<kelvin>(),
        conditions.gap_temperature.get::<kelvin>(),
        conditions.vacuum_pressure.get::<pascal>(),
    );

    MassFlux::new::<kilogram_per_square_meter_second>(mass_flux_si(
        permeability,
        conditions.feed_vapor_pressure.get::<pascal>(),
        conditions.boundary_vapor_pressure.get::<pascal>(),
    ))
}

/// Returns the heat flux through the membrane.
///
/// `temperature_drop` is the feed-side wall temperature minus the gap-side
/// membrane surface temperature.
#[must_use]
pub fn heat_flux(
    mass_flux: MassFlux,
    latent_heat: SpecificEnthalpy,
    membrane_conductivity: ThermalConductivity,
    membrane: &MembraneParameters,
    temperature_drop: TemperatureInterval,
) -> HeatFluxDensity {
    HeatFluxDensity::new::<watt_per_square_meter>(heat_flux_si(
        mass_flux.get::<kilogram_per_square_meter_second>(),
        latent_heat.get::<joule_per_kilogram>(),
        membrane_conductivity.get::<watt_per_meter_kelvin>(),
        membrane.thickness().get::<meter>(),
        temperature_drop.get::<delta_kelvin>(),
    ))
}

fn mass_flux_si(permeability: f64, feed_pressure: f64, boundary_pressure: f64) -> f64 {
    permeability * (feed_pressure - boundary_pressure)
}

fn heat_flux_si(
    mass_flux: f64,
    latent_heat: f64,
    conductivity: f64,
    thickness: f64,
    temperature_drop: f64,
) -> f64 {
    mass_flux * latent_heat + conductivity / thickness * temperature_drop
}
