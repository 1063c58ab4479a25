//! Concentration polarization at the feed side of the membrane.
//!
//! Water leaves the feed through the membrane and the salt stays behind, so
//! the salt concentration at the membrane wall rises above the bulk value.
//! Film theory gives the wall concentration as
//!
//! ```text
//! c_w = c_b·exp(J / (ρ·k_m))
//! ```
//!
//! where `J` is the water mass flux (positive from feed toward the membrane)
//! and `k_m` the channel mass transfer coefficient. Salinities are mass
//! fractions, so they are converted to molarity with an ideal mixing rule of
//! water (density `ρ`) and solid NaCl, and back again after polarization:
//!
//! ```text
//! c = S / (M·((1 − S)/ρ + S/ρ_NaCl))
//! S = M·ρ_NaCl·c / (ρ·ρ_NaCl + M·c·(ρ_NaCl − ρ))
//! ```
//!
//! The second relation is the exact inverse of the first, so a zero flux
//! returns the bulk salinity.

use uom::{
    ConstZero,
    si::{
        f64::{MassDensity, MassFlux, Pressure, Ratio, ThermodynamicTemperature, Velocity},
        mass_density::kilogram_per_cubic_meter,
        mass_flux::kilogram_per_square_meter_second,
        ratio::ratio,
        velocity::meter_per_second,
    },
};

use crate::support::properties::SaltWaterModel;

use super::{
    constants::{LITERS_PER_CUBIC_METER, NACL_DENSITY, NACL_MOLAR_MASS},
    error::AgmdError,
};

/// Returns the wall salinity given the salt-water `density`.
///
/// A positive `mass_flux` raises the salinity at the wall, a negative one
/// dilutes it, and zero leaves it unchanged.
#[must_use]
pub fn polarized_salinity(
    mass_transfer_coefficient: Velocity,
    density: MassDensity,
    salinity: Ratio,
    mass_flux: MassFlux,
) -> Ratio {
    Ratio::new::<ratio>(polarized_salinity_si(
        mass_transfer_coefficient.get::<meter_per_second>(),
        density.get::<kilogram_per_cubic_meter>(),
        salinity.get::<ratio>(),
        mass_flux.get::<kilogram_per_square_meter_second>(),
    ))
}

/// Returns the wall salinity, evaluating the density at `temperature` with `water`.
///
/// The density is taken at zero gauge pressure.
///
/// # Errors
///
/// Returns [`AgmdError::Property`] if the density cannot be evaluated.
pub fn interfacial_salinity(
    water: &impl SaltWaterModel,
    mass_transfer_coefficient: Velocity,
    temperature: ThermodynamicTemperature,
    salinity: Ratio,
    mass_flux: MassFlux,
) -> Result<Ratio, AgmdError> {
    let density = water
        .density(temperature, Pressure::ZERO)
        .map_err(|err| AgmdError::property("bulk feed density", err))?;

    Ok(polarized_salinity(
        mass_transfer_coefficient,
        density,
        salinity,
        mass_flux,
    ))
}

fn polarized_salinity_si(
    mass_transfer_coefficient: f64,
    density: f64,
    salinity: f64,
    mass_flux: f64,
) -> f64 {
    let mut molarity =
        (1.0 / NACL_MOLAR_MASS) * salinity / ((1.0 - salinity) / density + salinity / NACL_DENSITY);
    molarity /= LITERS_PER_CUBIC_METER;

    let concentration = molarity * (mass_flux / (density * mass_transfer_coefficient)).exp();

    let concentration = LITERS_PER_CUBIC_METER * concentration;
    NACL_MOLAR_MASS * NACL_DENSITY * concentration
        / (density * NACL_DENSITY + NACL_MOLAR_MASS * concentration * (NACL_DENSITY - density))
}
