//! Convective transport in spacer-filled channels.
//!
//! Heat and mass transfer coefficients come from the same empirical
//! correlation for rectangular channels with a mesh spacer:
//!
//! ```text
//! G  = ṁ / (N·H·W·ε)
//! Re = G·H / μ
//! Nu = 0.22·Re^0.69·Pr^0.13·(Pr/Pr_w)^0.25      h   = k·Nu / H
//! Sh = 0.22·Re^0.69·Sc^0.13·(Sc/Sc_w)^0.25      k_m = D·Sh / H
//! ```
//!
//! Bulk properties enter everywhere; wall properties only enter the
//! correction ratio, which is exactly one when they match the bulk.

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    f64::{HeatTransfer, MassFlux, MassRate, Ratio, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    mass_flux::kilogram_per_square_meter_second,
    mass_rate::kilogram_per_second,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use crate::support::properties::SaltWaterProperties;

use super::{
    constants::{
        CHANNEL_COEFFICIENT, CHANNEL_PRANDTL_EXPONENT, CHANNEL_REYNOLDS_EXPONENT,
        CHANNEL_WALL_EXPONENT,
    },
    design::{ChannelGeometry, ChannelSi},
};

/// Heat and mass transfer coefficients of one channel side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelCoefficients {
    pub heat_transfer: HeatTransfer,
    pub mass_transfer: Velocity,
}

/// Returns the mass velocity `G`: the mass flow per unit free cross-section.
#[must_use]
pub fn mass_velocity(mass_flow_rate: MassRate, geometry: &ChannelGeometry) -> MassFlux {
    MassFlux::new::<kilogram_per_square_meter_second>(mass_velocity_si(
        mass_flow_rate.get::<kilogram_per_second>(),
        &geometry.si(),
    ))
}

/// Returns the channel Reynolds number based on the bulk viscosity.
#[must_use]
pub fn reynolds_number(
    bulk: &SaltWaterProperties,
    mass_flow_rate: MassRate,
    geometry: &ChannelGeometry,
) -> Ratio {
    let channel = geometry.si();
    Ratio::new::<ratio>(reynolds_si(
        mass_velocity_si(mass_flow_rate.get::<kilogram_per_second>(), &channel),
        channel.height,
        bulk.dyn_viscosity.get::<pascal_second>(),
    ))
}

/// Returns the convective heat transfer coefficient between bulk and wall.
///
/// The mass flow rate must be positive; a zero rate gives a zero coefficient
/// and a negative one gives NaN.
#[must_use]
pub fn heat_transfer_coefficient(
    bulk: &SaltWaterProperties,
    wall: &SaltWaterProperties,
    mass_flow_rate: MassRate,
    geometry: &ChannelGeometry,
) -> HeatTransfer {
    let channel = geometry.si();
    let reynolds = reynolds_si(
        mass_velocity_si(mass_flow_rate.get::<kilogram_per_second>(), &channel),
        channel.height,
        bulk.dyn_viscosity.get::<pascal_second>(),
    );
    let nusselt = correlation_si(
        reynolds,
        bulk.prandtl.get::<ratio>(),
        wall.prandtl.get::<ratio>(),
    );
    HeatTransfer::new::<watt_per_square_meter_kelvin>(
        bulk.thermal_conductivity.get::<watt_per_meter_kelvin>() * nusselt / channel.height,
    )
}

/// Returns the convective salt mass transfer coefficient between bulk and wall.
///
/// The mass flow rate must be positive, as for [`heat_transfer_coefficient`].
#[must_use]
pub fn mass_transfer_coefficient(
    bulk: &SaltWaterProperties,
    wall: &SaltWaterProperties,
    mass_flow_rate: MassRate,
    geometry: &ChannelGeometry,
) -> Velocity {
    let channel = geometry.si();
    let reynolds = reynolds_si(
        mass_velocity_si(mass_flow_rate.get::<kilogram_per_second>(), &channel),
        channel.height,
        bulk.dyn_viscosity.get::<pascal_second>(),
    );
    let sherwood = correlation_si(
        reynolds,
        bulk.schmidt.get::<ratio>(),
        wall.schmidt.get::<ratio>(),
    );
    Velocity::new::<meter_per_second>(
        bulk.mass_diffusivity.get::<square_meter_per_second>() * sherwood / channel.height,
    )
}

/// Returns both coefficients for one channel side.
#[must_use]
pub fn channel_coefficients(
    bulk: &SaltWaterProperties,
    wall: &SaltWaterProperties,
    mass_flow_rate: MassRate,
    geometry: &ChannelGeometry,
) -> ChannelCoefficients {
    ChannelCoefficients {
        heat_transfer: heat_transfer_coefficient(bulk, wall, mass_flow_rate, geometry),
        mass_transfer: mass_transfer_coefficient(bulk, wall, mass_flow_rate, geometry),
    }
}

fn mass_velocity_si(mass_flow_rate: f64, channel: &ChannelSi) -> f64 {
    mass_flow_rate / (channel.channels * channel.height * channel.width * channel.spacer_porosity)
}

fn reynolds_si(mass_velocity: f64, height: f64, dyn_viscosity: f64) -> f64 {
    mass_velocity * height / dyn_viscosity
}

/// Nusselt or Sherwood number, depending on whether Prandtl or Schmidt numbers are passed.
fn correlation_si(reynolds: f64, bulk_number: f64, wall_number: f64) -> f64 {
    let mut number = CHANNEL_COEFFICIENT
        * reynolds.powf(CHANNEL_REYNOLDS_EXPONENT)
        * bulk_number.powf(CHANNEL_PRANDTL_EXPONENT);
    number *= (bulk_number / wall_number).powf(CHANNEL_WALL_EXPONENT);
    number
}
