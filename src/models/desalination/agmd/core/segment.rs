//! Closure of one discretized module segment.
//!
//! Given the iterated [`OperatingState`] of a segment, [`evaluate_segment`]
//! evaluates every transport coefficient and flux the outer solver needs to
//! update it:
//!
//! 1. Salt-water properties at the bulk and wall of both channels.
//! 2. Feed heat and mass transfer coefficients, coolant heat transfer coefficient.
//! 3. Pore-air properties at the membrane temperature and gap pressure, and the
//!    effective membrane conductivity.
//! 4. Combined vapor permeability and water mass flux.
//! 5. Feed salinity at the membrane surface.
//! 6. Heat flux through the membrane.

use uom::si::{
    f64::{HeatTransfer, MassFlux, Ratio, ThermalConductivity, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    mass_flux::kilogram_per_square_meter_second,
    ratio::ratio,
};

use crate::support::{
    properties::{MoistAirModel, MoistAirProperties, SaltWaterModel, SaltWaterProperties},
    units::TemperatureDifference,
};

use super::{
    channel::{ChannelCoefficients, channel_coefficients, heat_transfer_coefficient},
    design::ModuleDesign,
    error::AgmdError,
    flux::{FluxResult, heat_flux},
    membrane::{VaporPermeabilities, membrane_conductivity, vapor_permeability},
    polarization::interfacial_salinity,
    state::OperatingState,
};

/// Transport coefficients and fluxes of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentResult {
    /// Feed heat and salt mass transfer coefficients.
    pub feed: ChannelCoefficients,
    pub coolant_heat_transfer: HeatTransfer,
    pub membrane_conductivity: ThermalConductivity,
    pub permeability: VaporPermeabilities,
    pub flux: FluxResult,
    /// Feed salinity at the membrane surface implied by the mass flux.
    pub interfacial_salinity: Ratio,
}

/// Evaluates the transport closure of one segment.
///
/// The state is used as given. Call [`OperatingState::check`] first if it
/// may lie outside its physical domain.
///
/// # Errors
///
/// Returns [`AgmdError::Property`] if a property provider fails or returns
/// non-physical properties.
pub fn evaluate_segment(
    design: &ModuleDesign,
    state: &OperatingState,
    water: &impl SaltWaterModel,
    air: &impl MoistAirModel,
) -> Result<SegmentResult, AgmdError> {
    let feed_bulk = salt_water(
        water,
        "feed bulk",
        state.feed.bulk_temperature,
        state.feed.bulk_salinity,
    )?;
    let feed_wall = salt_water(
        water,
        "feed wall",
        state.feed.wall_temperature,
        state.feed.wall_salinity,
    )?;
    let coolant_bulk = salt_water(
        water,
        "coolant bulk",
        state.coolant.bulk_temperature,
        state.coolant.bulk_salinity,
    )?;
    let coolant_wall = salt_water(
        water,
        "coolant wall",
        state.coolant.wall_temperature,
        state.coolant.wall_salinity,
    )?;

    let feed = channel_coefficients(
        &feed_bulk,
        &feed_wall,
        state.feed.mass_flow_rate,
        &design.feed,
    );
    let coolant_heat_transfer = heat_transfer_coefficient(
        &coolant_bulk,
        &coolant_wall,
        state.coolant.mass_flow_rate,
        &design.coolant,
    );

    let pore_air = moist_air(air, state)?;
    let membrane = &design.membrane;
    let conductivity =
        membrane_conductivity(&pore_air, membrane.polymer_conductivity(), membrane.porosity());

    let permeability = vapor_permeability(
        membrane,
        &design.air_gap,
        state.membrane_temperature,
        state.gap_temperature,
        state.vacuum_pressure,
    );
    let mass_flux: MassFlux =
        permeability.combined * (state.feed_vapor_pressure - state.boundary_vapor_pressure);

    let interfacial_salinity = interfacial_salinity(
        water,
        feed.mass_transfer,
        state.feed.bulk_temperature,
        state.feed.bulk_salinity,
        mass_flux,
    )?;

    let latent_heat = water
        .latent_heat(state.membrane_temperature)
        .map_err(|err| AgmdError::property("latent heat at membrane", err))?;
    let heat_flux = heat_flux(
        mass_flux,
        latent_heat,
        conductivity,
        membrane,
        state
            .feed
            .wall_temperature
            .minus(state.membrane_gap_temperature),
    );

    log::trace!(
        "segment closure: J = {:e} kg/m²s, q = {:e} W/m², S_w = {:e}",
        mass_flux.get::<kilogram_per_square_meter_second>(),
        heat_flux.get::<watt_per_square_meter>(),
        interfacial_salinity.get::<ratio>(),
    );

    Ok(SegmentResult {
        feed,
        coolant_heat_transfer,
        membrane_conductivity: conductivity,
        permeability,
        flux: FluxResult {
            mass_flux,
            heat_flux,
        },
        interfacial_salinity,
    })
}

fn salt_water(
    water: &impl SaltWaterModel,
    context: &'static str,
    temperature: ThermodynamicTemperature,
    salinity: Ratio,
) -> Result<SaltWaterProperties, AgmdError> {
    let properties = water
        .salt_water(temperature, salinity)
        .map_err(|err| AgmdError::property(context, err))?;
    properties
        .check()
        .map_err(|err| AgmdError::property(context, err))?;
    Ok(properties)
}

fn moist_air(
    air: &impl MoistAirModel,
    state: &OperatingState,
) -> Result<MoistAirProperties, AgmdError> {
    let context = "pore air";
    let properties = air
        .moist_air(state.membrane_temperature, state.gap_pressure())
        .map_err(|err| AgmdError::property(context, err))?;
    properties
        .check()
        .map_err(|err| AgmdError::property(context, err))?;
    Ok(properties)
}
