use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    f64::{
        DiffusionCoefficient, DynamicViscosity, Length, MassRate, Pressure, Ratio,
        ThermalConductivity, ThermodynamicTemperature,
    },
    length::meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    ratio::{percent, ratio},
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::properties::{
    ConstantProperties, ConstantPropertiesParameters, MoistAirProperties, SaltWaterProperties,
};

use super::{
    design::{AirGap, ChannelGeometry, MembraneParameters, ModuleDesign},
    state::{OperatingState, StreamState},
};

/// A 2 mm × 300 mm single feed channel with an 85 % porous spacer.
pub(super) fn feed_channel() -> ChannelGeometry {
    ChannelGeometry::new(
        Length::new::<meter>(0.002),
        Length::new::<meter>(0.3),
        1,
        Ratio::new::<ratio>(0.85),
    )
    .expect("feed channel is valid")
}

/// A 1.5 mm × 300 mm single coolant channel with a 90 % porous spacer.
pub(super) fn coolant_channel() -> ChannelGeometry {
    ChannelGeometry::new(
        Length::new::<meter>(0.0015),
        Length::new::<meter>(0.3),
        1,
        Ratio::new::<ratio>(0.9),
    )
    .expect("coolant channel is valid")
}

/// PTFE-like membrane: 80 % porous, 100 µm thick, 0.2 µm pores.
pub(super) fn membrane() -> MembraneParameters {
    MembraneParameters::new(
        Ratio::new::<ratio>(0.8),
        Ratio::new::<ratio>(1.5),
        Length::new::<meter>(1e-4),
        Length::new::<meter>(0.2e-6),
        ThermalConductivity::new::<watt_per_meter_kelvin>(0.2),
    )
    .expect("membrane is valid")
}

pub(super) fn air_gap() -> AirGap {
    AirGap::new(Length::new::<meter>(2e-3)).expect("air gap is valid")
}

pub(super) fn design() -> ModuleDesign {
    ModuleDesign {
        feed: feed_channel(),
        coolant: coolant_channel(),
        membrane: membrane(),
        air_gap: air_gap(),
    }
}

/// Gauge vacuum giving an absolute pore pressure of 20 kPa.
pub(super) fn vacuum() -> Pressure {
    Pressure::new::<pascal>(-81_325.0)
}

/// Warm seawater with round-number transport properties.
pub(super) fn warm_water() -> SaltWaterProperties {
    SaltWaterProperties {
        dyn_viscosity: DynamicViscosity::new::<pascal_second>(4.8e-4),
        thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.64),
        mass_diffusivity: DiffusionCoefficient::new::<square_meter_per_second>(2.5e-9),
        prandtl: Ratio::new::<ratio>(3.0),
        schmidt: Ratio::new::<ratio>(190.0),
    }
}

pub(super) fn pore_air() -> MoistAirProperties {
    MoistAirProperties {
        thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.028),
    }
}

pub(super) fn provider() -> ConstantProperties {
    ConstantProperties::new(ConstantPropertiesParameters::warm_seawater())
        .expect("warm seawater parameters are valid")
}

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// A plausible mid-module state with 3.5 % feed salinity and fresh coolant.
pub(super) fn operating_state() -> OperatingState {
    OperatingState {
        feed: StreamState {
            mass_flow_rate: MassRate::new::<kilogram_per_second>(0.1),
            bulk_temperature: celsius(70.0),
            wall_temperature: celsius(64.0),
            bulk_salinity: Ratio::new::<percent>(3.5),
            wall_salinity: Ratio::new::<percent>(3.6),
        },
        coolant: StreamState {
            mass_flow_rate: MassRate::new::<kilogram_per_second>(0.1),
            bulk_temperature: celsius(25.0),
            wall_temperature: celsius(30.0),
            bulk_salinity: Ratio::new::<ratio>(0.0),
            wall_salinity: Ratio::new::<ratio>(0.0),
        },
        membrane_temperature: celsius(62.0),
        membrane_gap_temperature: celsius(60.0),
        gap_temperature: celsius(45.0),
        feed_vapor_pressure: Pressure::new::<pascal>(23_900.0),
        boundary_vapor_pressure: Pressure::new::<pascal>(4_250.0),
        vacuum_pressure: vacuum(),
    }
}
