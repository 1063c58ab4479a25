//! Heat conduction and vapor diffusion through the membrane and air gap.
//!
//! # Conductivity
//!
//! The membrane is a polymer matrix with air-filled pores. Its effective
//! conductivity follows Maxwell's two-phase model with the pore air as the
//! continuous phase:
//!
//! ```text
//! β     = (k_p − k_a) / (k_p + 2·k_a)
//! k_eff = 0.93·k_a·(1 + 2β(1−ε)) / (1 − β(1−ε))
//! ```
//!
//! # Vapor permeability
//!
//! Water vapor crosses the pores by molecular diffusion through stagnant air
//! and by Knudsen diffusion along the pore walls. The two regimes combine in
//! series:
//!
//! ```text
//! D_mol = 4.46e-6·(ε/τ)·T^2.334                    [Pa·m²/s]
//! D_kn  = (d/3)·(ε/τ)·√(8RT / (πM))                [m²/s]
//! D_eff = D_mol·D_kn / (D_mol + p·D_kn)            p = P_atm + P_vac
//! Π_mem = M·D_eff / (R·T_m·L_mem)
//! ```
//!
//! The air gap is free space (`ε = τ = 1`) where only molecular diffusion
//! applies: `Π_gap = M·D_mol / (R·T_g·p·L_gap)`. The membrane and gap act as
//! resistances in series: `Π = Π_mem·Π_gap / (Π_mem + Π_gap)`.

use std::f64::consts::PI;

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{
        DiffusionCoefficient, InverseVelocity, Length, Pressure, Ratio, ThermalConductivity,
        ThermodynamicTemperature,
    },
    inverse_velocity::second_per_meter,
    length::meter,
    pressure::pascal,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{properties::MoistAirProperties, units::DiffusivityPressure};

use super::{
    constants::{
        ATM_PRESSURE, GAS_CONSTANT, MAXWELL_PREFACTOR, MOLECULAR_DIFFUSION_EXPONENT,
        MOLECULAR_DIFFUSION_PREFACTOR, WATER_MOLAR_MASS,
    },
    design::{AirGap, MembraneParameters, MembraneSi},
};

/// Vapor permeabilities of the membrane and air gap, alone and in series.
///
/// A permeability is a mass flux per unit vapor-pressure difference,
/// kg/(m²·s·Pa), which reduces to s/m.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporPermeabilities {
    pub membrane: InverseVelocity,
    pub gap: InverseVelocity,
    pub combined: InverseVelocity,
}

/// Returns the effective thermal conductivity of the air-filled membrane.
///
/// `porosity` is meaningful in `[0, 1]`.
#[must_use]
pub fn membrane_conductivity(
    pore_air: &MoistAirProperties,
    polymer_conductivity: ThermalConductivity,
    porosity: Ratio,
) -> ThermalConductivity {
    ThermalConductivity::new::<watt_per_meter_kelvin>(membrane_conductivity_si(
        pore_air.thermal_conductivity.get::<watt_per_meter_kelvin>(),
        polymer_conductivity.get::<watt_per_meter_kelvin>(),
        porosity.get::<ratio>(),
    ))
}

/// Returns the molecular diffusion coefficient of water vapor in air,
/// expressed as the diffusivity–pressure product.
#[must_use]
pub fn molecular_diffusion(
    porosity: Ratio,
    tortuosity: Ratio,
    temperature: ThermodynamicTemperature,
) -> DiffusivityPressure {
    let diffusivity = DiffusionCoefficient::new::<square_meter_per_second>(molecular_diffusion_si(
        porosity.get::<ratio>(),
        tortuosity.get::<ratio>(),
        temperature.get::<kelvin>(),
    ));
    diffusivity * Pressure::new::<pascal>(1.0)
}

/// Returns the Knudsen diffusion coefficient of water vapor in the pores.
#[must_use]
pub fn knudsen_diffusion(
    porosity: Ratio,
    tortuosity: Ratio,
    pore_diameter: Length,
    temperature: ThermodynamicTemperature,
) -> DiffusionCoefficient {
    DiffusionCoefficient::new::<square_meter_per_second>(knudsen_diffusion_si(
        porosity.get::<ratio>(),
        tortuosity.get::<ratio>(),
        pore_diameter.get::<meter>(),
        temperature.get::<kelvin>(),
    ))
}

/// Combines molecular and Knudsen diffusion at the pore pressure `P_atm + vacuum_pressure`.
#[must_use]
pub fn effective_diffusivity(
    molecular: DiffusivityPressure,
    knudsen: DiffusionCoefficient,
    vacuum_pressure: Pressure,
) -> DiffusionCoefficient {
    let pressure = Pressure::new::<pascal>(ATM_PRESSURE) + vacuum_pressure;
    molecular * knudsen / (molecular + pressure * knudsen)
}

/// Returns the layer permeabilities and their series combination.
///
/// `vacuum_pressure` is the gauge pressure applied to the pores and the gap,
/// so `-81 325 Pa` gives an absolute pressure of `20 000 Pa`.
#[must_use]
pub fn vapor_permeability(
    membrane: &MembraneParameters,
    air_gap: &AirGap,
    membrane_temperature: ThermodynamicTemperature,
    gap_temperature: ThermodynamicTemperature,
    vacuum_pressure: Pressure,
) -> VaporPermeabilities {
    let [membrane_si, gap_si, combined_si] = permeabilities_si(
        &membrane.si(),
        air_gap.thickness().get::<meter>(),
        membrane_temperature.get::<kelvin>(),
        gap_temperature.get::<kelvin>(),
        vacuum_pressure.get::<pascal>(),
    );
    VaporPermeabilities {
        membrane: InverseVelocity::new::<second_per_meter>(membrane_si),
        gap: InverseVelocity::new::<second_per_meter>(gap_si),
        combined: InverseVelocity::new::<second_per_meter>(combined_si),
    }
}

fn membrane_conductivity_si(
    air_conductivity: f64,
    polymer_conductivity: f64,
    porosity: f64,
) -> f64 {
    let beta =
        (polymer_conductivity - air_conductivity) / (polymer_conductivity + 2.0 * air_conductivity);

    MAXWELL_PREFACTOR * air_conductivity * (1.0 + 2.0 * beta * (1.0 - porosity))
        / (1.0 - beta * (1.0 - porosity))
}

fn molecular_diffusion_si(porosity: f64, tortuosity: f64, temperature: f64) -> f64 {
    let mut diffusivity = MOLECULAR_DIFFUSION_PREFACTOR * porosity / tortuosity;
    diffusivity *= temperature.powf(MOLECULAR_DIFFUSION_EXPONENT);
    diffusivity
}

fn knudsen_diffusion_si(porosity: f64, tortuosity: f64, pore_diameter: f64, temperature: f64) -> f64 {
    let mut diffusivity = pore_diameter / 3.0;
    diffusivity *= porosity / tortuosity;
    diffusivity *= (8.0 * GAS_CONSTANT * temperature / (PI * WATER_MOLAR_MASS)).sqrt();
    diffusivity
}

fn effective_diffusivity_si(molecular: f64, knudsen: f64, vacuum_pressure: f64) -> f64 {
    molecular * knudsen / (molecular + (ATM_PRESSURE + vacuum_pressure) * knudsen)
}

/// Returns `[membrane, gap, combined]` permeabilities. Temperatures in kelvin.
pub(super) fn permeabilities_si(
    membrane: &MembraneSi,
    gap_thickness: f64,
    membrane_temperature: f64,
    gap_temperature: f64,
    vacuum_pressure: f64,
) -> [f64; 3] {
    let molecular =
        molecular_diffusion_si(membrane.porosity, membrane.tortuosity, membrane_temperature);
    let knudsen = knudsen_diffusion_si(
        membrane.porosity,
        membrane.tortuosity,
        membrane.pore_diameter,
        membrane_temperature,
    );
    let effective = effective_diffusivity_si(molecular, knudsen, vacuum_pressure);

    let membrane_permeability = WATER_MOLAR_MASS * effective
        / (GAS_CONSTANT * membrane_temperature * membrane.thickness);

    let gap_molecular = molecular_diffusion_si(1.0, 1.0, gap_temperature);
    let gap_permeability = WATER_MOLAR_MASS * gap_molecular
        / (GAS_CONSTANT * gap_temperature * (ATM_PRESSURE + vacuum_pressure) * gap_thickness);

    let combined = membrane_permeability * gap_permeability
        / (membrane_permeability + gap_permeability);

    [membrane_permeability, gap_permeability, combined]
}
