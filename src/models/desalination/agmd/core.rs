//! Transport-coefficient and flux closures for AGMD modules.
//!
//! Each submodule is a set of pure functions of its explicit arguments. The
//! typed functions convert their [`uom`] inputs to SI `f64` values once and
//! evaluate the closure in plain floating point, keeping the operation order
//! of the published model.

pub mod constants;

mod channel;
mod config;
mod design;
mod error;
mod flux;
mod membrane;
mod polarization;
mod segment;
mod state;

#[cfg(test)]
mod test_support;

pub use channel::{
    ChannelCoefficients, channel_coefficients, heat_transfer_coefficient,
    mass_transfer_coefficient, mass_velocity, reynolds_number,
};
pub use config::{AirGapConfig, ChannelConfig, ConfigError, DesignConfig, MembraneConfig};
pub use design::{AirGap, ChannelGeometry, MembraneParameters, ModuleDesign};
pub use error::AgmdError;
pub use flux::{FluxConditions, FluxResult, heat_flux, mass_flux};
pub use membrane::{
    VaporPermeabilities, effective_diffusivity, knudsen_diffusion, membrane_conductivity,
    molecular_diffusion, vapor_permeability,
};
pub use polarization::{interfacial_salinity, polarized_salinity};
pub use segment::{SegmentResult, evaluate_segment};
pub use state::{OperatingState, StreamState};
