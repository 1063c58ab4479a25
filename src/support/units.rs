//! Extensions to [`uom`].
//!
//! Every public physical quantity in this crate is a [`uom`] quantity. Mass
//! fluxes, diffusion coefficients and vapor permeabilities use the named
//! [`uom`] quantities (`MassFlux`, `DiffusionCoefficient` and
//! `InverseVelocity`, since kg/(m²·s·Pa) reduces to s/m). Two dimensions the
//! transport model needs are not named by [`uom`] and are defined here:
//!
//! - [`DiffusivityPressure`]: Pa·m²/s, the product `D·p` returned by the
//!   molecular diffusion correlation
//! - [`SpecificEnthalpy`]: J/kg, the latent heat of vaporization
//!
//! They are built by arithmetic on named quantities, or with the units of a
//! named quantity of the same dimension:
//!
//! ```
//! use agmd_models::support::units::{DiffusivityPressure, SpecificEnthalpy};
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     diffusion_coefficient::square_meter_per_second,
//!     f64::{DiffusionCoefficient, Pressure},
//!     pressure::pascal,
//! };
//!
//! let latent_heat = SpecificEnthalpy::new::<kilojoule_per_kilogram>(2_358.0);
//! let product: DiffusivityPressure =
//!     DiffusionCoefficient::new::<square_meter_per_second>(2.5e-5) * Pressure::new::<pascal>(1e5);
//! # let _ = (latent_heat, product);
//! ```
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts two absolute temperatures and
//! returns a [`TemperatureInterval`](uom::si::f64::TemperatureInterval).

mod quantities;
mod temperature_difference;

pub use quantities::{DiffusivityPressure, SpecificEnthalpy};
pub use temperature_difference::TemperatureDifference;
