//! # AGMD Models
//!
//! Transport-coefficient and flux closure models for air gap membrane
//! distillation (AGMD) desalination modules, built as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given the local state of one discretized module segment (flow rates,
//! temperatures, vapor pressures, salinities) the models compute:
//!
//! - convective heat and mass transfer coefficients in spacer-filled channels,
//! - effective membrane conductivity and membrane + air-gap vapor permeability,
//! - the concentration-polarized salinity at the membrane wall,
//! - the trans-membrane water mass flux and heat flux.
//!
//! The outer solver that marches along the module and iterates these
//! closures to convergence is not part of this crate. It drives the models
//! through [`twine_core::Model`].
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models (constraints, units,
//!   property provider traits).

pub mod models;
pub mod support;
