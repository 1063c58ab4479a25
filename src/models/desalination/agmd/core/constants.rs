//! Physical constants and correlation coefficients of the AGMD closure.
//!
//! All values are in SI base units. They must not be altered: results are
//! expected to match the published model to the last bit.

/// Universal gas constant, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;

/// Molar mass of water, kg/mol.
pub const WATER_MOLAR_MASS: f64 = 0.018;

/// Standard atmospheric pressure, Pa.
///
/// Vacuum pressures are gauge values relative to this.
pub const ATM_PRESSURE: f64 = 101_325.0;

/// Density of solid sodium chloride, kg/m³.
pub const NACL_DENSITY: f64 = 2160.0;

/// Molar mass of sodium chloride, kg/mol.
pub const NACL_MOLAR_MASS: f64 = 58.44e-3;

/// Prefactor of the water-vapor/air molecular diffusion correlation, Pa·m²/(s·K^2.334).
pub const MOLECULAR_DIFFUSION_PREFACTOR: f64 = 4.46e-6;

/// Temperature exponent of the molecular diffusion correlation.
pub const MOLECULAR_DIFFUSION_EXPONENT: f64 = 2.334;

/// Leading coefficient of the spacer-filled channel Nusselt/Sherwood correlation.
pub const CHANNEL_COEFFICIENT: f64 = 0.22;

/// Reynolds number exponent of the channel correlation.
pub const CHANNEL_REYNOLDS_EXPONENT: f64 = 0.69;

/// Prandtl/Schmidt number exponent of the channel correlation.
pub const CHANNEL_PRANDTL_EXPONENT: f64 = 0.13;

/// Exponent of the bulk-to-wall property correction.
pub const CHANNEL_WALL_EXPONENT: f64 = 0.25;

/// Prefactor of the Maxwell membrane conductivity model.
pub const MAXWELL_PREFACTOR: f64 = 0.93;

/// Conversion factor from molar concentration in mol/m³ to mol/L.
pub(super) const LITERS_PER_CUBIC_METER: f64 = 1000.0;
