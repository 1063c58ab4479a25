use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, N3, P1, P2, Z0},
};

/// Diffusivity–pressure product, Pa·m²/s (kg·m/s³) in SI.
pub type DiffusivityPressure = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
