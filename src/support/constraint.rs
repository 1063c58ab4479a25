//! Type-level numeric constraints for physical model inputs.
//!
//! The transport closures in this crate are branch-free arithmetic: a negative
//! flow rate or a porosity of 1.5 silently becomes NaN or a flux
//! with the wrong sign. The types in this module move those checks to the
//! boundary. A value wrapped in [`Constrained<T, C>`] has been checked once
//! at construction and carries no further runtime cost.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater (vapor partial pressures)
//! - [`StrictlyPositive`]: Greater than zero (lengths, flow rates, conductivities)
//! - [`AtLeastOne`]: One or greater (tortuosity)
//! - [`UnitIntervalOpen`]: Open unit interval `0 < x < 1` (membrane porosity)
//! - [`UnitIntervalLowerOpen`]: Lower-open unit interval `0 < x ≤ 1` (spacer porosity)
//! - [`UnitIntervalUpperOpen`]: Upper-open unit interval `0 ≤ x < 1` (salinity)
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper and
//! provides an associated `new()` shortcut (e.g., `StrictlyPositive::new(5.0)`).
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for a zero-sized marker type to add a new bound.

mod at_least_one;
mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use at_least_one::AtLeastOne;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{
    UnitBounds, UnitIntervalLowerOpen, UnitIntervalOpen, UnitIntervalUpperOpen,
};

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use agmd_models::support::constraint::{Constrained, UnitIntervalOpen};
///
/// let porosity = Constrained::<f64, UnitIntervalOpen>::new(0.8).unwrap();
/// assert_eq!(porosity.into_inner(), 0.8);
///
/// assert!(Constrained::<f64, UnitIntervalOpen>::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
