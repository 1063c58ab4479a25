use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// Vapor partial pressures fall in this class: a dry air gap has zero water
/// vapor pressure, but a negative one is meaningless.
///
/// # Examples
///
/// ```
/// use agmd_models::support::constraint::NonNegative;
/// use uom::si::{f64::Pressure, pressure::pascal};
///
/// assert!(NonNegative::new(Pressure::new::<pascal>(0.0)).is_ok());
/// assert!(NonNegative::new(Pressure::new::<pascal>(7_000.0)).is_ok());
/// assert!(NonNegative::new(Pressure::new::<pascal>(-1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is zero or greater.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_allowed() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(-0.0).is_ok());
    }

    #[test]
    fn negative_and_nan_are_rejected() {
        assert_eq!(NonNegative::new(-1e-9), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
