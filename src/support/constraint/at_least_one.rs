use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value is greater than or equal to one.
///
/// Tortuosity is the ratio of the mean diffusion path through the pores to the
/// membrane thickness, so it can never drop below one.
///
/// # Examples
///
/// ```
/// use agmd_models::support::constraint::AtLeastOne;
///
/// assert!(AtLeastOne::new(1.0).is_ok());
/// assert!(AtLeastOne::new(1.5).is_ok());
/// assert!(AtLeastOne::new(0.99).is_err());
/// assert!(AtLeastOne::new(f64::NAN).is_err());
/// ```
///
/// Ratios work the same way:
///
/// ```
/// use agmd_models::support::constraint::AtLeastOne;
/// use uom::si::{f64::Ratio, ratio::ratio};
///
/// assert!(AtLeastOne::new(Ratio::new::<ratio>(1.5)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastOne;

impl AtLeastOne {
    /// Constructs a [`Constrained<T, AtLeastOne>`] if `value ≥ 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] if the value is less than one,
    /// or [`ConstraintError::NotANumber`] if it cannot be compared.
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, AtLeastOne>, ConstraintError> {
        Constrained::<T, AtLeastOne>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn free_space_is_the_lower_bound() {
        assert_eq!(AtLeastOne::new(1.0).map(Constrained::into_inner), Ok(1.0));
    }

    #[test]
    fn rejects_shortcut_paths() {
        assert_eq!(AtLeastOne::new(0.5), Err(ConstraintError::BelowMinimum));
        assert_eq!(AtLeastOne::new(-2.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(AtLeastOne::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn ratio_tortuosity() {
        assert!(AtLeastOne::new(Ratio::new::<ratio>(2.0)).is_ok());
        assert_eq!(
            AtLeastOne::new(Ratio::new::<ratio>(0.9)),
            Err(ConstraintError::BelowMinimum)
        );
    }
}
