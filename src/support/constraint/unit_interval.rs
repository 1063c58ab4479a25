//! Unit-interval bounds for porosities and mass fractions.
//!
//! Three markers cover the combinations of open and closed endpoints used by
//! the model inputs:
//!
//! | Marker                    | Interval   | Used for                      |
//! |---------------------------|------------|-------------------------------|
//! | [`UnitIntervalOpen`]      | `(0, 1)`   | Membrane porosity             |
//! | [`UnitIntervalLowerOpen`] | `(0, 1]`   | Channel spacer porosity       |
//! | [`UnitIntervalUpperOpen`] | `[0, 1)`   | Salinity (salt mass fraction) |
//!
//! [`UnitBounds`] is implemented for `f64` and `uom::si::f64::Ratio`. It also
//! supplies the bound of [`AtLeastOne`](super::AtLeastOne).

use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used with the unit-interval markers.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Compares a value against both unit bounds.
///
/// Returns `None` if either comparison is undefined (e.g., NaN).
fn bounds<T: UnitBounds>(value: &T) -> Option<(Ordering, Ordering)> {
    Some((value.partial_cmp(&T::zero())?, value.partial_cmp(&T::one())?))
}

macro_rules! unit_interval_marker {
    (
        $(#[$doc:meta])*
        $name:ident,
        lower_inclusive: $lower:literal,
        upper_inclusive: $upper:literal
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name;

        impl $name {
            /// Constructs a constrained value if it lies within this interval.
            ///
            /// # Errors
            ///
            /// - [`ConstraintError::BelowMinimum`] if the value is below the lower bound.
            /// - [`ConstraintError::AboveMaximum`] if the value is above the upper bound.
            /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
            pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, $name>, ConstraintError> {
                Constrained::<T, $name>::new(value)
            }
        }

        impl<T: UnitBounds> Constraint<T> for $name {
            fn check(value: &T) -> Result<(), ConstraintError> {
                let Some((to_zero, to_one)) = bounds(value) else {
                    return Err(ConstraintError::NotANumber);
                };
                match (to_zero, to_one) {
                    (Ordering::Less, _) => Err(ConstraintError::BelowMinimum),
                    (Ordering::Equal, _) if !$lower => Err(ConstraintError::BelowMinimum),
                    (_, Ordering::Greater) => Err(ConstraintError::AboveMaximum),
                    (_, Ordering::Equal) if !$upper => Err(ConstraintError::AboveMaximum),
                    _ => Ok(()),
                }
            }
        }
    };
}

unit_interval_marker!(
    /// Marker type enforcing the open unit interval: `0 < x < 1`.
    ///
    /// A membrane with zero porosity is a solid film and one with unit porosity
    /// has no polymer matrix, so membrane porosity lives here.
    ///
    /// ```
    /// use agmd_models::support::constraint::UnitIntervalOpen;
    /// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
    ///
    /// let porosity = UnitIntervalOpen::new(Ratio::new::<percent>(80.0)).unwrap();
    /// assert!((porosity.as_ref().get::<ratio>() - 0.8).abs() < 1e-12);
    ///
    /// assert!(UnitIntervalOpen::new(0.0).is_err());
    /// assert!(UnitIntervalOpen::new(1.0).is_err());
    /// ```
    UnitIntervalOpen,
    lower_inclusive: false,
    upper_inclusive: false
);

unit_interval_marker!(
    /// Marker type enforcing the lower-open unit interval: `0 < x ≤ 1`.
    ///
    /// An empty channel (no spacer) has a spacer porosity of exactly one.
    ///
    /// ```
    /// use agmd_models::support::constraint::UnitIntervalLowerOpen;
    ///
    /// assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
    /// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
    /// ```
    UnitIntervalLowerOpen,
    lower_inclusive: false,
    upper_inclusive: true
);

unit_interval_marker!(
    /// Marker type enforcing the upper-open unit interval: `0 ≤ x < 1`.
    ///
    /// Pure water has zero salinity; a mass fraction of one would be a dry salt.
    ///
    /// ```
    /// use agmd_models::support::constraint::UnitIntervalUpperOpen;
    ///
    /// assert!(UnitIntervalUpperOpen::new(0.0).is_ok());
    /// assert!(UnitIntervalUpperOpen::new(0.035).is_ok());
    /// assert!(UnitIntervalUpperOpen::new(1.0).is_err());
    /// ```
    UnitIntervalUpperOpen,
    lower_inclusive: true,
    upper_inclusive: false
);

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::ratio::percent;

    #[test]
    fn endpoints_follow_each_marker() {
        assert_eq!(UnitIntervalOpen::new(0.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(UnitIntervalOpen::new(1.0), Err(ConstraintError::AboveMaximum));

        assert_eq!(
            UnitIntervalLowerOpen::new(0.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert!(UnitIntervalLowerOpen::new(1.0).is_ok());

        assert!(UnitIntervalUpperOpen::new(0.0).is_ok());
        assert_eq!(
            UnitIntervalUpperOpen::new(1.0),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn outside_values_are_rejected() {
        assert_eq!(UnitIntervalOpen::new(-0.1), Err(ConstraintError::BelowMinimum));
        assert_eq!(UnitIntervalOpen::new(1.1), Err(ConstraintError::AboveMaximum));
        assert_eq!(
            UnitIntervalUpperOpen::new(-0.01),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalLowerOpen::new(2.0),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn nan_is_not_a_number() {
        assert_eq!(
            UnitIntervalUpperOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
        assert_eq!(
            UnitIntervalOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn ratios_in_percent() {
        let seawater = Ratio::new::<percent>(3.5);
        assert!(UnitIntervalUpperOpen::new(seawater).is_ok());

        let spacer = Ratio::new::<percent>(100.0);
        assert!(UnitIntervalLowerOpen::new(spacer).is_ok());
        assert!(UnitIntervalOpen::new(spacer).is_err());
    }
}
