use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Most geometric and material inputs of the transport model carry this bound:
/// channel heights, membrane thickness, pore diameter, polymer conductivity,
/// and mass flow rates (a zero flow rate gives a zero Reynolds number).
///
/// # Examples
///
/// ```
/// use agmd_models::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Length, length::micrometer};
///
/// let pore = StrictlyPositive::new(Length::new::<micrometer>(0.2)).unwrap();
/// assert!((pore.as_ref().get::<micrometer>() - 0.2).abs() < 1e-12);
///
/// assert!(StrictlyPositive::new(0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, MassRate},
        length::millimeter,
        mass_rate::kilogram_per_second,
    };

    #[test]
    fn channel_counts() {
        assert!(StrictlyPositive::new(3_u32).is_ok());
        assert_eq!(StrictlyPositive::new(0_u32), Err(ConstraintError::Zero));
    }

    #[test]
    fn flow_rates() {
        let m_dot = MassRate::new::<kilogram_per_second>(0.25);
        assert!(StrictlyPositive::new(m_dot).is_ok());

        let stagnant = MassRate::new::<kilogram_per_second>(0.0);
        assert_eq!(StrictlyPositive::new(stagnant), Err(ConstraintError::Zero));

        let reversed = MassRate::new::<kilogram_per_second>(-0.1);
        assert_eq!(
            StrictlyPositive::new(reversed),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn nan_lengths_are_rejected() {
        let height = Length::new::<millimeter>(f64::NAN);
        assert_eq!(
            StrictlyPositive::new(height),
            Err(ConstraintError::NotANumber)
        );
    }
}
