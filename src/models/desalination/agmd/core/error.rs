use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{
    constraint::{Constrained, Constraint, ConstraintError, StrictlyPositive},
    properties::PropertyError,
};

/// Errors raised at the boundary of the AGMD closure models.
///
/// The closures themselves never fail. These errors come from the validation
/// layer that guards them and from the fluid property provider.
#[derive(Debug, Error)]
pub enum AgmdError {
    /// An input lies outside its physical domain.
    #[error("invalid physical input `{field}`: {source}")]
    InvalidPhysicalInput {
        /// Name of the offending input, e.g. `membrane.porosity`.
        field: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// The fluid property provider failed.
    #[error("property evaluation failed: {context}")]
    Property {
        /// Which property set was being evaluated.
        context: String,

        #[source]
        source: PropertyError,
    },
}

impl AgmdError {
    pub(crate) fn invalid(field: &'static str, source: ConstraintError) -> Self {
        log::warn!("rejected {field}: {source}");
        Self::InvalidPhysicalInput { field, source }
    }

    pub(crate) fn property(context: impl Into<String>, source: PropertyError) -> Self {
        Self::Property {
            context: context.into(),
            source,
        }
    }
}

/// Validates `value` against constraint `C`, naming `field` on failure.
pub(crate) fn checked<T, C: Constraint<T>>(
    field: &'static str,
    value: T,
) -> Result<Constrained<T, C>, AgmdError> {
    Constrained::new(value).map_err(|err| AgmdError::invalid(field, err))
}

/// Checks `value` against constraint `C` without keeping the wrapper.
pub(crate) fn check<T, C: Constraint<T>>(field: &'static str, value: &T) -> Result<(), AgmdError> {
    C::check(value).map_err(|err| AgmdError::invalid(field, err))
}

/// Checks that `temperature` lies above absolute zero.
pub(crate) fn check_temperature(
    field: &'static str,
    temperature: ThermodynamicTemperature,
) -> Result<(), AgmdError> {
    check::<_, StrictlyPositive>(field, &temperature.get::<kelvin>())
}
