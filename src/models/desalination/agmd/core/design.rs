//! Validated module design inputs.
//!
//! Geometry and membrane parameters are fixed for a module. They are checked
//! once when constructed and are read-only afterwards, so the closures can
//! consume them without further checks.

use uom::si::{
    f64::{Length, Ratio, ThermalConductivity},
    length::meter,
    ratio::ratio,
};

use crate::support::constraint::{
    AtLeastOne, Constrained, StrictlyPositive, UnitIntervalLowerOpen, UnitIntervalOpen,
};

use super::error::{AgmdError, checked};

/// Cross-section of one side (feed or coolant) of the module.
///
/// The side consists of `channels` identical rectangular channels of the given
/// `height` (the gap between membrane and wall) and `width`, each filled with
/// a mesh spacer of porosity `spacer_porosity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelGeometry {
    height: Constrained<Length, StrictlyPositive>,
    width: Constrained<Length, StrictlyPositive>,
    channels: Constrained<u32, StrictlyPositive>,
    spacer_porosity: Constrained<Ratio, UnitIntervalLowerOpen>,
}

impl ChannelGeometry {
    /// Creates a validated channel geometry.
    ///
    /// # Errors
    ///
    /// Returns [`AgmdError::InvalidPhysicalInput`] if a length or the channel
    /// count is not strictly positive, or if the spacer porosity is outside `(0, 1]`.
    pub fn new(
        height: Length,
        width: Length,
        channels: u32,
        spacer_porosity: Ratio,
    ) -> Result<Self, AgmdError> {
        Ok(Self {
            height: checked("channel.height", height)?,
            width: checked("channel.width", width)?,
            channels: checked("channel.channels", channels)?,
            spacer_porosity: checked("channel.spacer_porosity", spacer_porosity)?,
        })
    }

    #[must_use]
    pub fn height(&self) -> Length {
        *self.height.as_ref()
    }

    #[must_use]
    pub fn width(&self) -> Length {
        *self.width.as_ref()
    }

    #[must_use]
    pub fn channels(&self) -> u32 {
        *self.channels.as_ref()
    }

    #[must_use]
    pub fn spacer_porosity(&self) -> Ratio {
        *self.spacer_porosity.as_ref()
    }

    pub(super) fn si(&self) -> ChannelSi {
        ChannelSi {
            height: self.height().get::<meter>(),
            width: self.width().get::<meter>(),
            channels: f64::from(self.channels()),
            spacer_porosity: self.spacer_porosity().get::<ratio>(),
        }
    }
}

/// Porous hydrophobic membrane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembraneParameters {
    porosity: Constrained<Ratio, UnitIntervalOpen>,
    tortuosity: Constrained<Ratio, AtLeastOne>,
    thickness: Constrained<Length, StrictlyPositive>,
    pore_diameter: Constrained<Length, StrictlyPositive>,
    polymer_conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
}

impl MembraneParameters {
    /// Creates validated membrane parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AgmdError::InvalidPhysicalInput`] if the porosity is outside
    /// `(0, 1)`, the tortuosity is below one, or the thickness, pore diameter,
    /// or polymer conductivity is not strictly positive.
    pub fn new(
        porosity: Ratio,
        tortuosity: Ratio,
        thickness: Length,
        pore_diameter: Length,
        polymer_conductivity: ThermalConductivity,
    ) -> Result<Self, AgmdError> {
        Ok(Self {
            porosity: checked("membrane.porosity", porosity)?,
            tortuosity: checked("membrane.tortuosity", tortuosity)?,
            thickness: checked("membrane.thickness", thickness)?,
            pore_diameter: checked("membrane.pore_diameter", pore_diameter)?,
            polymer_conductivity: checked("membrane.polymer_conductivity", polymer_conductivity)?,
        })
    }

    #[must_use]
    pub fn porosity(&self) -> Ratio {
        *self.porosity.as_ref()
    }

    #[must_use]
    pub fn tortuosity(&self) -> Ratio {
        *self.tortuosity.as_ref()
    }

    #[must_use]
    pub fn thickness(&self) -> Length {
        *self.thickness.as_ref()
    }

    #[must_use]
    pub fn pore_diameter(&self) -> Length {
        *self.pore_diameter.as_ref()
    }

    #[must_use]
    pub fn polymer_conductivity(&self) -> ThermalConductivity {
        *self.polymer_conductivity.as_ref()
    }

    pub(super) fn si(&self) -> MembraneSi {
        MembraneSi {
            porosity: self.porosity().get::<ratio>(),
            tortuosity: self.tortuosity().get::<ratio>(),
            thickness: self.thickness().get::<meter>(),
            pore_diameter: self.pore_diameter().get::<meter>(),
        }
    }
}

/// Stagnant air gap between the membrane and the condensing plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirGap {
    thickness: Constrained<Length, StrictlyPositive>,
}

impl AirGap {
    /// Creates a validated air gap.
    ///
    /// # Errors
    ///
    /// Returns [`AgmdError::InvalidPhysicalInput`] if the thickness is not strictly positive.
    pub fn new(thickness: Length) -> Result<Self, AgmdError> {
        Ok(Self {
            thickness: checked("air_gap.thickness", thickness)?,
        })
    }

    #[must_use]
    pub fn thickness(&self) -> Length {
        *self.thickness.as_ref()
    }
}

/// Complete design of an AGMD module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleDesign {
    /// Hot feed channel.
    pub feed: ChannelGeometry,
    /// Cold coolant channel behind the condensing plate.
    pub coolant: ChannelGeometry,
    pub membrane: MembraneParameters,
    pub air_gap: AirGap,
}

/// Channel geometry as SI `f64` values.
#[derive(Debug, Clone, Copy)]
pub(super) struct ChannelSi {
    pub(super) height: f64,
    pub(super) width: f64,
    pub(super) channels: f64,
    pub(super) spacer_porosity: f64,
}

/// Membrane parameters as SI `f64` values.
#[derive(Debug, Clone, Copy)]
pub(super) struct MembraneSi {
    pub(super) porosity: f64,
    pub(super) tortuosity: f64,
    pub(super) thickness: f64,
    pub(super) pore_diameter: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{length::millimeter, ratio::percent, thermal_conductivity::watt_per_meter_kelvin};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn empty_channel_is_valid() {
        let geometry = ChannelGeometry::new(
            Length::new::<millimeter>(2.0),
            Length::new::<millimeter>(300.0),
            1,
            Ratio::new::<ratio>(1.0),
        );
        assert!(geometry.is_ok());
    }

    #[test]
    fn zero_channels_names_the_field() {
        let err = ChannelGeometry::new(
            Length::new::<millimeter>(2.0),
            Length::new::<millimeter>(300.0),
            0,
            Ratio::new::<percent>(85.0),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AgmdError::InvalidPhysicalInput {
                field: "channel.channels",
                source: ConstraintError::Zero,
            }
        ));
    }

    #[test]
    fn tortuosity_below_one_is_rejected() {
        let err = MembraneParameters::new(
            Ratio::new::<ratio>(0.8),
            Ratio::new::<ratio>(0.9),
            Length::new::<millimeter>(0.1),
            Length::new::<millimeter>(2e-4),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.2),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AgmdError::InvalidPhysicalInput {
                field: "membrane.tortuosity",
                ..
            }
        ));
    }

    #[test]
    fn solid_membrane_is_rejected() {
        let err = MembraneParameters::new(
            Ratio::new::<ratio>(0.0),
            Ratio::new::<ratio>(1.5),
            Length::new::<millimeter>(0.1),
            Length::new::<millimeter>(2e-4),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.2),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AgmdError::InvalidPhysicalInput {
                field: "membrane.porosity",
                source: ConstraintError::BelowMinimum,
            }
        ));
    }

    #[test]
    fn si_values_are_base_units() {
        let gap = AirGap::new(Length::new::<millimeter>(2.0)).unwrap();
        assert!((gap.thickness().get::<meter>() - 2e-3).abs() < 1e-15);
    }
}
