//! Local operating state of one module segment.

use uom::si::f64::{MassRate, Pressure, Ratio, ThermodynamicTemperature};

use crate::support::constraint::{StrictlyPositive, UnitIntervalUpperOpen};

use super::{
    error::{AgmdError, check, check_temperature},
    flux::FluxConditions,
};

/// State of the water flowing through one channel side of a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamState {
    pub mass_flow_rate: MassRate,
    pub bulk_temperature: ThermodynamicTemperature,
    /// Temperature of the membrane surface (feed) or condensing plate (coolant).
    pub wall_temperature: ThermodynamicTemperature,
    /// Salt mass fraction in the bulk.
    pub bulk_salinity: Ratio,
    /// Salt mass fraction at the wall.
    pub wall_salinity: Ratio,
}

impl StreamState {
    fn check(&self, fields: &StreamFields) -> Result<(), AgmdError> {
        check::<_, StrictlyPositive>(fields.mass_flow_rate, &self.mass_flow_rate)?;
        check_temperature(fields.bulk_temperature, self.bulk_temperature)?;
        check_temperature(fields.wall_temperature, self.wall_temperature)?;
        check::<_, UnitIntervalUpperOpen>(fields.bulk_salinity, &self.bulk_salinity)?;
        check::<_, UnitIntervalUpperOpen>(fields.wall_salinity, &self.wall_salinity)
    }
}

/// Iterated state of one segment, as supplied by the outer solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingState {
    pub feed: StreamState,
    pub coolant: StreamState,
    /// Mean membrane temperature.
    pub membrane_temperature: ThermodynamicTemperature,
    /// Membrane surface temperature on the air gap side.
    pub membrane_gap_temperature: ThermodynamicTemperature,
    /// Mean air gap temperature.
    pub gap_temperature: ThermodynamicTemperature,
    /// Water vapor pressure at the feed side of the membrane.
    pub feed_vapor_pressure: Pressure,
    /// Water vapor pressure at the condensate film boundary.
    pub boundary_vapor_pressure: Pressure,
    /// Gauge pressure of the pores and the gap.
    pub vacuum_pressure: Pressure,
}

impl OperatingState {
    /// Checks the state against its physical domain.
    ///
    /// # Errors
    ///
    /// Returns [`AgmdError::InvalidPhysicalInput`] if a flow rate is not
    /// strictly positive, a salinity is outside `[0, 1)`, a temperature is at
    /// or below absolute zero, a vapor pressure is negative, or the vacuum
    /// leaves no absolute pressure in the gap. The flux conditions are
    /// checked with [`FluxConditions::check`].
    pub fn check(&self) -> Result<(), AgmdError> {
        self.feed.check(&FEED)?;
        self.coolant.check(&COOLANT)?;
        check_temperature("membrane_gap_temperature", self.membrane_gap_temperature)?;
        self.flux_conditions().check()
    }

    /// Returns the part of the state that drives the water flux.
    #[must_use]
    pub fn flux_conditions(&self) -> FluxConditions {
        FluxConditions {
            membrane_temperature: self.membrane_temperature,
            gap_temperature: self.gap_temperature,
            feed_vapor_pressure: self.feed_vapor_pressure,
            boundary_vapor_pressure: self.boundary_vapor_pressure,
            vacuum_pressure: self.vacuum_pressure,
        }
    }

    /// Returns the absolute pressure in the pores and the gap.
    #[must_use]
    pub fn gap_pressure(&self) -> Pressure {
        self.flux_conditions().gap_pressure()
    }
}

/// Field names reported when a stream fails validation.
struct StreamFields {
    mass_flow_rate: &'static str,
    bulk_temperature: &'static str,
    wall_temperature: &'static str,
    bulk_salinity: &'static str,
    wall_salinity: &'static str,
}

const FEED: StreamFields = StreamFields {
    mass_flow_rate: "feed.mass_flow_rate",
    bulk_temperature: "feed.bulk_temperature",
    wall_temperature: "feed.wall_temperature",
    bulk_salinity: "feed.bulk_salinity",
    wall_salinity: "feed.wall_salinity",
};

const COOLANT: StreamFields = StreamFields {
    mass_flow_rate: "coolant.mass_flow_rate",
    bulk_temperature: "coolant.bulk_temperature",
    wall_temperature: "coolant.wall_temperature",
    bulk_salinity: "coolant.bulk_salinity",
    wall_salinity: "coolant.wall_salinity",
};
