//! Module designs stored as TOML.
//!
//! All values are plain SI numbers:
//!
//! ```toml
//! [feed]
//! height = 0.002
//! width = 0.3
//! channels = 1
//! spacer_porosity = 0.85
//!
//! [coolant]
//! height = 0.0015
//! width = 0.3
//! channels = 1
//! spacer_porosity = 0.9
//!
//! [membrane]
//! porosity = 0.8
//! tortuosity = 1.5
//! thickness = 1e-4
//! pore_diameter = 2e-7
//! polymer_conductivity = 0.2
//!
//! [air_gap]
//! thickness = 0.002
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{Length, Ratio, ThermalConductivity},
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use super::{
    design::{AirGap, ChannelGeometry, MembraneParameters, ModuleDesign},
    error::AgmdError,
};

/// Errors raised while loading or storing a [`DesignConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access design file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse design: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize design: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Invalid(#[from] AgmdError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelConfig {
    pub height: f64,
    pub width: f64,
    pub channels: u32,
    pub spacer_porosity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MembraneConfig {
    pub porosity: f64,
    pub tortuosity: f64,
    pub thickness: f64,
    pub pore_diameter: f64,
    pub polymer_conductivity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirGapConfig {
    pub thickness: f64,
}

/// Unvalidated module design in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignConfig {
    pub feed: ChannelConfig,
    pub coolant: ChannelConfig,
    pub membrane: MembraneConfig,
    pub air_gap: AirGapConfig,
}

impl DesignConfig {
    /// Parses a design from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or a field mismatch.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a design from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is not a valid design.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes the design to TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the design.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first out-of-domain value.
    pub fn into_design(self) -> Result<ModuleDesign, ConfigError> {
        let design = ModuleDesign {
            feed: self.feed.into_geometry()?,
            coolant: self.coolant.into_geometry()?,
            membrane: self.membrane.into_parameters()?,
            air_gap: AirGap::new(Length::new::<meter>(self.air_gap.thickness))?,
        };
        log::debug!("validated AGMD module design: {design:?}");
        Ok(design)
    }
}

impl ChannelConfig {
    fn into_geometry(self) -> Result<ChannelGeometry, AgmdError> {
        ChannelGeometry::new(
            Length::new::<meter>(self.height),
            Length::new::<meter>(self.width),
            self.channels,
            Ratio::new::<ratio>(self.spacer_porosity),
        )
    }
}

impl MembraneConfig {
    fn into_parameters(self) -> Result<MembraneParameters, AgmdError> {
        MembraneParameters::new(
            Ratio::new::<ratio>(self.porosity),
            Ratio::new::<ratio>(self.tortuosity),
            Length::new::<meter>(self.thickness),
            Length::new::<meter>(self.pore_diameter),
            ThermalConductivity::new::<watt_per_meter_kelvin>(self.polymer_conductivity),
        )
    }
}

impl From<&ModuleDesign> for DesignConfig {
    fn from(design: &ModuleDesign) -> Self {
        let channel = |geometry: &ChannelGeometry| ChannelConfig {
            height: geometry.height().get::<meter>(),
            width: geometry.width().get::<meter>(),
            channels: geometry.channels(),
            spacer_porosity: geometry.spacer_porosity().get::<ratio>(),
        };
        let membrane = &design.membrane;

        Self {
            feed: channel(&design.feed),
            coolant: channel(&design.coolant),
            membrane: MembraneConfig {
                porosity: membrane.porosity().get::<ratio>(),
                tortuosity: membrane.tortuosity().get::<ratio>(),
                thickness: membrane.thickness().get::<meter>(),
                pore_diameter: membrane.pore_diameter().get::<meter>(),
                polymer_conductivity: membrane
                    .polymer_conductivity()
                    .get::<watt_per_meter_kelvin>(),
            },
            air_gap: AirGapConfig {
                thickness: design.air_gap.thickness().get::<meter>(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    const DESIGN: &str = r"
        [feed]
        height = 0.002
        width = 0.3
        channels = 1
        spacer_porosity = 0.85

        [coolant]
        height = 0.0015
        width = 0.3
        channels = 1
        spacer_porosity = 0.9

        [membrane]
        porosity = 0.8
        tortuosity = 1.5
        thickness = 1e-4
        pore_diameter = 2e-7
        polymer_conductivity = 0.2

        [air_gap]
        thickness = 0.002
    ";

    #[test]
    fn parses_and_validates_a_design() {
        let design = DesignConfig::from_toml_str(DESIGN)
            .and_then(DesignConfig::into_design)
            .expect("design is valid");

        assert_eq!(design.feed.channels(), 1);
        assert_eq!(design.membrane.tortuosity().get::<ratio>(), 1.5);
        assert_eq!(design.air_gap.thickness().get::<meter>(), 0.002);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = DESIGN.replace("[air_gap]", "[air_gap]\nspacer_porosity = 0.5");
        assert!(matches!(
            DesignConfig::from_toml_str(&text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_sections_are_rejected() {
        let text = DESIGN.replace("[air_gap]\n        thickness = 0.002", "");
        assert!(matches!(
            DesignConfig::from_toml_str(&text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn out_of_domain_values_name_the_field() {
        let text = DESIGN.replace("\n        porosity = 0.8", "\n        porosity = 1.2");
        let err = DesignConfig::from_toml_str(&text)
            .and_then(DesignConfig::into_design)
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid(AgmdError::InvalidPhysicalInput {
                field: "membrane.porosity",
                source: ConstraintError::AboveMaximum,
            })
        ));
    }

    #[test]
    fn design_survives_serialization() {
        let config = DesignConfig::from_toml_str(DESIGN).expect("design parses");
        let design = config.into_design().expect("design is valid");

        let text = DesignConfig::from(&design)
            .to_toml_string()
            .expect("design serializes");
        let reparsed = DesignConfig::from_toml_str(&text).expect("serialized design parses");

        assert_eq!(reparsed, config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            DesignConfig::load("/nonexistent/agmd-design.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
