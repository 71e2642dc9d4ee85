//! Panel configuration context
//!
//! Global settings the card renderers need. The context is passed
//! explicitly to constructors and renders instead of living in process
//! statics, so tests can run several configurations side by side.

use vesta_protocol::icons::glyph;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display temperature unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit suffix appended to displayed temperatures
    pub const fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Unit glyph for the thermostat dial
    pub const fn icon(&self) -> char {
        match self {
            TemperatureUnit::Celsius => glyph::TEMPERATURE_CELSIUS,
            TemperatureUnit::Fahrenheit => glyph::TEMPERATURE_FAHRENHEIT,
        }
    }
}

/// Global panel settings
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Configuration {
    temperature_unit: TemperatureUnit,
}

impl Configuration {
    pub fn new(temperature_unit: TemperatureUnit) -> Self {
        Self { temperature_unit }
    }

    pub fn get_temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    /// Unit suffix for the configured unit
    pub fn get_temperature_unit_str(&self) -> &'static str {
        self.temperature_unit.suffix()
    }

    /// Unit glyph for the configured unit
    pub fn temperature_unit_icon(&self) -> char {
        self.temperature_unit.icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_celsius() {
        let config = Configuration::default();
        assert_eq!(config.get_temperature_unit(), TemperatureUnit::Celsius);
        assert_eq!(config.get_temperature_unit_str(), "°C");
        assert_eq!(config.temperature_unit_icon(), glyph::TEMPERATURE_CELSIUS);
    }

    #[test]
    fn test_fahrenheit() {
        let config = Configuration::new(TemperatureUnit::Fahrenheit);
        assert_eq!(config.get_temperature_unit_str(), "°F");
        assert_eq!(config.temperature_unit_icon(), glyph::TEMPERATURE_FAHRENHEIT);
    }
}
