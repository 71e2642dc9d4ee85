//! Icon glyphs, colours and the state-to-icon lookup tables
//!
//! The panel font carries the Material Design icon set in the private
//! use area; an icon on the wire is the UTF-8 glyph followed by a
//! separator and its RGB565 colour rendered in decimal.

/// A glyph code point paired with a 16-bit RGB565 colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Icon {
    /// Code point in the panel's icon font
    pub glyph: char,
    /// RGB565 colour
    pub color: u16,
}

impl Icon {
    /// Create an icon from a glyph and colour
    pub const fn new(glyph: char, color: u16) -> Self {
        Self { glyph, color }
    }
}

/// Glyph code points used by the card renderers
pub mod glyph {
    pub const SHIELD: char = '\u{F0498}';
    pub const SHIELD_OFF: char = '\u{F099D}';
    pub const SHIELD_HOME: char = '\u{F068A}';
    pub const SHIELD_LOCK: char = '\u{F099C}';
    pub const SHIELD_MOON: char = '\u{F1828}';
    pub const SHIELD_AIRPLANE: char = '\u{F06BB}';
    pub const BELL_RING: char = '\u{F00FE}';
    pub const HELP_CIRCLE: char = '\u{F02D6}';
    pub const PROGRESS_ALERT: char = '\u{F0CBC}';

    pub const PLAY: char = '\u{F040A}';
    pub const PAUSE: char = '\u{F03E4}';
    pub const SHUFFLE: char = '\u{F049D}';
    pub const SHUFFLE_DISABLED: char = '\u{F049C}';
    pub const SPEAKER_OFF: char = '\u{F04C4}';
    pub const MUSIC: char = '\u{F075A}';
    pub const TELEVISION: char = '\u{F0502}';
    pub const MOVIE: char = '\u{F0381}';
    pub const PLAYLIST_MUSIC: char = '\u{F0CB8}';

    pub const CALENDAR_SYNC: char = '\u{F0E8E}';
    pub const FIRE: char = '\u{F0238}';
    pub const SNOWFLAKE: char = '\u{F0717}';
    pub const WATER_PERCENT: char = '\u{F058E}';
    pub const FAN: char = '\u{F0210}';
    pub const POWER: char = '\u{F0425}';
    pub const TEMPERATURE_CELSIUS: char = '\u{F0504}';
    pub const TEMPERATURE_FAHRENHEIT: char = '\u{F0505}';

    pub const WEATHER_SUNNY: char = '\u{F0599}';
    pub const WEATHER_NIGHT: char = '\u{F0594}';
    pub const WEATHER_CLOUDY: char = '\u{F0590}';
    pub const WEATHER_FOG: char = '\u{F0591}';
    pub const WEATHER_HAIL: char = '\u{F0592}';
    pub const WEATHER_LIGHTNING: char = '\u{F0593}';
    pub const WEATHER_LIGHTNING_RAINY: char = '\u{F067E}';
    pub const WEATHER_PARTLY_CLOUDY: char = '\u{F0595}';
    pub const WEATHER_POURING: char = '\u{F0596}';
    pub const WEATHER_RAINY: char = '\u{F0597}';
    pub const WEATHER_SNOWY: char = '\u{F0598}';
    pub const WEATHER_SNOWY_RAINY: char = '\u{F067F}';
    pub const WEATHER_WINDY: char = '\u{F059D}';
    pub const WEATHER_WINDY_VARIANT: char = '\u{F059E}';
    pub const ALERT_CIRCLE_OUTLINE: char = '\u{F05D6}';
}

/// RGB565 colour constants
pub mod color {
    pub const WHITE: u16 = 65535;
    pub const GREEN: u16 = 0x0CE6;
    pub const RED: u16 = 63488;
    pub const ORANGE: u16 = 0xED80;
    pub const GREY: u16 = 38066;
    pub const YELLOW: u16 = 65504;

    // Climate mode palette
    pub const DARK_GREEN: u16 = 1024;
    pub const DARK_ORANGE: u16 = 64512;
    pub const LIGHT_GREY: u16 = 52857;
    pub const LIGHT_BLUE: u16 = 11487;
    pub const LIGHT_ORANGE: u16 = 60897;

    // Media palette
    pub const MEDIA_BLUE: u16 = 1374;
    pub const MEDIA_ORANGE: u16 = 64704;
    pub const MEDIA_BUTTON: u16 = 17299;

    // Weather palette
    pub const WEATHER_DEFAULT: u16 = 63878;
    pub const RAIN_BLUE: u16 = 12703;
    pub const DRIZZLE_BLUE: u16 = 25375;
    pub const STORM_YELLOW: u16 = 65120;
    pub const STORM_RAIN: u16 = 50400;
    pub const GUST_ORANGE: u16 = 64495;
}

/// Alarm state to status icon
pub const ALARM_ICON_MAP: &[(&str, Icon)] = &[
    ("disarmed", Icon::new(glyph::SHIELD_OFF, color::GREEN)),
    ("unknown", Icon::new(glyph::SHIELD_OFF, color::GREEN)),
    ("triggered", Icon::new(glyph::BELL_RING, color::RED)),
    ("armed_home", Icon::new(glyph::SHIELD_HOME, color::RED)),
    ("armed_away", Icon::new(glyph::SHIELD_LOCK, color::RED)),
    ("armed_night", Icon::new(glyph::SHIELD_MOON, color::RED)),
    ("armed_vacation", Icon::new(glyph::SHIELD_AIRPLANE, color::RED)),
    ("armed_custom_bypass", Icon::new(glyph::SHIELD, color::RED)),
    ("arming", Icon::new(glyph::SHIELD, color::ORANGE)),
    ("pending", Icon::new(glyph::SHIELD, color::ORANGE)),
];

/// Weather condition to forecast icon
pub const WEATHER_ICON_MAP: &[(&str, Icon)] = &[
    ("clear-night", Icon::new(glyph::WEATHER_NIGHT, color::GREY)),
    ("cloudy", Icon::new(glyph::WEATHER_CLOUDY, color::GREY)),
    ("exceptional", Icon::new(glyph::ALERT_CIRCLE_OUTLINE, color::WEATHER_DEFAULT)),
    ("fog", Icon::new(glyph::WEATHER_FOG, color::GREY)),
    ("hail", Icon::new(glyph::WEATHER_HAIL, color::WHITE)),
    ("lightning", Icon::new(glyph::WEATHER_LIGHTNING, color::STORM_YELLOW)),
    ("lightning-rainy", Icon::new(glyph::WEATHER_LIGHTNING_RAINY, color::STORM_RAIN)),
    ("partlycloudy", Icon::new(glyph::WEATHER_PARTLY_CLOUDY, color::GREY)),
    ("pouring", Icon::new(glyph::WEATHER_POURING, color::RAIN_BLUE)),
    ("rainy", Icon::new(glyph::WEATHER_RAINY, color::DRIZZLE_BLUE)),
    ("snowy", Icon::new(glyph::WEATHER_SNOWY, color::WHITE)),
    ("snowy-rainy", Icon::new(glyph::WEATHER_SNOWY_RAINY, color::GREY)),
    ("sunny", Icon::new(glyph::WEATHER_SUNNY, color::YELLOW)),
    ("windy", Icon::new(glyph::WEATHER_WINDY, color::GREY)),
    ("windy-variant", Icon::new(glyph::WEATHER_WINDY_VARIANT, color::GUST_ORANGE)),
];

/// Hvac mode to dial glyph (colour is derived from the mode separately)
pub const CLIMATE_ICON_MAP: &[(&str, char)] = &[
    ("auto", glyph::CALENDAR_SYNC),
    ("heat_cool", glyph::CALENDAR_SYNC),
    ("heat", glyph::FIRE),
    ("cool", glyph::SNOWFLAKE),
    ("dry", glyph::WATER_PERCENT),
    ("fan_only", glyph::FAN),
    ("off", glyph::POWER),
];

/// Media content type to button glyph
pub const MEDIA_TYPE_ICON_MAP: &[(&str, char)] = &[
    ("music", glyph::MUSIC),
    ("tvshow", glyph::TELEVISION),
    ("episode", glyph::TELEVISION),
    ("video", glyph::MOVIE),
    ("playlist", glyph::PLAYLIST_MUSIC),
];

/// Look up an entry in a state-to-value table
///
/// Tables are small enough that a linear scan beats hashing.
pub fn lookup<T: Copy>(map: &[(&str, T)], key: &str) -> Option<T> {
    map.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look up an icon, `None` on unmapped keys
pub fn icon_for(map: &[(&str, Icon)], key: &str) -> Option<Icon> {
    lookup(map, key)
}

/// Look up a glyph with a fallback for unmapped keys
pub fn glyph_or(map: &[(&str, char)], key: &str, fallback: char) -> char {
    lookup(map, key).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_map_covers_armed_states() {
        for state in [
            "disarmed",
            "triggered",
            "armed_home",
            "armed_away",
            "armed_night",
            "armed_vacation",
            "armed_custom_bypass",
            "arming",
            "pending",
        ] {
            assert!(icon_for(ALARM_ICON_MAP, state).is_some(), "missing {state}");
        }
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(icon_for(ALARM_ICON_MAP, "smoke"), None);
        assert_eq!(icon_for(WEATHER_ICON_MAP, "meteor-strike"), None);
    }

    #[test]
    fn test_media_glyph_fallback() {
        assert_eq!(
            glyph_or(MEDIA_TYPE_ICON_MAP, "podcast", glyph::SPEAKER_OFF),
            glyph::SPEAKER_OFF
        );
        assert_eq!(
            glyph_or(MEDIA_TYPE_ICON_MAP, "music", glyph::SPEAKER_OFF),
            glyph::MUSIC
        );
    }

    #[test]
    fn test_triggered_is_red_bell() {
        let icon = icon_for(ALARM_ICON_MAP, "triggered").unwrap();
        assert_eq!(icon, Icon::new(glyph::BELL_RING, color::RED));
    }
}
