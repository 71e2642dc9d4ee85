//! Token constants and card kinds
//!
//! The panel grammar is built from a small vocabulary of fixed tokens.
//! Entity states and attribute names mirror the home-automation backend
//! verbatim; they arrive as strings and are compared as strings.

/// The single reserved byte delimiting all protocol tokens
pub const SEPARATOR: char = '~';

/// Structural tokens understood by the panel firmware
pub mod token {
    /// Generic pressable widget
    pub const BUTTON: &str = "button";
    /// Prefix for page navigation targets (`navigate.uuid.<target>`)
    pub const NAVIGATE_UUID: &str = "navigate.uuid";
    /// Sentinel marking a page item slot as deleted/blank
    pub const DELETE: &str = "delete";
    /// Boolean flag, asserted
    pub const ENABLE: &str = "enable";
    /// Boolean flag, deasserted (also used for greyed-out widgets)
    pub const DISABLE: &str = "disable";
    /// Media player button block tag
    pub const MEDIA_PLAYER: &str = "media_pl";
    /// Disarm button action token
    pub const DISARM: &str = "disarm";
    /// Arm action tokens, forwarded back on button press
    pub const ARM_HOME: &str = "arm_home";
    pub const ARM_AWAY: &str = "arm_away";
    pub const ARM_NIGHT: &str = "arm_night";
    pub const ARM_VACATION: &str = "arm_vacation";
    pub const ARM_CUSTOM_BYPASS: &str = "arm_custom_bypass";
}

/// Entity state strings as reported by the backend
pub mod state {
    pub const UNKNOWN: &str = "unknown";
    pub const UNAVAILABLE: &str = "unavailable";
    pub const ON: &str = "on";
    pub const OFF: &str = "off";

    // Alarm control panel
    pub const DISARMED: &str = "disarmed";
    pub const TRIGGERED: &str = "triggered";
    pub const ARMING: &str = "arming";
    pub const PENDING: &str = "pending";
    pub const ARMED_HOME: &str = "armed_home";
    pub const ARMED_AWAY: &str = "armed_away";
    pub const ARMED_NIGHT: &str = "armed_night";
    pub const ARMED_VACATION: &str = "armed_vacation";
    pub const ARMED_CUSTOM_BYPASS: &str = "armed_custom_bypass";

    // Climate
    pub const AUTO: &str = "auto";
    pub const HEAT: &str = "heat";
    pub const COOL: &str = "cool";
    pub const HEAT_COOL: &str = "heat_cool";
    pub const DRY: &str = "dry";
    pub const FAN_ONLY: &str = "fan_only";

    // Media player
    pub const PLAYING: &str = "playing";
}

/// Entity attribute names as reported by the backend
pub mod attr {
    // Alarm control panel
    pub const CODE_ARM_REQUIRED: &str = "code_arm_required";
    pub const OPEN_SENSORS: &str = "open_sensors";

    // Climate
    pub const CURRENT_TEMPERATURE: &str = "current_temperature";
    pub const TEMPERATURE: &str = "temperature";
    pub const TARGET_TEMP_HIGH: &str = "target_temp_high";
    pub const TARGET_TEMP_LOW: &str = "target_temp_low";
    pub const MIN_TEMP: &str = "min_temp";
    pub const MAX_TEMP: &str = "max_temp";
    pub const TARGET_TEMP_STEP: &str = "target_temp_step";
    pub const HVAC_ACTION: &str = "hvac_action";
    pub const HVAC_MODES: &str = "hvac_modes";
    pub const PRESET_MODES: &str = "preset_modes";
    pub const SWING_MODES: &str = "swing_modes";
    pub const FAN_MODES: &str = "fan_modes";

    // Media player
    pub const MEDIA_TITLE: &str = "media_title";
    pub const MEDIA_ARTIST: &str = "media_artist";
    pub const MEDIA_CONTENT_TYPE: &str = "media_content_type";
    pub const VOLUME_LEVEL: &str = "volume_level";
    pub const SUPPORTED_FEATURES: &str = "supported_features";
    pub const SHUFFLE: &str = "shuffle";
}

/// The closed set of card layouts the panel can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CardKind {
    /// Grid of up to 6 icon tiles
    Grid,
    /// Vertical list of labelled entity rows
    Entities,
    /// QR code with caption rows
    Qr,
    /// Alarm control panel with keypad
    Alarm,
    /// Thermostat dial
    Thermo,
    /// Media player transport controls
    Media,
}

impl CardKind {
    /// Wire tag identifying the layout to the panel
    pub const fn wire_name(&self) -> &'static str {
        match self {
            CardKind::Grid => "cardGrid",
            CardKind::Entities => "cardEntities",
            CardKind::Qr => "cardQR",
            CardKind::Alarm => "cardAlarm",
            CardKind::Thermo => "cardThermo",
            CardKind::Media => "cardMedia",
        }
    }

    /// Leading instruction token of a full card message
    ///
    /// Every current layout refreshes through the same update
    /// instruction; the panel infers the layout from the page it is on.
    pub const fn render_instruction(&self) -> &'static str {
        "entityUpd"
    }

    /// Separator count a delete sentinel needs to blank one item slot
    pub const fn delete_separator_count(&self) -> u8 {
        // All current layouts use 6-field item slots
        5
    }
}

/// Arming actions an alarm card can expose as buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArmAction {
    Home,
    Away,
    Night,
    Vacation,
    CustomBypass,
}

impl ArmAction {
    /// Wire token for this action, also the translation key of its label
    pub const fn token(&self) -> &'static str {
        match self {
            ArmAction::Home => token::ARM_HOME,
            ArmAction::Away => token::ARM_AWAY,
            ArmAction::Night => token::ARM_NIGHT,
            ArmAction::Vacation => token::ARM_VACATION,
            ArmAction::CustomBypass => token::ARM_CUSTOM_BYPASS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_distinct() {
        let kinds = [
            CardKind::Grid,
            CardKind::Entities,
            CardKind::Qr,
            CardKind::Alarm,
            CardKind::Thermo,
            CardKind::Media,
        ];

        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(a.wire_name(), b.wire_name());
            }
        }
    }

    #[test]
    fn test_arm_action_tokens() {
        assert_eq!(ArmAction::Home.token(), "arm_home");
        assert_eq!(ArmAction::CustomBypass.token(), "arm_custom_bypass");
    }
}
