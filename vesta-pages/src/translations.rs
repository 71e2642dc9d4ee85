//! Translation lookup
//!
//! Key to display-string mapping with a built-in English table and a
//! small override layer. Lookup is total: an unmapped key passes through
//! unchanged so a missing translation shows up on the panel as the raw
//! key instead of breaking the message.

use heapless::{FnvIndexMap, String};

use crate::bounded;

/// Maximum length of a translation key
pub const TRANSLATION_KEY_LEN: usize = 24;

/// Maximum length of a translated string
pub const TRANSLATION_LEN: usize = 32;

/// Maximum user overrides (power of two)
pub const MAX_OVERRIDES: usize = 16;

/// Built-in English strings for the keys the card renderers emit
const BUILTIN: &[(&str, &str)] = &[
    ("disarm", "Disarm"),
    ("arm_home", "Arm Home"),
    ("arm_away", "Arm Away"),
    ("arm_night", "Arm Night"),
    ("arm_vacation", "Arm Vacation"),
    ("arm_custom_bypass", "Custom Bypass"),
    ("currently", "Currently"),
    ("state", "State"),
    // Climate states
    ("auto", "Auto"),
    ("heat", "Heat"),
    ("cool", "Cool"),
    ("heat_cool", "Heat/Cool"),
    ("dry", "Dry"),
    ("fan_only", "Fan only"),
    ("off", "Off"),
    ("unknown", "Unknown"),
    // Climate actions
    ("heating", "Heating"),
    ("cooling", "Cooling"),
    ("drying", "Drying"),
    ("fan", "Fan"),
    ("idle", "Idle"),
];

/// Key to display-string lookup with overrides
#[derive(Debug, Default)]
pub struct Translator {
    overrides: FnvIndexMap<String<TRANSLATION_KEY_LEN>, String<TRANSLATION_LEN>, MAX_OVERRIDES>,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            overrides: FnvIndexMap::new(),
        }
    }

    /// Override (or add) a translation
    ///
    /// Returns false when the override table is full.
    pub fn set(&mut self, key: &str, text: &str) -> bool {
        if let Some(slot) = self.overrides.get_mut(&bounded::<TRANSLATION_KEY_LEN>(key)) {
            *slot = bounded(text);
            return true;
        }
        self.overrides.insert(bounded(key), bounded(text)).is_ok()
    }

    /// Resolve a key, falling back to the key itself when unmapped
    pub fn get_translation<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.overrides.get(&bounded::<TRANSLATION_KEY_LEN>(key)) {
            return text.as_str();
        }
        BUILTIN
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let translator = Translator::new();
        assert_eq!(translator.get_translation("disarm"), "Disarm");
        assert_eq!(translator.get_translation("heat_cool"), "Heat/Cool");
    }

    #[test]
    fn test_unmapped_key_passes_through() {
        let translator = Translator::new();
        assert_eq!(translator.get_translation("preset_eco"), "preset_eco");
        assert_eq!(translator.get_translation(""), "");
    }

    #[test]
    fn test_overlong_override_key_truncates_consistently() {
        let mut translator = Translator::new();
        let long_key = "translation_key_well_beyond_limit";
        assert!(long_key.len() > TRANSLATION_KEY_LEN);

        assert!(translator.set(long_key, "Long"));
        assert_eq!(translator.get_translation(long_key), "Long");
        // A second set through the same long key updates in place
        assert!(translator.set(long_key, "Longer"));
        assert_eq!(translator.get_translation(long_key), "Longer");
    }

    #[test]
    fn test_override_wins() {
        let mut translator = Translator::new();
        assert!(translator.set("disarm", "Unscharf"));
        assert_eq!(translator.get_translation("disarm"), "Unscharf");
        // Untouched keys still resolve from the builtin table
        assert_eq!(translator.get_translation("arm_home"), "Arm Home");
    }
}
