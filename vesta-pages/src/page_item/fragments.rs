//! Composable render fragments
//!
//! Small value holders a concrete page item embeds and forwards to in
//! its slot order. Each fragment keeps its construction-time default
//! separate from the current value so appearance can be reset without
//! re-deriving it.

use core::fmt::{self, Write};

use heapless::String;

use vesta_protocol::{Icon, SEPARATOR};

use super::{DISPLAY_NAME_LEN, VALUE_LEN};
use crate::bounded;

/// Glyph plus colour, resettable to its defaults
#[derive(Debug, Clone, Copy)]
pub struct IconFragment {
    value: Option<char>,
    color: u16,
    default_value: Option<char>,
    default_color: u16,
}

impl IconFragment {
    /// A fragment with no glyph yet and the given colour
    pub const fn new(default_value: Option<char>, default_color: u16) -> Self {
        Self {
            value: default_value,
            color: default_color,
            default_value,
            default_color,
        }
    }

    pub const fn from_icon(icon: Icon) -> Self {
        Self::new(Some(icon.glyph), icon.color)
    }

    pub fn value(&self) -> Option<char> {
        self.value
    }

    pub fn color(&self) -> u16 {
        self.color
    }

    pub fn set_icon_value(&mut self, glyph: char) {
        self.value = Some(glyph);
    }

    pub fn set_icon_color(&mut self, color: u16) {
        self.color = color;
    }

    /// Set glyph and colour together
    pub fn set_icon(&mut self, icon: Icon) {
        self.value = Some(icon.glyph);
        self.color = icon.color;
    }

    /// Restore the construction-time glyph
    pub fn reset_icon_value(&mut self) {
        self.value = self.default_value;
    }

    /// Restore the construction-time colour
    pub fn reset_icon_color(&mut self) {
        self.color = self.default_color;
    }

    /// Render fragment: `glyph SEP color`
    pub fn render_into<W: Write>(&self, out: &mut W) -> fmt::Result {
        if let Some(glyph) = self.value {
            out.write_char(glyph)?;
        }
        write!(out, "{SEPARATOR}{}", self.color)
    }
}

/// Label text, rendered verbatim
#[derive(Debug, Clone, Default)]
pub struct DisplayNameFragment {
    name: String<DISPLAY_NAME_LEN>,
}

impl DisplayNameFragment {
    pub fn new(name: &str) -> Self {
        Self {
            name: bounded(name),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = bounded(name);
    }

    pub fn render_into<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(self.name.as_str())
    }
}

/// Raw value string with a rejecting setter
///
/// The base fragment only rejects values it cannot store; items with
/// stricter formats (numeric weather values) validate before forwarding
/// here.
#[derive(Debug, Clone, Default)]
pub struct ValueFragment {
    value: String<VALUE_LEN>,
}

impl ValueFragment {
    pub fn new(value: &str) -> Self {
        Self {
            value: bounded(value),
        }
    }

    pub fn get_value(&self) -> &str {
        self.value.as_str()
    }

    /// Store a new value; on failure the prior value is kept
    pub fn set_value(&mut self, raw: &str) -> bool {
        match String::try_from(raw) {
            Ok(value) => {
                self.value = value;
                true
            }
            Err(_) => false,
        }
    }

    pub fn render_into<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(self.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesta_protocol::icons::{color, glyph};

    fn rendered(fragment: &IconFragment) -> String<64> {
        let mut out = String::new();
        fragment.render_into(&mut out).unwrap();
        out
    }

    #[test]
    fn test_icon_fragment_render() {
        let fragment = IconFragment::from_icon(Icon::new(glyph::FIRE, color::RED));
        let mut expected = String::<64>::new();
        expected.push(glyph::FIRE).unwrap();
        expected.push_str("~63488").unwrap();
        assert_eq!(rendered(&fragment), expected);
    }

    #[test]
    fn test_icon_fragment_without_glyph() {
        let fragment = IconFragment::new(None, 65535);
        assert_eq!(rendered(&fragment).as_str(), "~65535");
    }

    #[test]
    fn test_icon_reset_restores_defaults() {
        let mut fragment = IconFragment::from_icon(Icon::new(glyph::SHIELD_OFF, color::GREEN));
        fragment.set_icon(Icon::new(glyph::BELL_RING, color::RED));
        assert_eq!(fragment.value(), Some(glyph::BELL_RING));

        fragment.reset_icon_value();
        fragment.reset_icon_color();
        assert_eq!(fragment.value(), Some(glyph::SHIELD_OFF));
        assert_eq!(fragment.color(), color::GREEN);
    }

    #[test]
    fn test_value_fragment_keeps_prior_on_overflow() {
        let mut fragment = ValueFragment::new("21.5");
        // VALUE_LEN is 16; a longer string must be rejected untouched
        assert!(!fragment.set_value("12345678901234567"));
        assert_eq!(fragment.get_value(), "21.5");

        assert!(fragment.set_value("22"));
        assert_eq!(fragment.get_value(), "22");
    }
}
