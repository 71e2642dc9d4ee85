//! Concrete page items
//!
//! Each item serializes the exact token sequence its slot in the card
//! schema requires. Output composes with neighbouring slots through the
//! separators the owning card inserts; trailing empty fields inside a
//! slot are part of the slot itself.

use core::fmt::Write;

use heapless::String;

use vesta_protocol::icons::{color, icon_for, WEATHER_ICON_MAP};
use vesta_protocol::tokens::token;
use vesta_protocol::{CardKind, Icon, SEPARATOR};

use super::fragments::{DisplayNameFragment, IconFragment, ValueFragment};
use super::{PageItemBase, UUID_LEN};
use crate::bounded;
use crate::config::Configuration;
use crate::entity::ENTITY_ID_LEN;

/// Maximum length of a weather unit suffix
const UNIT_LEN: usize = 8;

/// Button that navigates to another page
///
/// Slot output: `button~navigate.uuid.<target>~icon~color~~` - the two
/// trailing fields are the unused name/value slots.
#[derive(Debug, Clone)]
pub struct NavigationItem {
    base: PageItemBase,
    icon: IconFragment,
    navigation_uuid: String<UUID_LEN>,
}

impl NavigationItem {
    /// `navigation_uuid` is the uuid of the page to navigate to
    pub fn new(uuid: &str, navigation_uuid: &str) -> Self {
        Self {
            base: PageItemBase::new(uuid),
            icon: IconFragment::new(None, color::WHITE),
            navigation_uuid: bounded(navigation_uuid),
        }
    }

    pub fn with_icon_value(mut self, glyph: char) -> Self {
        self.icon = IconFragment::new(Some(glyph), self.icon.color());
        self
    }

    pub fn with_icon_color(mut self, color: u16) -> Self {
        self.icon = IconFragment::new(self.icon.value(), color);
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = IconFragment::from_icon(icon);
        self
    }

    pub fn uuid(&self) -> &str {
        self.base.uuid()
    }

    pub fn invalidate(&mut self) {
        self.base.invalidate();
    }

    pub fn render(&mut self) -> &str {
        let Self {
            base,
            icon,
            navigation_uuid,
        } = self;
        base.rendered(|_, buf| {
            let _ = write!(
                buf,
                "{}{SEPARATOR}{}.{}{SEPARATOR}",
                token::BUTTON,
                token::NAVIGATE_UUID,
                navigation_uuid
            );
            let _ = icon.render_into(buf);
            let _ = write!(buf, "{SEPARATOR}{SEPARATOR}");
        })
    }
}

/// Status icon bound to an entity
///
/// Slot output: `icon~color`.
#[derive(Debug, Clone)]
pub struct StatusIconItem {
    base: PageItemBase,
    entity_id: String<ENTITY_ID_LEN>,
    icon: IconFragment,
    alt_font: bool,
}

impl StatusIconItem {
    pub fn new(uuid: &str, entity_id: &str) -> Self {
        Self {
            base: PageItemBase::new(uuid),
            entity_id: bounded(entity_id),
            icon: IconFragment::new(None, color::WHITE),
            alt_font: false,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = IconFragment::from_icon(icon);
        self
    }

    pub fn uuid(&self) -> &str {
        self.base.uuid()
    }

    pub fn entity_id(&self) -> &str {
        self.entity_id.as_str()
    }

    pub fn get_alt_font(&self) -> bool {
        self.alt_font
    }

    /// Use the large glyph font on the panel
    pub fn set_alt_font(&mut self, large: bool) {
        self.alt_font = large;
    }

    pub fn set_icon(&mut self, icon: Icon) {
        self.icon.set_icon(icon);
        self.base.invalidate();
    }

    pub fn invalidate(&mut self) {
        self.base.invalidate();
    }

    pub fn render(&mut self) -> &str {
        let Self { base, icon, .. } = self;
        base.rendered(|_, buf| {
            let _ = icon.render_into(buf);
        })
    }
}

/// Forecast tile with icon, label and a numeric value
///
/// Slot output: `~~icon~color~displayName~value<unit>` - the two
/// leading fields are the unused type/name slots. The value always
/// renders with exactly one decimal place.
#[derive(Debug, Clone)]
pub struct WeatherItem {
    base: PageItemBase,
    icon: IconFragment,
    display_name: DisplayNameFragment,
    value: ValueFragment,
    float_value: f32,
    unit: String<UNIT_LEN>,
}

impl WeatherItem {
    pub fn new(uuid: &str, config: &Configuration) -> Self {
        Self {
            base: PageItemBase::new(uuid),
            icon: IconFragment::new(None, color::WEATHER_DEFAULT),
            display_name: DisplayNameFragment::default(),
            value: ValueFragment::new("0.0"),
            float_value: 0.0,
            unit: bounded(config.get_temperature_unit_str()),
        }
    }

    pub fn uuid(&self) -> &str {
        self.base.uuid()
    }

    pub fn display_name(&self) -> &str {
        self.display_name.name()
    }

    pub fn set_display_name(&mut self, name: &str) {
        self.display_name.set_name(name);
        self.base.invalidate();
    }

    /// Swap the icon for the given forecast condition
    ///
    /// Unknown conditions leave the current icon unchanged.
    pub fn set_icon_by_weather_condition(&mut self, condition: &str) {
        if let Some(icon) = icon_for(WEATHER_ICON_MAP, condition) {
            self.icon.set_icon(icon);
            self.base.invalidate();
        }
    }

    /// Store a new value; rejects input that does not parse as a float
    ///
    /// On rejection the previous value and render output are untouched.
    pub fn set_value(&mut self, raw: &str) -> bool {
        let Ok(parsed) = raw.parse::<f32>() else {
            return false;
        };
        if !self.value.set_value(raw) {
            return false;
        }
        self.float_value = parsed;
        self.base.invalidate();
        true
    }

    pub fn get_value(&self) -> &str {
        self.value.get_value()
    }

    pub fn invalidate(&mut self) {
        self.base.invalidate();
    }

    pub fn render(&mut self) -> &str {
        let Self {
            base,
            icon,
            display_name,
            float_value,
            unit,
            ..
        } = self;
        base.rendered(|_, buf| {
            let _ = write!(buf, "{SEPARATOR}{SEPARATOR}");
            let _ = icon.render_into(buf);
            let _ = buf.push(SEPARATOR);
            let _ = display_name.render_into(buf);
            let _ = write!(buf, "{SEPARATOR}{:.1}{}", *float_value, unit);
        })
    }
}

/// Alarm action button
///
/// Slot output: `displayName~action`.
#[derive(Debug, Clone)]
pub struct AlarmButtonItem {
    base: PageItemBase,
    display_name: DisplayNameFragment,
    action_type: &'static str,
}

impl AlarmButtonItem {
    pub fn new(uuid: &str, action_type: &'static str, display_name: &str) -> Self {
        Self {
            base: PageItemBase::new(uuid),
            display_name: DisplayNameFragment::new(display_name),
            action_type,
        }
    }

    pub fn uuid(&self) -> &str {
        self.base.uuid()
    }

    pub fn action_type(&self) -> &'static str {
        self.action_type
    }

    pub fn invalidate(&mut self) {
        self.base.invalidate();
    }

    pub fn render(&mut self) -> &str {
        let Self {
            base,
            display_name,
            action_type,
        } = self;
        base.rendered(|_, buf| {
            let _ = display_name.render_into(buf);
            let _ = write!(buf, "{SEPARATOR}{}", action_type);
        })
    }
}

/// Bare status glyph for the alarm card
///
/// Slot output: `icon~color`.
#[derive(Debug, Clone)]
pub struct AlarmIconItem {
    base: PageItemBase,
    icon: IconFragment,
}

impl AlarmIconItem {
    pub fn new(uuid: &str, icon: Icon) -> Self {
        Self {
            base: PageItemBase::new(uuid),
            icon: IconFragment::from_icon(icon),
        }
    }

    pub fn uuid(&self) -> &str {
        self.base.uuid()
    }

    pub fn set_icon_value(&mut self, glyph: char) {
        self.icon.set_icon_value(glyph);
        self.base.invalidate();
    }

    pub fn set_icon_color(&mut self, color: u16) {
        self.icon.set_icon_color(color);
        self.base.invalidate();
    }

    /// Set glyph and colour together
    pub fn set_icon(&mut self, icon: Icon) {
        self.icon.set_icon(icon);
        self.base.invalidate();
    }

    /// Restore the construction-time glyph and colour
    pub fn reset_icon(&mut self) {
        self.icon.reset_icon_value();
        self.icon.reset_icon_color();
        self.base.invalidate();
    }

    pub fn invalidate(&mut self) {
        self.base.invalidate();
    }

    pub fn render(&mut self) -> &str {
        let Self { base, icon } = self;
        base.rendered(|_, buf| {
            let _ = icon.render_into(buf);
        })
    }
}

/// Sentinel that blanks one item slot on the panel
///
/// The uuid doubles as the wire output: the `delete` token followed by
/// enough separators to cover every field of the slot.
#[derive(Debug, Clone)]
pub struct DeleteItem {
    base: PageItemBase,
}

impl DeleteItem {
    /// Sentinel sized for the item slots of the given card kind
    pub fn new(kind: CardKind) -> Self {
        Self::with_separator_count(kind.delete_separator_count())
    }

    /// Sentinel with an explicit separator count
    pub fn with_separator_count(separator_quantity: u8) -> Self {
        let mut uuid = String::<UUID_LEN>::new();
        let _ = uuid.push_str(token::DELETE);
        for _ in 0..separator_quantity {
            let _ = uuid.push(SEPARATOR);
        }
        Self {
            base: PageItemBase::new(uuid.as_str()),
        }
    }

    pub fn uuid(&self) -> &str {
        self.base.uuid()
    }

    pub fn invalidate(&mut self) {
        self.base.invalidate();
    }

    pub fn render(&mut self) -> &str {
        self.base.rendered(|uuid, buf| {
            let _ = buf.push_str(uuid);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;
    use vesta_protocol::icons::glyph;

    #[test]
    fn test_navigation_item_render() {
        let mut item = NavigationItem::new("nav_prev", "page_home")
            .with_icon(Icon::new(glyph::WEATHER_SUNNY, 65535));
        let expected = format!(
            "button~navigate.uuid.page_home~{}~65535~~",
            glyph::WEATHER_SUNNY
        );
        assert_eq!(item.render(), expected);
    }

    #[test]
    fn test_navigation_item_default_icon_is_blank() {
        let mut item = NavigationItem::new("nav_next", "page_2");
        assert_eq!(item.render(), "button~navigate.uuid.page_2~~65535~~");
    }

    #[test]
    fn test_status_icon_render_is_icon_fragment_only() {
        let mut item = StatusIconItem::new("icon_1", "binary_sensor.door")
            .with_icon(Icon::new(glyph::BELL_RING, color::RED));
        assert_eq!(item.render(), format!("{}~63488", glyph::BELL_RING));
        assert!(!item.get_alt_font());
    }

    #[test]
    fn test_weather_item_value_formatting() {
        let config = Configuration::default();
        let mut item = WeatherItem::new("w_today", &config);
        item.set_display_name("Today");
        item.set_icon_by_weather_condition("sunny");

        assert!(item.set_value("21"));
        let expected = format!("~~{}~65504~Today~21.0°C", glyph::WEATHER_SUNNY);
        assert_eq!(item.render(), expected);
    }

    #[test]
    fn test_weather_item_rejects_garbage_value() {
        let config = Configuration::default();
        let mut item = WeatherItem::new("w_today", &config);
        assert!(item.set_value("18.6"));
        let before = format!("{}", item.render());

        assert!(!item.set_value("abc"));
        assert_eq!(item.get_value(), "18.6");
        assert_eq!(item.render(), before);
    }

    #[test]
    fn test_weather_item_unknown_condition_keeps_icon() {
        let config = Configuration::default();
        let mut item = WeatherItem::new("w_today", &config);
        item.set_icon_by_weather_condition("rainy");
        let before = format!("{}", item.render());

        item.set_icon_by_weather_condition("meteor-strike");
        assert_eq!(item.render(), before);
    }

    #[test]
    fn test_weather_item_render_cache_invalidation() {
        let config = Configuration::default();
        let mut item = WeatherItem::new("w_today", &config);
        assert!(item.set_value("1"));
        assert!(item.render().ends_with("1.0°C"));

        // Mutating after a render must rebuild the cached buffer
        assert!(item.set_value("2.25"));
        assert!(item.render().ends_with("2.2°C") || item.render().ends_with("2.3°C"));
    }

    #[test]
    fn test_alarm_button_render() {
        let mut item = AlarmButtonItem::new("a1_d", token::DISARM, "Disarm");
        assert_eq!(item.render(), "Disarm~disarm");
    }

    #[test]
    fn test_delete_item_shapes() {
        let mut by_kind = DeleteItem::new(CardKind::Grid);
        assert_eq!(by_kind.render(), "delete~~~~~");

        let mut explicit = DeleteItem::with_separator_count(2);
        assert_eq!(explicit.render(), "delete~~");
    }
}
