//! Alarm control panel card

use heapless::{String, Vec};

use vesta_protocol::icons::{color, glyph, icon_for, ALARM_ICON_MAP};
use vesta_protocol::tokens::{attr, state, token};
use vesta_protocol::{ArmAction, CardKind, Icon, SEPARATOR};

use super::{suffixed_uuid, write_padding, CardBody, RenderContext};
use crate::bounded;
use crate::entity::ENTITY_ID_LEN;
use crate::page_item::{AlarmButtonItem, AlarmIconItem};
use crate::translations::Translator;

/// Keypad slots the panel layout provides
pub const MAX_ARM_BUTTONS: usize = 4;

/// Fields one button occupies on the wire
const BUTTON_FIELD_COUNT: usize = 2;

/// Mirrors an alarm control panel entity
///
/// The arm buttons only show while the panel is disarmed (or in an
/// unknown state); any armed or transitioning state collapses the
/// button block to the single disarm button. The status icon follows
/// the entity state and flashes while the state is transitional.
#[derive(Debug)]
pub struct AlarmCard {
    body: CardBody,
    entity_id: String<ENTITY_ID_LEN>,
    arm_buttons: Vec<AlarmButtonItem, MAX_ARM_BUTTONS>,
    disarm_button: AlarmButtonItem,
    status_icon: AlarmIconItem,
    info_icon: AlarmIconItem,
    show_keypad: bool,
    status_icon_flashing: bool,
}

impl AlarmCard {
    pub fn new(uuid: &str, entity_id: &str, translations: &Translator) -> Self {
        Self {
            body: CardBody::new(CardKind::Alarm, uuid),
            entity_id: bounded(entity_id),
            arm_buttons: Vec::new(),
            disarm_button: AlarmButtonItem::new(
                suffixed_uuid(uuid, "_d").as_str(),
                token::DISARM,
                translations.get_translation(token::DISARM),
            ),
            status_icon: AlarmIconItem::new(
                suffixed_uuid(uuid, "_s").as_str(),
                Icon::new(glyph::SHIELD_OFF, color::GREEN),
            ),
            info_icon: AlarmIconItem::new(
                suffixed_uuid(uuid, "_i").as_str(),
                Icon::new(glyph::PROGRESS_ALERT, color::ORANGE),
            ),
            show_keypad: true,
            status_icon_flashing: false,
        }
    }

    pub fn body(&self) -> &CardBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut CardBody {
        &mut self.body
    }

    pub fn entity_id(&self) -> &str {
        self.entity_id.as_str()
    }

    pub fn show_keypad(&self) -> bool {
        self.show_keypad
    }

    pub fn set_show_keypad(&mut self, show: bool) {
        if self.show_keypad != show {
            self.show_keypad = show;
            self.body.invalidate();
        }
    }

    /// Add an arm button; false once all keypad slots are taken
    ///
    /// The button label comes from the translation of the action token.
    pub fn add_arm_button(&mut self, action: ArmAction, translations: &Translator) -> bool {
        if self.arm_buttons.is_full() {
            return false;
        }

        let mut uuid = suffixed_uuid(self.body.uuid(), "_");
        let _ = uuid.push_str(action.token());

        let button = AlarmButtonItem::new(
            uuid.as_str(),
            action.token(),
            translations.get_translation(action.token()),
        );
        // Capacity checked above
        let _ = self.arm_buttons.push(button);
        self.body.invalidate();
        true
    }

    pub fn on_entity_state_change(&mut self, new_state: &str) {
        self.status_icon_flashing = new_state == state::TRIGGERED
            || new_state == state::ARMING
            || new_state == state::PENDING;

        let icon = icon_for(ALARM_ICON_MAP, new_state)
            .unwrap_or(Icon::new(glyph::HELP_CIRCLE, color::GREY));
        self.status_icon.set_icon(icon);
        self.body.invalidate();
    }

    pub fn on_entity_attribute_change(&mut self, attr: &str, value: &str) {
        match attr {
            attr::CODE_ARM_REQUIRED => self.set_show_keypad(value != state::OFF),
            attr::OPEN_SENSORS => self.body.invalidate(),
            _ => {}
        }
    }

    fn flag(on: bool) -> &'static str {
        if on {
            token::ENABLE
        } else {
            token::DISABLE
        }
    }

    pub fn render(&mut self, ctx: &RenderContext<'_>) -> &str {
        let entity = ctx.entities.get(self.entity_id.as_str());
        let disarmed = match entity {
            Some(e) => e.is_state(state::UNKNOWN) || e.is_state(state::DISARMED),
            None => true,
        };
        let open_sensors = entity.map_or("", |e| e.get_attribute(attr::OPEN_SENSORS, ""));

        let mut buf = self.body.begin();
        let _ = buf.push_str(self.entity_id.as_str());

        if disarmed {
            for button in self.arm_buttons.iter_mut() {
                let _ = buf.push(SEPARATOR);
                let _ = buf.push_str(button.render());
            }
            write_padding(
                &mut buf,
                BUTTON_FIELD_COUNT * (MAX_ARM_BUTTONS - self.arm_buttons.len()),
            );
        } else {
            let _ = buf.push(SEPARATOR);
            let _ = buf.push_str(self.disarm_button.render());
            write_padding(&mut buf, BUTTON_FIELD_COUNT * (MAX_ARM_BUTTONS - 1));
        }

        let _ = buf.push(SEPARATOR);
        let _ = buf.push_str(self.status_icon.render());

        let _ = buf.push(SEPARATOR);
        let _ = buf.push_str(Self::flag(self.show_keypad));

        let _ = buf.push(SEPARATOR);
        let _ = buf.push_str(Self::flag(self.status_icon_flashing));

        if !open_sensors.is_empty() {
            let _ = buf.push(SEPARATOR);
            let _ = buf.push_str(self.info_icon.render());
        }

        self.body.finish(buf)
    }
}
