//! Thermostat card

use core::fmt::Write;

use heapless::String;

use vesta_protocol::icons::{color, glyph, glyph_or, CLIMATE_ICON_MAP};
use vesta_protocol::tokens::{attr, state};
use vesta_protocol::{scale_x10_str, CardKind, SEPARATOR};

use super::{write_padding, CardBody, RenderContext};
use crate::bounded;
use crate::config::Configuration;
use crate::entity::{Entity, ENTITY_ID_LEN};

/// Hvac mode slots the panel dial provides
pub const MODE_SLOT_COUNT: usize = 8;

/// Fields one hvac mode occupies on the wire
const MODE_FIELD_COUNT: usize = 4;

fn attr_of<'a>(entity: Option<&'a Entity>, key: &str, default: &'static str) -> &'a str {
    match entity {
        Some(e) => e.get_attribute(key, default),
        None => default,
    }
}

/// Dial colour for an hvac mode's glyph
fn hvac_mode_color(mode: &str) -> u16 {
    if mode == state::AUTO || mode == state::HEAT_COOL {
        color::DARK_GREEN
    } else if mode == state::OFF || mode == state::FAN_ONLY {
        color::LIGHT_GREY
    } else if mode == state::COOL {
        color::LIGHT_BLUE
    } else if mode == state::DRY {
        color::LIGHT_ORANGE
    } else {
        color::DARK_ORANGE
    }
}

/// Mirrors a climate entity on the thermostat dial
///
/// Temperatures travel as fixed-point x10 integers. Entities with a
/// single setpoint render it from the `temperature` attribute; dual
/// setpoint entities fall back to the high/low target pair, with the
/// low target carried in a trailer field the dial layout reserves for
/// it.
#[derive(Debug)]
pub struct ThermoCard {
    body: CardBody,
    entity_id: String<ENTITY_ID_LEN>,
    temperature_unit: &'static str,
    temperature_unit_icon: char,
}

impl ThermoCard {
    /// The temperature unit is fixed at construction time
    pub fn new(uuid: &str, entity_id: &str, config: &Configuration) -> Self {
        Self {
            body: CardBody::new(CardKind::Thermo, uuid),
            entity_id: bounded(entity_id),
            temperature_unit: config.get_temperature_unit_str(),
            temperature_unit_icon: config.temperature_unit_icon(),
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

    pub fn render(&mut self, ctx: &RenderContext<'_>) -> &str {
        let entity = ctx.entities.get(self.entity_id.as_str());

        // Single-setpoint entities use `temperature`; dual-setpoint
        // entities report the high/low target pair instead.
        let temperature = attr_of(entity, attr::TEMPERATURE, "");
        let (dest_temp, dest_temp2) = if temperature.is_empty() {
            let high = scale_x10_str(attr_of(entity, attr::TARGET_TEMP_HIGH, "0"), 0.0);
            let low_raw = attr_of(entity, attr::TARGET_TEMP_LOW, "");
            let low = if low_raw.is_empty() {
                None
            } else {
                Some(scale_x10_str(low_raw, 0.0))
            };
            (high, low)
        } else {
            (scale_x10_str(temperature, 0.0), None)
        };

        let hvac_action = attr_of(entity, attr::HVAC_ACTION, "");
        let entity_state = entity.map_or(state::UNKNOWN, Entity::get_state);

        let mut buf = self.body.begin();
        let _ = buf.push_str(self.entity_id.as_str());
        let _ = buf.push(SEPARATOR);

        let _ = write!(
            buf,
            "{} {}{SEPARATOR}{}{SEPARATOR}",
            attr_of(entity, attr::CURRENT_TEMPERATURE, ""),
            self.temperature_unit,
            dest_temp
        );

        if !hvac_action.is_empty() {
            let _ = buf.push_str(ctx.translations.get_translation(hvac_action));
            let _ = buf.push_str("\r\n(");
        }
        let _ = buf.push_str(ctx.translations.get_translation(entity_state));
        if !hvac_action.is_empty() {
            let _ = buf.push(')');
        }
        let _ = buf.push(SEPARATOR);

        let _ = write!(
            buf,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            scale_x10_str(attr_of(entity, attr::MIN_TEMP, "0"), 0.0),
            scale_x10_str(attr_of(entity, attr::MAX_TEMP, "0"), 0.0),
            scale_x10_str(attr_of(entity, attr::TARGET_TEMP_STEP, "0.5"), 0.5)
        );

        let hvac_modes = attr_of(entity, attr::HVAC_MODES, "");
        if hvac_modes.is_empty() {
            write_padding(&mut buf, MODE_FIELD_COUNT * MODE_SLOT_COUNT);
        } else {
            // The dial has 8 slots; anything past that is dropped so
            // the block never grows beyond its fixed width
            let mut rendered_modes = 0usize;
            for mode in hvac_modes.split(',').take(MODE_SLOT_COUNT) {
                let active = match entity {
                    Some(e) => e.is_state(mode),
                    None => false,
                };
                let _ = write!(
                    buf,
                    "{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
                    glyph_or(CLIMATE_ICON_MAP, mode, glyph::HELP_CIRCLE),
                    hvac_mode_color(mode),
                    if active { '1' } else { '0' },
                    mode
                );
                rendered_modes += 1;
            }
            write_padding(
                &mut buf,
                MODE_FIELD_COUNT * MODE_SLOT_COUNT.saturating_sub(rendered_modes),
            );
        }
        let _ = buf.push(SEPARATOR);

        let _ = write!(
            buf,
            "{}{SEPARATOR}{}{SEPARATOR}{SEPARATOR}{}{SEPARATOR}",
            ctx.translations.get_translation("currently"),
            ctx.translations.get_translation("state"),
            self.temperature_unit_icon
        );
        if let Some(low) = dest_temp2 {
            let _ = write!(buf, "{low}");
        }
        let _ = buf.push(SEPARATOR);

        // A '1' hides the mode picker row the pickers would occupy
        let has_pickers = match entity {
            Some(e) => {
                e.has_attribute(attr::PRESET_MODES)
                    || e.has_attribute(attr::SWING_MODES)
                    || e.has_attribute(attr::FAN_MODES)
            }
            None => false,
        };
        let _ = buf.push(if has_pickers { '0' } else { '1' });

        self.body.finish(buf)
    }
}
