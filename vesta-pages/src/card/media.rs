//! Media player card

use core::fmt::Write;

use heapless::{String, Vec};

use vesta_protocol::icons::{color, glyph, glyph_or, MEDIA_TYPE_ICON_MAP};
use vesta_protocol::tokens::{attr, state, token};
use vesta_protocol::{parse_f32_or, CardKind, SEPARATOR};

use super::{CardBody, RenderContext, MAX_CARD_ITEMS};
use crate::bounded;
use crate::entity::{Entity, ENTITY_ID_LEN};
use crate::page_item::PageItem;

/// The panel truncates title and artist beyond this
const TEXT_FIELD_MAX: usize = 40;

/// `supported_features` bit for on/off control
const FEATURE_TURN_ON_OFF: u32 = 1 << 7;

/// `supported_features` bit for shuffle control
const FEATURE_SHUFFLE: u32 = 1 << 14;

fn attr_of<'a>(entity: Option<&'a Entity>, key: &str, default: &'static str) -> &'a str {
    match entity {
        Some(e) => e.get_attribute(key, default),
        None => default,
    }
}

/// Mirrors a media player entity
///
/// Transport controls degrade with the entity's `supported_features`
/// bitmask: controls the player does not support render as disabled
/// fields rather than disappearing, so the layout never shifts.
#[derive(Debug)]
pub struct MediaCard {
    body: CardBody,
    entity_id: String<ENTITY_ID_LEN>,
    items: Vec<PageItem, MAX_CARD_ITEMS>,
}

impl MediaCard {
    pub fn new(uuid: &str, entity_id: &str) -> Self {
        Self {
            body: CardBody::new(CardKind::Media, uuid),
            entity_id: bounded(entity_id),
            items: Vec::new(),
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

    /// Append an item; false when the card is full
    pub fn add_item(&mut self, item: impl Into<PageItem>) -> bool {
        let ok = self.items.push(item.into()).is_ok();
        if ok {
            self.body.invalidate();
        }
        ok
    }

    pub fn render(&mut self, ctx: &RenderContext<'_>) -> &str {
        let entity = ctx.entities.get(self.entity_id.as_str());
        let playing = entity.is_some_and(|e| e.is_state(state::PLAYING));
        let off = entity.is_some_and(|e| e.is_state(state::OFF));
        let supported_features = attr_of(entity, attr::SUPPORTED_FEATURES, "")
            .trim()
            .parse::<u32>()
            .unwrap_or(0);
        let volume =
            (parse_f32_or(attr_of(entity, attr::VOLUME_LEVEL, "0"), 0.0) * 100.0) as u8;

        let mut buf = self.body.begin();
        let _ = buf.push_str(self.entity_id.as_str());
        let _ = buf.push(SEPARATOR);

        for c in attr_of(entity, attr::MEDIA_TITLE, "").chars().take(TEXT_FIELD_MAX) {
            let _ = buf.push(c);
        }
        let _ = write!(buf, "{SEPARATOR}{SEPARATOR}");

        for c in attr_of(entity, attr::MEDIA_ARTIST, "").chars().take(TEXT_FIELD_MAX) {
            let _ = buf.push(c);
        }
        let _ = write!(buf, "{SEPARATOR}{SEPARATOR}");

        let _ = write!(
            buf,
            "{volume}{SEPARATOR}{}{SEPARATOR}",
            if playing { glyph::PAUSE } else { glyph::PLAY }
        );

        // On/off button colour, or disabled when the player has no
        // power control
        if supported_features & FEATURE_TURN_ON_OFF != 0 {
            let button_color = if off { color::MEDIA_BLUE } else { color::MEDIA_ORANGE };
            let _ = write!(buf, "{button_color}");
        } else {
            let _ = buf.push_str(token::DISABLE);
        }
        let _ = buf.push(SEPARATOR);

        // Shuffle button glyph
        if supported_features & FEATURE_SHUFFLE != 0 {
            let shuffling = attr_of(entity, attr::SHUFFLE, "") == state::ON;
            let _ = buf.push(if shuffling {
                glyph::SHUFFLE
            } else {
                glyph::SHUFFLE_DISABLED
            });
        } else {
            let _ = buf.push_str(token::DISABLE);
        }
        let _ = buf.push(SEPARATOR);

        // Media source button: type~internalName~icon~iconColor~displayName~
        let media_icon = glyph_or(
            MEDIA_TYPE_ICON_MAP,
            attr_of(entity, attr::MEDIA_CONTENT_TYPE, ""),
            glyph::SPEAKER_OFF,
        );
        let _ = write!(
            buf,
            "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{SEPARATOR}",
            token::MEDIA_PLAYER,
            self.entity_id,
            media_icon,
            color::MEDIA_BUTTON
        );

        for item in self.items.iter_mut() {
            let _ = buf.push(SEPARATOR);
            let _ = buf.push_str(item.render());
        }
        if !self.items.is_empty() {
            let _ = buf.push(SEPARATOR);
        }

        self.body.finish(buf)
    }
}
