//! Cards: full page payloads with a fixed wire schema
//!
//! Every card message follows the same frame:
//!
//! ```text
//! <instruction>~<title>~<nav block>~<card payload>
//! ```
//!
//! The navigation block always renders two slots (previous/next);
//! unconfigured slots emit the delete sentinel so the block width never
//! changes. The payload layout is card-kind specific and lives with the
//! concrete card types.

pub mod alarm;
pub mod basic;
pub mod media;
pub mod thermo;

use core::fmt::Write;
use core::mem;

use heapless::String;

use vesta_protocol::tokens::token;
use vesta_protocol::{CardKind, SEPARATOR};

use crate::bounded;
use crate::config::Configuration;
use crate::entity::EntityRegistry;
use crate::page_item::{NavigationItem, UUID_LEN};
use crate::translations::Translator;

pub use alarm::AlarmCard;
pub use basic::{EntitiesCard, GridCard, QRCard};
pub use media::MediaCard;
pub use thermo::ThermoCard;

/// Maximum length of a card title
pub const TITLE_LEN: usize = 32;

/// Capacity of a card's render buffer
pub const CARD_BUF_LEN: usize = 1024;

/// Maximum page items a card can own
pub const MAX_CARD_ITEMS: usize = 8;

/// Seconds before the panel dims an idle card
pub const DEFAULT_SLEEP_TIMEOUT: u16 = 10;

/// Number of separators the blank navigation sentinel carries
const NAV_BLANK_SEPARATORS: u8 = 5;

/// Collaborators a card render draws on
///
/// Bundled so render signatures stay stable as collaborators grow.
pub struct RenderContext<'a> {
    pub entities: &'a EntityRegistry,
    pub config: &'a Configuration,
    pub translations: &'a Translator,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        entities: &'a EntityRegistry,
        config: &'a Configuration,
        translations: &'a Translator,
    ) -> Self {
        Self {
            entities,
            config,
            translations,
        }
    }
}

/// Identity, navigation slots and render buffer shared by every card
#[derive(Debug)]
pub struct CardBody {
    kind: CardKind,
    uuid: String<UUID_LEN>,
    title: String<TITLE_LEN>,
    sleep_timeout: u16,
    nav_left: Option<NavigationItem>,
    nav_right: Option<NavigationItem>,
    buffer: String<CARD_BUF_LEN>,
    render_invalid: bool,
}

impl CardBody {
    pub fn new(kind: CardKind, uuid: &str) -> Self {
        Self {
            kind,
            uuid: bounded(uuid),
            title: String::new(),
            sleep_timeout: DEFAULT_SLEEP_TIMEOUT,
            nav_left: None,
            nav_right: None,
            buffer: String::new(),
            render_invalid: true,
        }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn uuid(&self) -> &str {
        self.uuid.as_str()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = bounded(title);
        self.render_invalid = true;
    }

    pub fn sleep_timeout(&self) -> u16 {
        self.sleep_timeout
    }

    pub fn set_sleep_timeout(&mut self, seconds: u16) {
        self.sleep_timeout = seconds;
    }

    pub fn set_nav_left(&mut self, item: NavigationItem) {
        self.nav_left = Some(item);
        self.render_invalid = true;
    }

    pub fn set_nav_right(&mut self, item: NavigationItem) {
        self.nav_right = Some(item);
        self.render_invalid = true;
    }

    /// Mark the card for re-render
    pub fn invalidate(&mut self) {
        self.render_invalid = true;
    }

    /// Whether the last rendered message is stale
    pub fn is_render_invalid(&self) -> bool {
        self.render_invalid
    }

    /// Take the buffer and write the message header into it
    ///
    /// Pairs with [`CardBody::finish`]; the buffer travels through the
    /// card-specific payload code in between so the body stays
    /// borrowable while the payload is written.
    pub(crate) fn begin(&mut self) -> String<CARD_BUF_LEN> {
        let mut buf = mem::take(&mut self.buffer);
        buf.clear();
        let _ = write!(
            buf,
            "{}{SEPARATOR}{}{SEPARATOR}",
            self.kind.render_instruction(),
            self.title
        );
        match &mut self.nav_left {
            Some(item) => {
                let _ = buf.push_str(item.render());
            }
            None => write_blank_nav_slot(&mut buf),
        }
        let _ = buf.push(SEPARATOR);
        match &mut self.nav_right {
            Some(item) => {
                let _ = buf.push_str(item.render());
            }
            None => write_blank_nav_slot(&mut buf),
        }
        let _ = buf.push(SEPARATOR);
        buf
    }

    /// Store the completed message and return it
    pub(crate) fn finish(&mut self, buf: String<CARD_BUF_LEN>) -> &str {
        self.buffer = buf;
        self.render_invalid = false;
        self.buffer.as_str()
    }
}

/// Empty navigation slot: same field count as a navigation item
fn write_blank_nav_slot(buf: &mut String<CARD_BUF_LEN>) {
    let _ = buf.push_str(token::DELETE);
    for _ in 0..NAV_BLANK_SEPARATORS {
        let _ = buf.push(SEPARATOR);
    }
}

/// Append `count` empty fields (separators only)
pub(crate) fn write_padding(buf: &mut String<CARD_BUF_LEN>, count: usize) {
    for _ in 0..count {
        let _ = buf.push(SEPARATOR);
    }
}

/// Derive a child item uuid from the card uuid
pub(crate) fn suffixed_uuid(base: &str, suffix: &str) -> String<UUID_LEN> {
    let mut uuid = String::new();
    let _ = uuid.push_str(base);
    let _ = uuid.push_str(suffix);
    uuid
}

/// A card of any kind, dispatched by match
#[derive(Debug)]
pub enum Card {
    Grid(GridCard),
    Entities(EntitiesCard),
    Qr(QRCard),
    Alarm(AlarmCard),
    Thermo(ThermoCard),
    Media(MediaCard),
}

impl Card {
    pub fn kind(&self) -> CardKind {
        self.body().kind()
    }

    pub fn uuid(&self) -> &str {
        self.body().uuid()
    }

    pub fn body(&self) -> &CardBody {
        match self {
            Card::Grid(card) => card.body(),
            Card::Entities(card) => card.body(),
            Card::Qr(card) => card.body(),
            Card::Alarm(card) => card.body(),
            Card::Thermo(card) => card.body(),
            Card::Media(card) => card.body(),
        }
    }

    pub fn body_mut(&mut self) -> &mut CardBody {
        match self {
            Card::Grid(card) => card.body_mut(),
            Card::Entities(card) => card.body_mut(),
            Card::Qr(card) => card.body_mut(),
            Card::Alarm(card) => card.body_mut(),
            Card::Thermo(card) => card.body_mut(),
            Card::Media(card) => card.body_mut(),
        }
    }

    /// Entity this card mirrors, if it mirrors one
    pub fn tracked_entity(&self) -> Option<&str> {
        match self {
            Card::Grid(_) | Card::Entities(_) | Card::Qr(_) => None,
            Card::Alarm(card) => Some(card.entity_id()),
            Card::Thermo(card) => Some(card.entity_id()),
            Card::Media(card) => Some(card.entity_id()),
        }
    }

    /// Rebuild the full wire message for this card
    pub fn render(&mut self, ctx: &RenderContext<'_>) -> &str {
        match self {
            Card::Grid(card) => card.render(ctx),
            Card::Entities(card) => card.render(ctx),
            Card::Qr(card) => card.render(ctx),
            Card::Alarm(card) => card.render(ctx),
            Card::Thermo(card) => card.render(ctx),
            Card::Media(card) => card.render(ctx),
        }
    }

    /// Entity state changed on the tracked entity
    pub fn on_entity_state_change(&mut self, new_state: &str) {
        match self {
            Card::Alarm(card) => card.on_entity_state_change(new_state),
            Card::Thermo(_) | Card::Media(_) => self.body_mut().invalidate(),
            Card::Grid(_) | Card::Entities(_) | Card::Qr(_) => {}
        }
    }

    /// Entity attribute changed on the tracked entity
    pub fn on_entity_attribute_change(&mut self, attr: &str, value: &str) {
        match self {
            Card::Alarm(card) => card.on_entity_attribute_change(attr, value),
            Card::Thermo(_) | Card::Media(_) => self.body_mut().invalidate(),
            Card::Grid(_) | Card::Entities(_) | Card::Qr(_) => {}
        }
    }
}

impl From<GridCard> for Card {
    fn from(card: GridCard) -> Self {
        Card::Grid(card)
    }
}

impl From<EntitiesCard> for Card {
    fn from(card: EntitiesCard) -> Self {
        Card::Entities(card)
    }
}

impl From<QRCard> for Card {
    fn from(card: QRCard) -> Self {
        Card::Qr(card)
    }
}

impl From<AlarmCard> for Card {
    fn from(card: AlarmCard) -> Self {
        Card::Alarm(card)
    }
}

impl From<ThermoCard> for Card {
    fn from(card: ThermoCard) -> Self {
        Card::Thermo(card)
    }
}

impl From<MediaCard> for Card {
    fn from(card: MediaCard) -> Self {
        Card::Media(card)
    }
}
