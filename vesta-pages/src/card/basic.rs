//! Grid, entities and QR cards
//!
//! The simple layouts: a header followed by the owned item slots in
//! insertion order. The QR card injects its encoded text between header
//! and items.

use heapless::{String, Vec};

use vesta_protocol::{CardKind, SEPARATOR};

use super::{CardBody, RenderContext, CARD_BUF_LEN, MAX_CARD_ITEMS};
use crate::bounded;
use crate::page_item::PageItem;

/// Maximum length of the QR-encoded text
pub const QR_TEXT_LEN: usize = 64;

/// Append each item slot, separator first
fn write_items(buf: &mut String<CARD_BUF_LEN>, items: &mut Vec<PageItem, MAX_CARD_ITEMS>) {
    for item in items.iter_mut() {
        let _ = buf.push(SEPARATOR);
        let _ = buf.push_str(item.render());
    }
}

/// Grid of icon tiles
#[derive(Debug)]
pub struct GridCard {
    body: CardBody,
    items: Vec<PageItem, MAX_CARD_ITEMS>,
}

impl GridCard {
    pub fn new(uuid: &str) -> Self {
        Self {
            body: CardBody::new(CardKind::Grid, uuid),
            items: Vec::new(),
        }
    }

    pub fn body(&self) -> &CardBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut CardBody {
        &mut self.body
    }

    /// Append an item; false when the card is full
    pub fn add_item(&mut self, item: impl Into<PageItem>) -> bool {
        let ok = self.items.push(item.into()).is_ok();
        if ok {
            self.body.invalidate();
        }
        ok
    }

    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    pub fn render(&mut self, _ctx: &RenderContext<'_>) -> &str {
        let mut buf = self.body.begin();
        write_items(&mut buf, &mut self.items);
        self.body.finish(buf)
    }
}

/// Vertical list of labelled entity rows
#[derive(Debug)]
pub struct EntitiesCard {
    body: CardBody,
    items: Vec<PageItem, MAX_CARD_ITEMS>,
}

impl EntitiesCard {
    pub fn new(uuid: &str) -> Self {
        Self {
            body: CardBody::new(CardKind::Entities, uuid),
            items: Vec::new(),
        }
    }

    pub fn body(&self) -> &CardBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut CardBody {
        &mut self.body
    }

    /// Append an item; false when the card is full
    pub fn add_item(&mut self, item: impl Into<PageItem>) -> bool {
        let ok = self.items.push(item.into()).is_ok();
        if ok {
            self.body.invalidate();
        }
        ok
    }

    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    pub fn render(&mut self, _ctx: &RenderContext<'_>) -> &str {
        let mut buf = self.body.begin();
        write_items(&mut buf, &mut self.items);
        self.body.finish(buf)
    }
}

/// QR code page with caption items
#[derive(Debug)]
pub struct QRCard {
    body: CardBody,
    qr_text: String<QR_TEXT_LEN>,
    items: Vec<PageItem, MAX_CARD_ITEMS>,
}

impl QRCard {
    pub fn new(uuid: &str, qr_text: &str) -> Self {
        Self {
            body: CardBody::new(CardKind::Qr, uuid),
            qr_text: bounded(qr_text),
            items: Vec::new(),
        }
    }

    pub fn body(&self) -> &CardBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut CardBody {
        &mut self.body
    }

    pub fn qr_text(&self) -> &str {
        self.qr_text.as_str()
    }

    pub fn set_qr_text(&mut self, text: &str) {
        self.qr_text = bounded(text);
        self.body.invalidate();
    }

    /// Append an item; false when the card is full
    pub fn add_item(&mut self, item: impl Into<PageItem>) -> bool {
        let ok = self.items.push(item.into()).is_ok();
        if ok {
            self.body.invalidate();
        }
        ok
    }

    pub fn render(&mut self, _ctx: &RenderContext<'_>) -> &str {
        let mut buf = self.body.begin();
        let _ = buf.push_str(self.qr_text.as_str());
        write_items(&mut buf, &mut self.items);
        self.body.finish(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::entity::EntityRegistry;
    use crate::page_item::{DeleteItem, NavigationItem};
    use crate::translations::Translator;
    use std::format;
    use vesta_protocol::icons::glyph;
    use vesta_protocol::Icon;

    fn ctx_parts() -> (EntityRegistry, Configuration, Translator) {
        (
            EntityRegistry::new(),
            Configuration::default(),
            Translator::new(),
        )
    }

    #[test]
    fn test_empty_grid_renders_header_with_blank_nav() {
        let (entities, config, translations) = ctx_parts();
        let ctx = RenderContext::new(&entities, &config, &translations);

        let mut card = GridCard::new("page_1");
        card.body_mut().set_title("Home");
        assert_eq!(card.render(&ctx), "entityUpd~Home~delete~~~~~~delete~~~~~~");
    }

    #[test]
    fn test_grid_nav_slots_keep_block_width() {
        let (entities, config, translations) = ctx_parts();
        let ctx = RenderContext::new(&entities, &config, &translations);

        let mut card = GridCard::new("page_2");
        card.body_mut().set_nav_left(
            NavigationItem::new("nav_prev", "page_1").with_icon(Icon::new(glyph::FIRE, 65535)),
        );

        let rendered = card.render(&ctx);
        let expected = format!(
            "entityUpd~~button~navigate.uuid.page_1~{}~65535~~~delete~~~~~~",
            glyph::FIRE
        );
        assert_eq!(rendered, expected);

        // Both shapes have the same separator count up to the payload
        let blank: usize = "delete~~~~~".matches('~').count();
        let nav: usize = format!("button~navigate.uuid.page_1~{}~65535~~", glyph::FIRE)
            .matches('~')
            .count();
        assert_eq!(blank, nav);
    }

    #[test]
    fn test_grid_items_render_in_insertion_order() {
        let (entities, config, translations) = ctx_parts();
        let ctx = RenderContext::new(&entities, &config, &translations);

        let mut card = GridCard::new("page_3");
        assert!(card.add_item(DeleteItem::with_separator_count(1)));
        assert!(card.add_item(DeleteItem::with_separator_count(2)));

        assert!(card.render(&ctx).ends_with("~delete~~delete~~"));
    }

    #[test]
    fn test_grid_capacity() {
        let mut card = GridCard::new("page_4");
        for _ in 0..MAX_CARD_ITEMS {
            assert!(card.add_item(DeleteItem::with_separator_count(1)));
        }
        assert!(!card.add_item(DeleteItem::with_separator_count(1)));
    }

    #[test]
    fn test_qr_card_payload_between_header_and_items() {
        let (entities, config, translations) = ctx_parts();
        let ctx = RenderContext::new(&entities, &config, &translations);

        let mut card = QRCard::new("page_qr", "WIFI:S:home;T:WPA;P:hunter2;;");
        card.body_mut().set_title("Guest WiFi");
        assert!(card.add_item(DeleteItem::with_separator_count(1)));

        assert_eq!(
            card.render(&ctx),
            "entityUpd~Guest WiFi~delete~~~~~~delete~~~~~~WIFI:S:home;T:WPA;P:hunter2;;~delete~"
        );
    }

    #[test]
    fn test_render_clears_dirty_flag() {
        let (entities, config, translations) = ctx_parts();
        let ctx = RenderContext::new(&entities, &config, &translations);

        let mut card = EntitiesCard::new("page_5");
        assert!(card.body().is_render_invalid());
        card.render(&ctx);
        assert!(!card.body().is_render_invalid());

        card.body_mut().set_title("Sensors");
        assert!(card.body().is_render_invalid());
    }
}
