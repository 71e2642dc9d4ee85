//! Page items: the addressable UI elements inside a card
//!
//! A page item owns a reusable render buffer guarded by a dirty flag:
//! mutators invalidate, [`PageItem::render`] rebuilds only when needed
//! and otherwise returns the cached text. Items are built by composing
//! the value-holder fragments from [`fragments`] and serializing them in
//! the order the owning card's slot schema requires.

pub mod fragments;
pub mod items;

use heapless::String;

use crate::bounded;

pub use fragments::{DisplayNameFragment, IconFragment, ValueFragment};
pub use items::{
    AlarmButtonItem, AlarmIconItem, DeleteItem, NavigationItem, StatusIconItem, WeatherItem,
};

/// Maximum length of a page item uuid
pub const UUID_LEN: usize = 32;

/// Capacity of a page item's render buffer
pub const ITEM_BUF_LEN: usize = 128;

/// Maximum length of a display name
pub const DISPLAY_NAME_LEN: usize = 32;

/// Maximum length of a raw value string
pub const VALUE_LEN: usize = 16;

/// Identity and render cache shared by every page item
#[derive(Debug, Clone)]
pub struct PageItemBase {
    uuid: String<UUID_LEN>,
    buffer: String<ITEM_BUF_LEN>,
    render_invalid: bool,
}

impl PageItemBase {
    pub fn new(uuid: &str) -> Self {
        Self {
            uuid: bounded(uuid),
            buffer: String::new(),
            render_invalid: true,
        }
    }

    pub fn uuid(&self) -> &str {
        self.uuid.as_str()
    }

    /// Mark the cached buffer stale
    pub fn invalidate(&mut self) {
        self.render_invalid = true;
    }

    pub fn is_render_invalid(&self) -> bool {
        self.render_invalid
    }

    /// Return the cached buffer, rebuilding it first when stale
    ///
    /// `write` receives the item uuid and the cleared buffer.
    fn rendered(&mut self, write: impl FnOnce(&str, &mut String<ITEM_BUF_LEN>)) -> &str {
        if self.render_invalid {
            self.buffer.clear();
            write(self.uuid.as_str(), &mut self.buffer);
            self.render_invalid = false;
        }
        self.buffer.as_str()
    }
}

/// The closed set of page item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageItemKind {
    Navigation,
    StatusIcon,
    Weather,
    AlarmButton,
    AlarmIcon,
    Delete,
}

/// A page item of any kind, dispatched by match
#[derive(Debug, Clone)]
pub enum PageItem {
    Navigation(NavigationItem),
    StatusIcon(StatusIconItem),
    Weather(WeatherItem),
    AlarmButton(AlarmButtonItem),
    AlarmIcon(AlarmIconItem),
    Delete(DeleteItem),
}

impl PageItem {
    pub fn kind(&self) -> PageItemKind {
        match self {
            PageItem::Navigation(_) => PageItemKind::Navigation,
            PageItem::StatusIcon(_) => PageItemKind::StatusIcon,
            PageItem::Weather(_) => PageItemKind::Weather,
            PageItem::AlarmButton(_) => PageItemKind::AlarmButton,
            PageItem::AlarmIcon(_) => PageItemKind::AlarmIcon,
            PageItem::Delete(_) => PageItemKind::Delete,
        }
    }

    pub fn uuid(&self) -> &str {
        match self {
            PageItem::Navigation(item) => item.uuid(),
            PageItem::StatusIcon(item) => item.uuid(),
            PageItem::Weather(item) => item.uuid(),
            PageItem::AlarmButton(item) => item.uuid(),
            PageItem::AlarmIcon(item) => item.uuid(),
            PageItem::Delete(item) => item.uuid(),
        }
    }

    /// Serialize this item's slot, reusing the cached buffer when clean
    pub fn render(&mut self) -> &str {
        match self {
            PageItem::Navigation(item) => item.render(),
            PageItem::StatusIcon(item) => item.render(),
            PageItem::Weather(item) => item.render(),
            PageItem::AlarmButton(item) => item.render(),
            PageItem::AlarmIcon(item) => item.render(),
            PageItem::Delete(item) => item.render(),
        }
    }

    /// Mark the cached buffer stale
    pub fn invalidate(&mut self) {
        match self {
            PageItem::Navigation(item) => item.invalidate(),
            PageItem::StatusIcon(item) => item.invalidate(),
            PageItem::Weather(item) => item.invalidate(),
            PageItem::AlarmButton(item) => item.invalidate(),
            PageItem::AlarmIcon(item) => item.invalidate(),
            PageItem::Delete(item) => item.invalidate(),
        }
    }
}

impl From<NavigationItem> for PageItem {
    fn from(item: NavigationItem) -> Self {
        PageItem::Navigation(item)
    }
}

impl From<StatusIconItem> for PageItem {
    fn from(item: StatusIconItem) -> Self {
        PageItem::StatusIcon(item)
    }
}

impl From<WeatherItem> for PageItem {
    fn from(item: WeatherItem) -> Self {
        PageItem::Weather(item)
    }
}

impl From<AlarmButtonItem> for PageItem {
    fn from(item: AlarmButtonItem) -> Self {
        PageItem::AlarmButton(item)
    }
}

impl From<AlarmIconItem> for PageItem {
    fn from(item: AlarmIconItem) -> Self {
        PageItem::AlarmIcon(item)
    }
}

impl From<DeleteItem> for PageItem {
    fn from(item: DeleteItem) -> Self {
        PageItem::Delete(item)
    }
}
