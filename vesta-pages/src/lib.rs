//! Card and page item rendering engine for the Vesta touch panel
//!
//! This crate turns live smart-home entity state into the positional
//! text messages the panel firmware draws:
//!
//! - Entity mirror with a subscriber registry (push-based updates)
//! - Page item fragments (icon, display name, value) and the concrete
//!   items composed from them
//! - Card layouts (grid, entities, QR, alarm, thermostat, media) with
//!   their fixed wire schemas
//! - A page table that owns every card and routes entity updates to the
//!   cards subscribed to them through stable handles
//!
//! # Architecture
//!
//! Everything is single threaded and callback driven. Backend updates
//! enter through [`Pages::on_state_update`] / [`Pages::on_attribute_update`],
//! which store the new value on the entity and synchronously notify
//! subscribed cards. Cards only mutate their own cached visual state in
//! those callbacks; serialization happens later, on demand, into a
//! reusable per-card buffer.
//!
//! Subscriptions are card handles, not references: a handle whose card
//! has been removed is simply skipped on notify, so a missed
//! unsubscription can never dangle.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod card;
pub mod config;
pub mod entity;
pub mod page_item;
pub mod pages;
pub mod translations;

pub use card::{
    AlarmCard, Card, CardBody, EntitiesCard, GridCard, MediaCard, QRCard, RenderContext,
    ThermoCard,
};
pub use config::{Configuration, TemperatureUnit};
pub use entity::{Entity, EntityRegistry};
pub use page_item::{
    AlarmButtonItem, AlarmIconItem, DeleteItem, NavigationItem, PageItem, StatusIconItem,
    WeatherItem,
};
pub use pages::{CardId, Pages};
pub use translations::Translator;

use heapless::String;

/// Copy a `&str` into a bounded string, truncating on overflow
///
/// Truncation is per character, never mid code point.
pub(crate) fn bounded<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounded_truncates_on_char_boundary() {
        // Two-byte code points; capacity 3 only fits one of them
        let out = bounded::<3>("ééé");
        assert_eq!(out.as_str(), "é");
    }

    proptest! {
        #[test]
        fn prop_bounded_is_a_prefix_within_capacity(s in ".{0,64}") {
            let out = bounded::<16>(&s);
            prop_assert!(out.len() <= 16);
            prop_assert!(s.starts_with(out.as_str()));
        }
    }
}
