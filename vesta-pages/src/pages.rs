//! Page table: card ownership and update routing
//!
//! Cards are owned here and addressed by [`CardId`] handles. Entities
//! record the handles of subscribed cards; when an update arrives the
//! table resolves each handle and forwards the change. A handle whose
//! card has been removed simply fails to resolve, so stale
//! subscriptions degrade to no-ops instead of dangling.

use heapless::{FnvIndexMap, Vec};

use crate::card::{Card, RenderContext};
use crate::entity::{EntityRegistry, MAX_SUBSCRIBERS};

/// Maximum cards the table holds (power of two)
pub const MAX_CARDS: usize = 16;

/// Opaque handle to a card owned by [`Pages`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CardId(u8);

impl CardId {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// Owns every card and routes entity updates to subscribers
#[derive(Debug, Default)]
pub struct Pages {
    cards: FnvIndexMap<CardId, Card, MAX_CARDS>,
    next_id: u8,
}

impl Pages {
    pub fn new() -> Self {
        Self {
            cards: FnvIndexMap::new(),
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> CardId {
        // Ids wrap at 256; skip any still held by a live card
        loop {
            let id = CardId::new(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            if !self.cards.contains_key(&id) {
                return id;
            }
        }
    }

    /// Take ownership of a card and subscribe it to its tracked entity
    ///
    /// Returns `None` when the table is full.
    pub fn add(&mut self, card: impl Into<Card>, entities: &mut EntityRegistry) -> Option<CardId> {
        if self.cards.len() >= MAX_CARDS {
            return None;
        }
        let card = card.into();
        let id = self.allocate_id();

        if let Some(entity_id) = card.tracked_entity() {
            if let Some(entity) = entities.get_mut(entity_id) {
                let _ = entity.add_subscriber(id);
            }
        }

        // Capacity checked above
        let _ = self.cards.insert(id, card);
        Some(id)
    }

    /// Remove a card, unsubscribing it from its tracked entity
    pub fn remove(&mut self, id: CardId, entities: &mut EntityRegistry) -> Option<Card> {
        let card = self.cards.remove(&id)?;
        if let Some(entity_id) = card.tracked_entity() {
            if let Some(entity) = entities.get_mut(entity_id) {
                entity.remove_subscriber(id);
            }
        }
        Some(card)
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Render one card by handle
    pub fn render(&mut self, id: CardId, ctx: &RenderContext<'_>) -> Option<&str> {
        self.cards.get_mut(&id).map(|card| card.render(ctx))
    }

    /// Store a new entity state and notify subscribed cards
    ///
    /// Returns false when the entity is not tracked. Handles that no
    /// longer resolve to a card are skipped.
    pub fn on_state_update(
        &mut self,
        entities: &mut EntityRegistry,
        entity_id: &str,
        new_state: &str,
    ) -> bool {
        let Some(entity) = entities.get_mut(entity_id) else {
            return false;
        };
        entity.set_state(new_state);

        // Copy the handles out so the entity borrow ends before any
        // subscriber runs
        let subscribers: Vec<CardId, MAX_SUBSCRIBERS> =
            entity.subscribers().iter().copied().collect();
        for id in subscribers {
            if let Some(card) = self.cards.get_mut(&id) {
                card.on_entity_state_change(new_state);
            }
        }
        true
    }

    /// Store a new attribute value and notify subscribed cards
    ///
    /// Returns false when the entity is not tracked or the attribute
    /// table is full.
    pub fn on_attribute_update(
        &mut self,
        entities: &mut EntityRegistry,
        entity_id: &str,
        attr: &str,
        value: &str,
    ) -> bool {
        let Some(entity) = entities.get_mut(entity_id) else {
            return false;
        };
        if !entity.set_attribute(attr, value) {
            return false;
        }

        let subscribers: Vec<CardId, MAX_SUBSCRIBERS> =
            entity.subscribers().iter().copied().collect();
        for id in subscribers {
            if let Some(card) = self.cards.get_mut(&id) {
                card.on_entity_attribute_change(attr, value);
            }
        }
        true
    }
}
