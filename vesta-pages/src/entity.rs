//! Entity mirror and registry
//!
//! An [`Entity`] is the local mirror of one remote smart-home object: a
//! state string plus a string-valued attribute map. Numeric and boolean
//! semantics are interpreted by the consumers, never here.
//!
//! Entities carry a list of subscriber handles. The handles are opaque
//! card ids resolved through [`crate::pages::Pages`]; an entity never
//! holds a reference to a subscriber, so subscriber lifetime cannot be
//! violated from this side.

use heapless::{FnvIndexMap, String, Vec};

use crate::bounded;
use crate::pages::CardId;
use vesta_protocol::tokens::state;

/// Maximum length of an entity id (`domain.object_id`)
pub const ENTITY_ID_LEN: usize = 48;

/// Maximum length of a state string
pub const STATE_LEN: usize = 32;

/// Maximum length of an attribute name
pub const ATTR_NAME_LEN: usize = 24;

/// Maximum length of an attribute value
pub const ATTR_VALUE_LEN: usize = 64;

/// Maximum attributes per entity (power of two)
pub const MAX_ATTRIBUTES: usize = 16;

/// Maximum subscribers per entity
pub const MAX_SUBSCRIBERS: usize = 8;

/// Maximum tracked entities (power of two)
pub const MAX_ENTITIES: usize = 32;

/// Local mirror of a remote smart-home object
#[derive(Debug, Clone)]
pub struct Entity {
    entity_id: String<ENTITY_ID_LEN>,
    state: String<STATE_LEN>,
    attributes: FnvIndexMap<String<ATTR_NAME_LEN>, String<ATTR_VALUE_LEN>, MAX_ATTRIBUTES>,
    subscribers: Vec<CardId, MAX_SUBSCRIBERS>,
}

impl Entity {
    /// Create an entity in the `unknown` state with no attributes
    pub fn new(entity_id: &str) -> Self {
        Self {
            entity_id: bounded(entity_id),
            state: bounded(state::UNKNOWN),
            attributes: FnvIndexMap::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn get_entity_id(&self) -> &str {
        self.entity_id.as_str()
    }

    pub fn get_state(&self) -> &str {
        self.state.as_str()
    }

    /// Check the current state against a value
    pub fn is_state(&self, value: &str) -> bool {
        self.state.as_str() == value
    }

    /// Store a new state string
    ///
    /// Storage only; notification is routed by the page table so that
    /// the entity is never borrowed while its subscribers run.
    pub fn set_state(&mut self, new_state: &str) {
        self.state = bounded(new_state);
    }

    /// Get an attribute value, or `default` when absent
    ///
    /// Lookup keys are bounded the same way stored keys are, so a key
    /// past the capacity finds the entry its truncated form created.
    pub fn get_attribute<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.attributes
            .get(&bounded::<ATTR_NAME_LEN>(key))
            .map(|v| v.as_str())
            .unwrap_or(default)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(&bounded::<ATTR_NAME_LEN>(key))
    }

    /// Store an attribute value, replacing any previous one
    ///
    /// Returns false when the attribute table is full and the key is
    /// new; the previous set of attributes is left untouched.
    pub fn set_attribute(&mut self, key: &str, value: &str) -> bool {
        if let Some(slot) = self.attributes.get_mut(&bounded::<ATTR_NAME_LEN>(key)) {
            *slot = bounded(value);
            return true;
        }
        self.attributes.insert(bounded(key), bounded(value)).is_ok()
    }

    /// Register a subscriber handle; duplicates are ignored
    ///
    /// Returns false when the subscriber list is full.
    pub fn add_subscriber(&mut self, id: CardId) -> bool {
        if self.subscribers.contains(&id) {
            return true;
        }
        self.subscribers.push(id).is_ok()
    }

    /// Remove a subscriber handle; absent handles are a no-op
    pub fn remove_subscriber(&mut self, id: CardId) {
        self.subscribers.retain(|s| *s != id);
    }

    /// Subscriber handles in subscription order
    pub fn subscribers(&self) -> &[CardId] {
        &self.subscribers
    }
}

/// All entities the panel tracks, keyed by entity id
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: FnvIndexMap<String<ENTITY_ID_LEN>, Entity, MAX_ENTITIES>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            entities: FnvIndexMap::new(),
        }
    }

    /// Insert an entity, returning false when the registry is full
    pub fn insert(&mut self, entity: Entity) -> bool {
        let key = entity.entity_id.clone();
        self.entities.insert(key, entity).is_ok()
    }

    pub fn get(&self, entity_id: &str) -> Option<&Entity> {
        self.entities.get(&bounded::<ENTITY_ID_LEN>(entity_id))
    }

    pub fn get_mut(&mut self, entity_id: &str) -> Option<&mut Entity> {
        self.entities.get_mut(&bounded::<ENTITY_ID_LEN>(entity_id))
    }

    /// Remove an entity from tracking
    pub fn remove(&mut self, entity_id: &str) -> Option<Entity> {
        self.entities.remove(&bounded::<ENTITY_ID_LEN>(entity_id))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_is_unknown() {
        let entity = Entity::new("climate.living_room");
        assert_eq!(entity.get_state(), "unknown");
        assert!(entity.is_state("unknown"));
        assert_eq!(entity.get_entity_id(), "climate.living_room");
    }

    #[test]
    fn test_attribute_default() {
        let mut entity = Entity::new("climate.living_room");
        assert_eq!(entity.get_attribute("min_temp", "0"), "0");
        assert!(!entity.has_attribute("min_temp"));

        assert!(entity.set_attribute("min_temp", "7"));
        assert_eq!(entity.get_attribute("min_temp", "0"), "7");
        assert!(entity.has_attribute("min_temp"));
    }

    #[test]
    fn test_attribute_replace() {
        let mut entity = Entity::new("light.desk");
        entity.set_attribute("brightness", "10");
        entity.set_attribute("brightness", "200");
        assert_eq!(entity.get_attribute("brightness", ""), "200");
    }

    #[test]
    fn test_overlong_attribute_key_truncates_consistently() {
        let mut entity = Entity::new("sensor.outside");
        let long_key = "attribute_name_well_beyond_the_limit";
        assert!(long_key.len() > ATTR_NAME_LEN);

        assert!(entity.set_attribute(long_key, "42"));
        assert_eq!(entity.get_attribute(long_key, ""), "42");
        assert!(entity.has_attribute(long_key));
        assert!(entity.has_attribute(&long_key[..ATTR_NAME_LEN]));
    }

    #[test]
    fn test_add_subscriber_is_idempotent() {
        let mut entity = Entity::new("alarm_control_panel.home");
        let id = CardId::new(3);
        assert!(entity.add_subscriber(id));
        assert!(entity.add_subscriber(id));
        assert_eq!(entity.subscribers(), &[id]);
    }

    #[test]
    fn test_remove_absent_subscriber_is_noop() {
        let mut entity = Entity::new("alarm_control_panel.home");
        entity.add_subscriber(CardId::new(1));
        entity.remove_subscriber(CardId::new(9));
        assert_eq!(entity.subscribers().len(), 1);
    }

    #[test]
    fn test_subscription_order_preserved() {
        let mut entity = Entity::new("media_player.kitchen");
        for n in [4u8, 1, 3] {
            entity.add_subscriber(CardId::new(n));
        }
        let order: std::vec::Vec<u8> = entity.subscribers().iter().map(|id| id.value()).collect();
        assert_eq!(order, [4, 1, 3]);
    }

    #[test]
    fn test_registry_roundtrip() {
        let mut registry = EntityRegistry::new();
        assert!(registry.insert(Entity::new("sensor.outside")));
        assert!(registry.get("sensor.outside").is_some());
        assert!(registry.get("sensor.inside").is_none());

        registry.get_mut("sensor.outside").unwrap().set_state("21.5");
        assert_eq!(registry.get("sensor.outside").unwrap().get_state(), "21.5");

        assert!(registry.remove("sensor.outside").is_some());
        assert!(registry.is_empty());
    }
}
