/*!
Key slots shown on a playground.

Each slot is one draggable key: a descriptor the presentation layer can
render, plus the key material the session uses when the key is applied.
Pair-based demos get two slots per generated pair, `keyN-public` and `keyN`.
*/

use crate::core::{
    crypto::keys::{CryptoKey, KeyPair, KeyRole},
    error::{Error, Result},
};

/// Descriptor of a key slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundKey {
    /// Slot id (`key1`, `key1-public`, ...)
    pub id: String,
    /// Display name
    pub name: String,
    /// Display color
    pub color: &'static str,
    /// Role of the key behind the slot
    pub role: KeyRole,
    /// For public slots, id of the private slot of the same pair
    pub partner: Option<String>,
}

/// Key slot with its material
#[derive(Debug, Clone)]
pub struct Slot<T> {
    /// Descriptor
    pub key: PlaygroundKey,
    pub(crate) data: T,
}

/// Look up a slot by id
pub(crate) fn find<'a, T>(slots: &'a [Slot<T>], id: &str) -> Result<&'a Slot<T>> {
    slots
        .iter()
        .find(|slot| slot.key.id == id)
        .ok_or_else(|| Error::UnknownKey(id.to_string()))
}

/// Public and private slots for each generated pair
pub(crate) fn pair_slots(pairs: Vec<KeyPair>) -> Vec<Slot<CryptoKey>> {
    let mut slots = Vec::with_capacity(pairs.len() * 2);
    for (index, pair) in pairs.into_iter().enumerate() {
        let number = index + 1;
        let private_id = format!("key{}", number);

        slots.push(Slot {
            key: PlaygroundKey {
                id: format!("{}-public", private_id),
                name: format!("Key {} (public)", number),
                color: "blue",
                role: KeyRole::Public,
                partner: Some(private_id.clone()),
            },
            data: pair.public().clone(),
        });
        slots.push(Slot {
            key: PlaygroundKey {
                id: private_id,
                name: format!("Key {} (private)", number),
                color: "red",
                role: KeyRole::Private,
                partner: None,
            },
            data: pair.private().clone(),
        });
    }
    slots
}

/// Generate `count` items, failing on the first error
pub(crate) fn generate_n<T>(count: usize, mut generate: impl FnMut() -> Result<T>) -> Result<Vec<T>> {
    (0..count).map(|_| generate()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::signature::SignatureService;

    #[test]
    fn test_pair_slots_layout() {
        let service = SignatureService::new();
        let pairs = generate_n(2, || service.generate_keys()).unwrap();
        let slots = pair_slots(pairs);

        let ids: Vec<&str> = slots.iter().map(|slot| slot.key.id.as_str()).collect();
        assert_eq!(ids, ["key1-public", "key1", "key2-public", "key2"]);

        assert_eq!(slots[0].key.role, KeyRole::Public);
        assert_eq!(slots[0].key.partner.as_deref(), Some("key1"));
        assert_eq!(slots[1].key.role, KeyRole::Private);
        assert_eq!(slots[1].key.name, "Key 1 (private)");
        assert!(slots[0].data.same_origin(&slots[1].data));
        assert!(!slots[1].data.same_origin(&slots[2].data));
    }

    #[test]
    fn test_find() {
        let service = SignatureService::new();
        let slots = pair_slots(generate_n(1, || service.generate_keys()).unwrap());

        assert_eq!(find(&slots, "key1").unwrap().key.role, KeyRole::Private);
        assert_eq!(find(&slots, "key7").unwrap_err(), Error::UnknownKey("key7".into()));
    }
}
