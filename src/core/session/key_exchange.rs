/*!
Key exchange playground.

Three participants, each with a public and a private slot. Selecting one
public and one private key derives the secret those two participants share.
Pairing a participant's public key with its own private key is refused.
*/

use crate::core::{
    constants::defaults,
    crypto::{config::CryptoConfig, key_exchange::KeyExchange, keys::{CryptoKey, KeyRole}},
    error::{Error, Result},
    session::slots::{self, PlaygroundKey, Slot},
};

/// State of the key exchange demo
#[derive(Debug, Clone)]
pub struct KeyExchangeSession {
    exchange: KeyExchange,
    slots: Vec<Slot<CryptoKey>>,
    active_public: Option<String>,
    active_private: Option<String>,
    shared_secret: Option<String>,
}

impl KeyExchangeSession {
    /// Create a session with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&CryptoConfig::default())
    }

    /// Create a session and generate its key pairs
    pub fn with_config(config: &CryptoConfig) -> Result<Self> {
        let exchange = KeyExchange::from_config(config)?;
        let slots = generate_slots(&exchange)?;
        Ok(Self {
            exchange,
            slots,
            active_public: None,
            active_private: None,
            shared_secret: None,
        })
    }

    /// Replace every key pair and clear the selection
    pub fn regenerate(&mut self) -> Result<()> {
        self.slots = generate_slots(&self.exchange)?;
        self.active_public = None;
        self.active_private = None;
        self.shared_secret = None;
        Ok(())
    }

    /// Key slots
    pub fn keys(&self) -> impl Iterator<Item = &PlaygroundKey> {
        self.slots.iter().map(|slot| &slot.key)
    }

    /// Selected public slot
    pub fn active_public(&self) -> Option<&PlaygroundKey> {
        self.active(self.active_public.as_deref())
    }

    /// Selected private slot
    pub fn active_private(&self) -> Option<&PlaygroundKey> {
        self.active(self.active_private.as_deref())
    }

    /// Shared secret of the current selection, as hex
    pub fn shared_secret(&self) -> Option<&str> {
        self.shared_secret.as_deref()
    }

    /// Select a public key. Returns the shared secret once both halves are
    /// selected.
    pub fn select_public(&mut self, id: &str) -> Result<Option<&str>> {
        self.select(id, KeyRole::Public)
    }

    /// Select a private key. Returns the shared secret once both halves are
    /// selected.
    pub fn select_private(&mut self, id: &str) -> Result<Option<&str>> {
        self.select(id, KeyRole::Private)
    }

    /// Select whichever half the slot holds
    pub fn apply_key(&mut self, id: &str) -> Result<Option<&str>> {
        let role = slots::find(&self.slots, id)?.key.role;
        self.select(id, role)
    }

    fn select(&mut self, id: &str, role: KeyRole) -> Result<Option<&str>> {
        let slot = slots::find(&self.slots, id)?;
        if slot.key.role != role {
            return Err(Error::invalid_role(role, slot.key.role));
        }

        let other = match role {
            KeyRole::Public => self.active_private.as_deref(),
            _ => self.active_public.as_deref(),
        };
        let other = other.map(|other_id| slots::find(&self.slots, other_id)).transpose()?;

        let secret = match other {
            Some(other) if other.data.same_origin(&slot.data) => {
                log::warn!("key exchange between {} and {} of the same pair rejected", id, other.key.id);
                return Err(Error::DegenerateKeyExchange);
            }
            Some(other) => {
                let (public, private) = match role {
                    KeyRole::Public => (&slot.data, &other.data),
                    _ => (&other.data, &slot.data),
                };
                Some(self.exchange.derive(public, private)?)
            }
            None => None,
        };

        log::debug!("key exchange selected {} key {}", role, id);
        match role {
            KeyRole::Public => self.active_public = Some(id.to_string()),
            _ => self.active_private = Some(id.to_string()),
        }
        self.shared_secret = secret;
        Ok(self.shared_secret.as_deref())
    }

    fn active(&self, id: Option<&str>) -> Option<&PlaygroundKey> {
        let id = id?;
        self.keys().find(|key| key.id == id)
    }
}

fn generate_slots(exchange: &KeyExchange) -> Result<Vec<Slot<CryptoKey>>> {
    let pairs = slots::generate_n(defaults::KEY_EXCHANGE_KEY_PAIRS, || exchange.generate_keys())?;
    Ok(slots::pair_slots(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_slots() {
        let session = KeyExchangeSession::new().unwrap();
        assert_eq!(session.keys().count(), 6);
        assert!(session.shared_secret().is_none());
    }

    #[test]
    fn test_both_directions_agree() {
        let mut session = KeyExchangeSession::new().unwrap();

        assert_eq!(session.select_public("key2-public").unwrap(), None);
        let alice_side = session.select_private("key1").unwrap().unwrap().to_string();
        assert_eq!(alice_side.len(), 16);

        // Moving to the mirrored selection without passing through a
        // same-pair state
        session.select_private("key3").unwrap();
        session.select_public("key1-public").unwrap();
        let bob_side = session.select_private("key2").unwrap().unwrap();
        assert_eq!(alice_side, bob_side);
    }

    #[test]
    fn test_same_pair_rejected() {
        let mut session = KeyExchangeSession::new().unwrap();
        session.select_public("key3-public").unwrap();
        let secret = session.select_private("key1").unwrap().unwrap().to_string();

        assert_eq!(session.select_public("key1-public"), Err(Error::DegenerateKeyExchange));
        assert_eq!(session.active_public().unwrap().id, "key3-public");
        assert_eq!(session.shared_secret(), Some(secret.as_str()));
    }

    #[test]
    fn test_role_checked() {
        let mut session = KeyExchangeSession::new().unwrap();
        assert!(matches!(session.select_public("key1"), Err(Error::InvalidKeyRole { .. })));
        assert!(matches!(session.select_private("key1-public"), Err(Error::InvalidKeyRole { .. })));
        assert!(session.active_public().is_none());
        assert!(session.active_private().is_none());
    }

    #[test]
    fn test_apply_key_dispatches_on_role() {
        let mut session = KeyExchangeSession::new().unwrap();
        session.apply_key("key1-public").unwrap();
        assert!(session.apply_key("key2").unwrap().is_some());
        assert_eq!(session.active_private().unwrap().name, "Key 2 (private)");

        assert_eq!(session.apply_key("key9"), Err(Error::UnknownKey("key9".into())));
    }

    #[test]
    fn test_regenerate_clears_selection() {
        let mut session = KeyExchangeSession::new().unwrap();
        session.select_public("key1-public").unwrap();
        session.select_private("key2").unwrap();

        session.regenerate().unwrap();
        assert!(session.active_public().is_none());
        assert!(session.shared_secret().is_none());
    }
}
