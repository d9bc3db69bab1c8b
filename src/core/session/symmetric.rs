/*!
Symmetric encryption playground.

Two secret keys, each bound to its own IV. Dropping a key on plain text
encrypts it with that key; the ciphertext can only be decrypted by dropping
the same key again. Text is percent-encoded before encryption so that any
Unicode input survives the single-byte conversion.
*/

use crate::core::{
    constants::defaults,
    crypto::{
        config::CryptoConfig,
        keys::KeyRole,
        symmetric::{SymmetricCipher, SymmetricKeys},
    },
    encoding::{decode_uri_component, encode_uri_component},
    error::{CryptoError, Error, Result},
    session::{
        slots::{self, PlaygroundKey, Slot},
        state::LockState,
    },
};

/// State of the symmetric encryption demo
#[derive(Debug, Clone)]
pub struct SymmetricSession {
    cipher: SymmetricCipher,
    slots: Vec<Slot<SymmetricKeys>>,
    text: String,
    state: LockState,
}

impl SymmetricSession {
    /// Create a session with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&CryptoConfig::default())
    }

    /// Create a session and generate its keys
    pub fn with_config(config: &CryptoConfig) -> Result<Self> {
        let cipher = SymmetricCipher::from_config(config)?;
        let slots = generate_slots(&cipher)?;
        Ok(Self {
            cipher,
            slots,
            text: defaults::TEXT.to_string(),
            state: LockState::Unlocked,
        })
    }

    /// Replace every key with a fresh one and reset the text
    pub fn regenerate(&mut self) -> Result<()> {
        self.slots = generate_slots(&self.cipher)?;
        self.text = defaults::TEXT.to_string();
        self.state = LockState::Unlocked;
        Ok(())
    }

    /// Key slots
    pub fn keys(&self) -> impl Iterator<Item = &PlaygroundKey> {
        self.slots.iter().map(|slot| &slot.key)
    }

    /// Current text, plain or hex ciphertext
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Edit the text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Lock state
    pub fn state(&self) -> &LockState {
        &self.state
    }

    /// Slot that encrypted the current text
    pub fn encrypted_with(&self) -> Option<&PlaygroundKey> {
        let id = self.state.key_id()?;
        self.keys().find(|key| key.id == id)
    }

    /// Apply a key to the text: encrypt when unlocked, decrypt when locked.
    ///
    /// Returns the new text. On failure nothing changes.
    pub fn apply_key(&mut self, id: &str) -> Result<&str> {
        let slot = slots::find(&self.slots, id)?;
        let keys = &slot.data;

        match self.state.key_id().map(str::to_owned) {
            None => {
                let encrypted = self
                    .cipher
                    .encrypt(&keys.key, &keys.iv, &encode_uri_component(&self.text))?;
                log::debug!("symmetric text locked with {}", id);
                self.state = LockState::Locked { key_id: id.to_string() };
                self.text = encrypted;
            }
            Some(key_id) if key_id != id => {
                log::warn!("symmetric text locked with {}, {} rejected", key_id, id);
                return Err(Error::WrongKey(
                    "text can only be decrypted with the key that encrypted it".into(),
                ));
            }
            Some(_) => {
                let decrypted = self.cipher.decrypt(&keys.key, &keys.iv, &self.text)?;
                let plain = decode_uri_component(&decrypted)
                    .map_err(|_| Error::Decryption(CryptoError::InvalidText))?;
                log::debug!("symmetric text unlocked with {}", id);
                self.state = LockState::Unlocked;
                self.text = plain;
            }
        }

        Ok(&self.text)
    }
}

fn generate_slots(cipher: &SymmetricCipher) -> Result<Vec<Slot<SymmetricKeys>>> {
    let colors = ["red", "blue"];
    let keys = slots::generate_n(defaults::SYMMETRIC_KEYS, || cipher.generate_keys())?;
    Ok(keys
        .into_iter()
        .enumerate()
        .map(|(index, data)| Slot {
            key: PlaygroundKey {
                id: format!("key{}", index + 1),
                name: format!("Key {}", index + 1),
                color: colors[index % colors.len()],
                role: KeyRole::Secret,
                partner: None,
            },
            data,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = SymmetricSession::new().unwrap();
        let ids: Vec<&str> = session.keys().map(|key| key.id.as_str()).collect();
        assert_eq!(ids, ["key1", "key2"]);
        assert_eq!(session.text(), "Ваш секретный текст");
        assert!(!session.state().is_locked());
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let mut session = SymmetricSession::new().unwrap();

        let encrypted = session.apply_key("key1").unwrap().to_string();
        assert_ne!(encrypted, "Ваш секретный текст");
        assert_eq!(session.state().key_id(), Some("key1"));
        assert_eq!(session.encrypted_with().unwrap().name, "Key 1");

        let decrypted = session.apply_key("key1").unwrap();
        assert_eq!(decrypted, "Ваш секретный текст");
        assert!(!session.state().is_locked());
    }

    #[test]
    fn test_wrong_key_leaves_state() {
        let mut session = SymmetricSession::new().unwrap();
        let encrypted = session.apply_key("key2").unwrap().to_string();

        assert!(matches!(session.apply_key("key1"), Err(Error::WrongKey(_))));
        assert_eq!(session.text(), encrypted);
        assert_eq!(session.state().key_id(), Some("key2"));
    }

    #[test]
    fn test_unknown_key() {
        let mut session = SymmetricSession::new().unwrap();
        assert_eq!(session.apply_key("key3"), Err(Error::UnknownKey("key3".into())));
        assert_eq!(session.text(), "Ваш секретный текст");
    }

    #[test]
    fn test_edited_ciphertext_fails_without_unlocking() {
        let mut session = SymmetricSession::new().unwrap();
        session.apply_key("key1").unwrap();

        session.set_text("not hex");
        assert!(matches!(session.apply_key("key1"), Err(Error::Format(_))));
        assert!(session.state().is_locked());
        assert_eq!(session.text(), "not hex");
    }

    #[test]
    fn test_regenerate_resets() {
        let mut session = SymmetricSession::new().unwrap();
        session.apply_key("key1").unwrap();

        session.regenerate().unwrap();
        assert!(!session.state().is_locked());
        assert_eq!(session.text(), "Ваш секретный текст");
    }
}
