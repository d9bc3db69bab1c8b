/*!
Asymmetric encryption playground.

Two key pairs, shown as four slots. Plain text may only be encrypted with a
public key; the ciphertext may only be decrypted with the private key of the
same pair.
*/

use crate::core::{
    constants::defaults,
    crypto::{asymmetric::AsymmetricCipher, config::CryptoConfig, keys::{CryptoKey, KeyRole}},
    encoding::{decode_uri_component, encode_uri_component},
    error::{CryptoError, Error, Result},
    session::{
        slots::{self, PlaygroundKey, Slot},
        state::LockState,
    },
};

/// State of the asymmetric encryption demo
#[derive(Debug, Clone)]
pub struct AsymmetricSession {
    cipher: AsymmetricCipher,
    slots: Vec<Slot<CryptoKey>>,
    text: String,
    state: LockState,
}

impl AsymmetricSession {
    /// Create a session with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&CryptoConfig::default())
    }

    /// Create a session and generate its key pairs
    pub fn with_config(config: &CryptoConfig) -> Result<Self> {
        let cipher = AsymmetricCipher::from_config(config)?;
        let slots = generate_slots(&cipher)?;
        Ok(Self {
            cipher,
            slots,
            text: defaults::TEXT.to_string(),
            state: LockState::Unlocked,
        })
    }

    /// Replace every key pair and reset the text
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

    /// Lock state; when locked it names the private slot that can decrypt
    pub fn state(&self) -> &LockState {
        &self.state
    }

    /// Largest text, after percent-encoding, that fits one encryption
    pub fn max_text_len(&self) -> usize {
        self.cipher.max_plaintext_len()
    }

    /// Apply a key to the text.
    ///
    /// Unlocked text accepts public keys only and is encrypted. Locked text
    /// accepts only the private key matching the public key used. On failure
    /// nothing changes.
    pub fn apply_key(&mut self, id: &str) -> Result<&str> {
        let slot = slots::find(&self.slots, id)?;
        let role = slot.key.role;

        let locked_for = self.state.key_id().map(str::to_owned);

        match (locked_for, role) {
            (None, KeyRole::Public) => {
                let encrypted = self.cipher.encrypt(&slot.data, &encode_uri_component(&self.text))?;
                let key_id = slot
                    .key
                    .partner
                    .clone()
                    .ok_or_else(|| Error::Internal(format!("public slot {} without partner", id)))?;
                log::debug!("asymmetric text locked with {}, {} decrypts", id, key_id);
                self.state = LockState::Locked { key_id };
                self.text = encrypted;
            }
            (None, _) => {
                log::warn!("asymmetric encryption with {} rejected", id);
                return Err(Error::invalid_role(
                    "public key (private keys only decrypt)",
                    role,
                ));
            }
            (Some(_), KeyRole::Public) => {
                log::warn!("asymmetric decryption with {} rejected", id);
                return Err(Error::invalid_role(
                    "private key (public keys only encrypt)",
                    role,
                ));
            }
            (Some(key_id), _) if key_id != id => {
                log::warn!("asymmetric text locked for {}, {} rejected", key_id, id);
                return Err(Error::WrongKey(
                    "text can only be decrypted with the private key matching the public key used".into(),
                ));
            }
            (Some(_), _) => {
                let decrypted = self.cipher.decrypt(&slot.data, &self.text)?;
                let plain = decode_uri_component(&decrypted)
                    .map_err(|_| Error::Decryption(CryptoError::InvalidText))?;
                log::debug!("asymmetric text unlocked with {}", id);
                self.state = LockState::Unlocked;
                self.text = plain;
            }
        }

        Ok(&self.text)
    }
}

fn generate_slots(cipher: &AsymmetricCipher) -> Result<Vec<Slot<CryptoKey>>> {
    let pairs = slots::generate_n(defaults::ASYMMETRIC_KEY_PAIRS, || cipher.generate_keys())?;
    Ok(slots::pair_slots(pairs))
}
