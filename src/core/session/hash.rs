/*!
Hashing playground.

Four slots, one per SHA algorithm. Dropping a slot on the text replaces the
text with its hex digest, so digests can be chained.
*/

use crate::core::{
    constants::defaults,
    crypto::{
        config::{CryptoConfig, HashAlgorithm},
        hash::DigestHasher,
        keys::KeyRole,
    },
    error::Result,
    session::slots::{self, PlaygroundKey, Slot},
};

/// State of the hashing demo
#[derive(Debug, Clone)]
pub struct HashSession {
    hasher: DigestHasher,
    slots: Vec<Slot<HashAlgorithm>>,
    text: String,
}

impl HashSession {
    /// Create a session with the default configuration
    pub fn new() -> Self {
        Self::with_config(&CryptoConfig::default())
    }

    /// Create a session with a specific configuration
    pub fn with_config(config: &CryptoConfig) -> Self {
        Self {
            hasher: DigestHasher::from_config(config),
            slots: algorithm_slots(),
            text: defaults::TEXT.to_string(),
        }
    }

    /// Reset the text. Hashing has no key material to replace.
    pub fn regenerate(&mut self) {
        self.text = defaults::TEXT.to_string();
    }

    /// Algorithm slots
    pub fn keys(&self) -> impl Iterator<Item = &PlaygroundKey> {
        self.slots.iter().map(|slot| &slot.key)
    }

    /// Current text or digest
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Edit the text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the text with its digest under the slot's algorithm
    pub fn apply_key(&mut self, id: &str) -> Result<&str> {
        let algorithm = slots::find(&self.slots, id)?.data;
        let digest = self.hasher.digest(algorithm, &self.text)?;
        log::debug!("text hashed with {}", algorithm);
        self.text = digest;
        Ok(&self.text)
    }
}

impl Default for HashSession {
    fn default() -> Self {
        Self::new()
    }
}

fn algorithm_slots() -> Vec<Slot<HashAlgorithm>> {
    HashAlgorithm::ALL
        .into_iter()
        .enumerate()
        .map(|(index, algorithm)| Slot {
            key: PlaygroundKey {
                id: format!("key{}", index + 1),
                name: algorithm.name().replace('-', " "),
                color: "green",
                role: KeyRole::Secret,
                partner: None,
            },
            data: algorithm,
        })
        .collect()
}
