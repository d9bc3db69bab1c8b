/*!
One playground, whichever demo it shows.
*/

use crate::core::{
    crypto::{config::CryptoConfig, demo::DemoKind},
    error::Result,
    session::{
        asymmetric::AsymmetricSession, hash::HashSession, key_exchange::KeyExchangeSession,
        signature::SignatureSession, slots::PlaygroundKey, symmetric::SymmetricSession,
    },
};

/// A playground session for one of the five demos
#[derive(Debug, Clone)]
pub enum Demo {
    /// Symmetric encryption
    Symmetric(SymmetricSession),
    /// Asymmetric encryption
    Asymmetric(AsymmetricSession),
    /// Hashing
    Hash(HashSession),
    /// Key exchange
    KeyExchange(KeyExchangeSession),
    /// Digital signature
    Signature(SignatureSession),
}

impl Demo {
    /// Create a demo with the default configuration, generating its keys
    pub fn new(kind: DemoKind) -> Result<Self> {
        Self::with_config(kind, &CryptoConfig::default())
    }

    /// Create a demo with a specific configuration, generating its keys
    pub fn with_config(kind: DemoKind, config: &CryptoConfig) -> Result<Self> {
        config.validate()?;
        log::debug!("starting {} demo", kind);
        Ok(match kind {
            DemoKind::Symmetric => Demo::Symmetric(SymmetricSession::with_config(config)?),
            DemoKind::Asymmetric => Demo::Asymmetric(AsymmetricSession::with_config(config)?),
            DemoKind::Hash => Demo::Hash(HashSession::with_config(config)),
            DemoKind::KeyExchange => Demo::KeyExchange(KeyExchangeSession::with_config(config)?),
            DemoKind::Signature => Demo::Signature(SignatureSession::with_config(config)?),
        })
    }

    /// Which demo this is
    pub fn kind(&self) -> DemoKind {
        match self {
            Demo::Symmetric(_) => DemoKind::Symmetric,
            Demo::Asymmetric(_) => DemoKind::Asymmetric,
            Demo::Hash(_) => DemoKind::Hash,
            Demo::KeyExchange(_) => DemoKind::KeyExchange,
            Demo::Signature(_) => DemoKind::Signature,
        }
    }

    /// Key slots in display order
    pub fn keys(&self) -> Vec<&PlaygroundKey> {
        match self {
            Demo::Symmetric(session) => session.keys().collect(),
            Demo::Asymmetric(session) => session.keys().collect(),
            Demo::Hash(session) => session.keys().collect(),
            Demo::KeyExchange(session) => session.keys().collect(),
            Demo::Signature(session) => session.keys().collect(),
        }
    }

    /// Editable text, if the demo has one
    pub fn text(&self) -> Option<&str> {
        match self {
            Demo::Symmetric(session) => Some(session.text()),
            Demo::Asymmetric(session) => Some(session.text()),
            Demo::Hash(session) => Some(session.text()),
            Demo::KeyExchange(_) => None,
            Demo::Signature(session) => Some(session.text()),
        }
    }

    /// Replace the text. Demos without text ignore it.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        match self {
            Demo::Symmetric(session) => session.set_text(text),
            Demo::Asymmetric(session) => session.set_text(text),
            Demo::Hash(session) => session.set_text(text),
            Demo::KeyExchange(_) => {}
            Demo::Signature(session) => {
                session.set_text(text)?;
            }
        }
        Ok(())
    }

    /// Drop a key on the playground.
    ///
    /// Encryption demos lock or unlock the text, hashing replaces it, and the
    /// two pair-selection demos select the slot as their public or private
    /// key according to its role.
    pub fn apply_key(&mut self, id: &str) -> Result<()> {
        match self {
            Demo::Symmetric(session) => session.apply_key(id).map(drop),
            Demo::Asymmetric(session) => session.apply_key(id).map(drop),
            Demo::Hash(session) => session.apply_key(id).map(drop),
            Demo::KeyExchange(session) => session.apply_key(id).map(drop),
            Demo::Signature(session) => session.apply_key(id).map(drop),
        }
    }

    /// Discard all keys and start over
    pub fn regenerate(&mut self) -> Result<()> {
        log::debug!("regenerating {} demo", self.kind());
        match self {
            Demo::Symmetric(session) => session.regenerate(),
            Demo::Asymmetric(session) => session.regenerate(),
            Demo::Hash(session) => {
                session.regenerate();
                Ok(())
            }
            Demo::KeyExchange(session) => session.regenerate(),
            Demo::Signature(session) => session.regenerate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;

    #[test]
    fn test_every_kind_builds() {
        for kind in DemoKind::ALL {
            let demo = Demo::new(kind).unwrap();
            assert_eq!(demo.kind(), kind);
            assert!(!demo.keys().is_empty());
        }
    }

    #[test]
    fn test_slot_counts() {
        let counts: Vec<usize> = DemoKind::ALL
            .into_iter()
            .map(|kind| Demo::new(kind).unwrap().keys().len())
            .collect();
        assert_eq!(counts, [2, 4, 4, 6, 4]);
    }

    #[test]
    fn test_symmetric_through_demo() {
        let mut demo = Demo::new(DemoKind::Symmetric).unwrap();
        demo.apply_key("key2").unwrap();
        assert_ne!(demo.text(), Some("Ваш секретный текст"));
        demo.apply_key("key2").unwrap();
        assert_eq!(demo.text(), Some("Ваш секретный текст"));
    }

    #[test]
    fn test_key_exchange_through_demo() {
        let mut demo = Demo::new(DemoKind::KeyExchange).unwrap();
        assert_eq!(demo.text(), None);
        demo.apply_key("key1-public").unwrap();
        assert_eq!(demo.apply_key("key1"), Err(Error::DegenerateKeyExchange));

        let Demo::KeyExchange(session) = &demo else {
            panic!("not a key exchange demo");
        };
        assert!(session.active_private().is_none());
    }

    #[test]
    fn test_regenerate_replaces_keys() {
        let mut demo = Demo::new(DemoKind::Signature).unwrap();
        demo.set_text("changed").unwrap();
        demo.regenerate().unwrap();
        assert_eq!(demo.text(), Some("abc"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = CryptoConfig::default();
        config.key_exchange.derivation_bits = 7;
        assert!(matches!(
            Demo::with_config(DemoKind::Hash, &config),
            Err(Error::InvalidConfig(_))
        ));
    }
}
