/*!
Digital signature playground.

Two signers, each with a public and a private slot. Once a private key and a
public key are selected, the text is signed with the private key and the
signature checked against the public key. Any change of text or selection
repeats both steps, so picking another signer's public key shows a failing
check.
*/

use crate::core::{
    constants::defaults,
    crypto::{config::CryptoConfig, keys::{CryptoKey, KeyRole}, signature::SignatureService},
    error::{Error, Result},
    session::slots::{self, PlaygroundKey, Slot},
};

/// Signature over the current text and whether it verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureCheck {
    /// Hex signature made with the selected private key
    pub signature: String,
    /// Verification result under the selected public key
    pub is_valid: bool,
}

/// State of the digital signature demo
#[derive(Debug, Clone)]
pub struct SignatureSession {
    service: SignatureService,
    slots: Vec<Slot<CryptoKey>>,
    text: String,
    active_public: Option<String>,
    active_private: Option<String>,
    check: Option<SignatureCheck>,
}

impl SignatureSession {
    /// Create a session with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&CryptoConfig::default())
    }

    /// Create a session and generate its key pairs
    pub fn with_config(config: &CryptoConfig) -> Result<Self> {
        let service = SignatureService::from_config(config);
        let slots = generate_slots(&service)?;
        Ok(Self {
            service,
            slots,
            text: defaults::SIGNATURE_TEXT.to_string(),
            active_public: None,
            active_private: None,
            check: None,
        })
    }

    /// Replace every key pair, reset the text and clear the selection
    pub fn regenerate(&mut self) -> Result<()> {
        self.slots = generate_slots(&self.service)?;
        self.text = defaults::SIGNATURE_TEXT.to_string();
        self.active_public = None;
        self.active_private = None;
        self.check = None;
        Ok(())
    }

    /// Key slots
    pub fn keys(&self) -> impl Iterator<Item = &PlaygroundKey> {
        self.slots.iter().map(|slot| &slot.key)
    }

    /// Text being signed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Selected public slot
    pub fn active_public(&self) -> Option<&PlaygroundKey> {
        self.active(self.active_public.as_deref())
    }

    /// Selected private slot
    pub fn active_private(&self) -> Option<&PlaygroundKey> {
        self.active(self.active_private.as_deref())
    }

    /// Latest signature and check, once both keys are selected
    pub fn check(&self) -> Option<&SignatureCheck> {
        self.check.as_ref()
    }

    /// Hex signature of the current text
    pub fn signature(&self) -> Option<&str> {
        self.check.as_ref().map(|check| check.signature.as_str())
    }

    /// Whether the current signature verified; `false` until both keys are
    /// selected
    pub fn is_valid(&self) -> bool {
        self.check.as_ref().is_some_and(|check| check.is_valid)
    }

    /// Edit the text and re-sign it
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<Option<&SignatureCheck>> {
        let text = text.into();
        let check = self.run(
            self.active_public.as_deref(),
            self.active_private.as_deref(),
            &text,
        )?;
        self.text = text;
        self.store(check)
    }

    /// Select a public key
    pub fn select_public(&mut self, id: &str) -> Result<Option<&SignatureCheck>> {
        self.select(id, KeyRole::Public)
    }

    /// Select a private key
    pub fn select_private(&mut self, id: &str) -> Result<Option<&SignatureCheck>> {
        self.select(id, KeyRole::Private)
    }

    /// Select whichever half the slot holds
    pub fn apply_key(&mut self, id: &str) -> Result<Option<&SignatureCheck>> {
        let role = slots::find(&self.slots, id)?.key.role;
        self.select(id, role)
    }

    fn select(&mut self, id: &str, role: KeyRole) -> Result<Option<&SignatureCheck>> {
        let actual = slots::find(&self.slots, id)?.key.role;
        if actual != role {
            return Err(Error::invalid_role(role, actual));
        }

        let check = match role {
            KeyRole::Public => self.run(Some(id), self.active_private.as_deref(), &self.text)?,
            _ => self.run(self.active_public.as_deref(), Some(id), &self.text)?,
        };

        log::debug!("signature demo selected {} key {}", role, id);
        match role {
            KeyRole::Public => self.active_public = Some(id.to_string()),
            _ => self.active_private = Some(id.to_string()),
        }
        self.store(check)
    }

    /// Sign and verify `text` when both keys are given
    fn run(&self, public_id: Option<&str>, private_id: Option<&str>, text: &str) -> Result<Option<SignatureCheck>> {
        let (Some(public_id), Some(private_id)) = (public_id, private_id) else {
            return Ok(None);
        };
        let public = &slots::find(&self.slots, public_id)?.data;
        let private = &slots::find(&self.slots, private_id)?.data;

        let signature = self.service.sign(private, text)?;
        let is_valid = self.service.verify(public, text, &signature)?;
        if !is_valid {
            log::debug!("signature by {} does not verify under {}", private_id, public_id);
        }
        Ok(Some(SignatureCheck { signature, is_valid }))
    }

    fn store(&mut self, check: Option<SignatureCheck>) -> Result<Option<&SignatureCheck>> {
        self.check = check;
        Ok(self.check.as_ref())
    }

    fn active(&self, id: Option<&str>) -> Option<&PlaygroundKey> {
        let id = id?;
        self.keys().find(|key| key.id == id)
    }
}

fn generate_slots(service: &SignatureService) -> Result<Vec<Slot<CryptoKey>>> {
    let pairs = slots::generate_n(defaults::SIGNATURE_KEY_PAIRS, || service.generate_keys())?;
    Ok(slots::pair_slots(pairs))
}
