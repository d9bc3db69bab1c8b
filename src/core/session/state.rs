/*!
Lock state of the encryption playgrounds.

Dropping a key on plain text encrypts it and locks the playground; only the
key that can undo the encryption unlocks it again.
*/

use std::fmt;

/// Whether the playground text is currently ciphertext
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LockState {
    /// Text is plain
    #[default]
    Unlocked,
    /// Text is ciphertext that only `key_id` can decrypt
    Locked {
        /// Slot id of the decrypting key
        key_id: String,
    },
}

impl LockState {
    /// Whether the text is ciphertext
    pub fn is_locked(&self) -> bool {
        matches!(self, LockState::Locked { .. })
    }

    /// Slot id of the key that can decrypt the text
    pub fn key_id(&self) -> Option<&str> {
        match self {
            LockState::Unlocked => None,
            LockState::Locked { key_id } => Some(key_id),
        }
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockState::Unlocked => write!(f, "Unlocked"),
            LockState::Locked { key_id } => write!(f, "Locked({})", key_id),
        }
    }
}
