/*!
Playground sessions.

A session owns everything one demo page needs: its generated keys, the
current text and any lock or selection state. Operations either succeed and
update the session or fail and leave it as it was.
*/

// Shared pieces
pub mod slots;
pub mod state;

// One session per demo
pub mod symmetric;
pub mod asymmetric;
pub mod hash;
pub mod key_exchange;
pub mod signature;

// Tagged session over all demos
pub mod demo;

pub use self::asymmetric::AsymmetricSession;
pub use self::demo::Demo;
pub use self::hash::HashSession;
pub use self::key_exchange::KeyExchangeSession;
pub use self::signature::{SignatureCheck, SignatureSession};
pub use self::slots::{PlaygroundKey, Slot};
pub use self::state::LockState;
pub use self::symmetric::SymmetricSession;
