/*!
Asynchronous API for the playground adapters.

Every operation runs on Tokio's blocking pool and is awaited, so RSA key
generation and the other CPU-bound calls never stall the async runtime.
*/

mod crypto;

// Re-export components for ease of use
pub use crypto::AsyncCrypto;
