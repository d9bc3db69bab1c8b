/*!
Uses the asynchronous adapters from a Tokio runtime.

Run with `cargo run --example async_playground --features async`.
*/

use crypto_playground::{Result, encode_uri_component, decode_uri_component, r#async::AsyncCrypto};

#[tokio::main]
async fn main() -> Result<()> {
    let crypto = AsyncCrypto::new();

    // Key generation for every demo runs concurrently on the blocking pool
    let (symmetric, asymmetric, alice, bob, signer) = tokio::try_join!(
        crypto.generate_symmetric_keys(),
        crypto.generate_asymmetric_keys(),
        crypto.generate_exchange_keys(),
        crypto.generate_exchange_keys(),
        crypto.generate_signature_keys(),
    )?;

    let text = encode_uri_component("Ваш секретный текст");
    let encrypted = crypto.encrypt_symmetric(&symmetric.key, &symmetric.iv, &text).await?;
    let decrypted = crypto.decrypt_symmetric(&symmetric.key, &symmetric.iv, &encrypted).await?;
    println!("AES-CBC:  {} -> {}", encrypted, decode_uri_component(&decrypted)?);

    let encrypted = crypto.encrypt_asymmetric(asymmetric.public(), "hello").await?;
    let decrypted = crypto.decrypt_asymmetric(asymmetric.private(), &encrypted).await?;
    println!("RSA-OAEP: {}... -> {}", &encrypted[..32], decrypted);

    println!("SHA-256:  {}", crypto.hash("SHA-256", "abc").await?);

    let (alice_side, bob_side) = tokio::try_join!(
        crypto.derive(bob.public(), alice.private()),
        crypto.derive(alice.public(), bob.private()),
    )?;
    println!("ECDH:     {} == {}", alice_side, bob_side);

    let signature = crypto.sign(signer.private(), "abc").await?;
    let valid = crypto.verify(signer.public(), "abc", &signature).await?;
    println!("ECDSA:    {} valid={}", signature, valid);

    Ok(())
}
