#![cfg(feature = "async")]

use crypto_playground::{Error, Result, r#async::AsyncCrypto};

#[tokio::test]
async fn test_async_asymmetric_round_trip() -> Result<()> {
    let crypto = AsyncCrypto::new();
    let pair = crypto.generate_asymmetric_keys().await?;

    let encrypted = crypto.encrypt_asymmetric(pair.public(), "async").await?;
    assert_eq!(crypto.decrypt_asymmetric(pair.private(), &encrypted).await?, "async");
    Ok(())
}

#[tokio::test]
async fn test_async_key_exchange() -> Result<()> {
    let crypto = AsyncCrypto::new();
    let (alice, bob) = tokio::try_join!(crypto.generate_exchange_keys(), crypto.generate_exchange_keys())?;

    let alice_side = crypto.derive(bob.public(), alice.private()).await?;
    let bob_side = crypto.derive(alice.public(), bob.private()).await?;
    assert_eq!(alice_side, bob_side);
    Ok(())
}

#[tokio::test]
async fn test_async_hash_and_signature() -> Result<()> {
    let crypto = AsyncCrypto::new();
    assert_eq!(
        crypto.hash("SHA-1", "abc").await?,
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );

    let pair = crypto.generate_signature_keys().await?;
    let signature = crypto.sign(pair.private(), "abc").await?;
    assert!(crypto.verify(pair.public(), "abc", &signature).await?);
    assert!(!crypto.verify(pair.public(), "abd", &signature).await?);
    Ok(())
}

#[tokio::test]
async fn test_async_errors_are_returned() {
    let crypto = AsyncCrypto::new();
    let keys = crypto.generate_symmetric_keys().await.unwrap();
    assert!(matches!(
        crypto.decrypt_symmetric(&keys.key, &keys.iv, "0").await,
        Err(Error::Format(_))
    ));
}
