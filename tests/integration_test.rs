// Playground sessions driven the way the tutorial pages drive them
use crypto_playground::{
    AsymmetricSession, CryptoConfig, Demo, DemoKind, Error, HashSession, Result,
    SignatureSession, SymmetricSession, TextCodec, defaults,
};

#[test]
fn test_symmetric_page_flow() -> Result<()> {
    let mut session = SymmetricSession::new()?;

    let encrypted = session.apply_key("key1")?.to_string();
    assert!(encrypted.len() % 32 == 0);
    assert!(session.state().is_locked());

    // Only the key that locked the text can unlock it
    assert!(matches!(session.apply_key("key2"), Err(Error::WrongKey(_))));
    assert_eq!(session.text(), encrypted);

    assert_eq!(session.apply_key("key1")?, defaults::TEXT);
    assert!(!session.state().is_locked());

    // Unlocked again, the other key may lock it
    session.apply_key("key2")?;
    assert_eq!(session.state().key_id(), Some("key2"));
    Ok(())
}

#[test]
fn test_asymmetric_page_flow() -> Result<()> {
    let mut session = AsymmetricSession::new()?;
    session.set_text("Привет, мир");

    assert!(matches!(session.apply_key("key1"), Err(Error::InvalidKeyRole { .. })));
    session.apply_key("key1-public")?;
    assert!(matches!(session.apply_key("key2-public"), Err(Error::InvalidKeyRole { .. })));
    assert!(matches!(session.apply_key("key2"), Err(Error::WrongKey(_))));

    assert_eq!(session.apply_key("key1")?, "Привет, мир");
    Ok(())
}

#[test]
fn test_asymmetric_default_text_too_long() -> Result<()> {
    let mut session = AsymmetricSession::new()?;
    assert!(matches!(
        session.apply_key("key2-public"),
        Err(Error::PayloadTooLarge { len: 108, max: 62 })
    ));
    assert_eq!(session.text(), defaults::TEXT);
    Ok(())
}

#[test]
fn test_hash_page_flow() -> Result<()> {
    let mut session = HashSession::new();
    session.set_text("abc");

    assert_eq!(session.apply_key("key1")?, "a9993e364706816aba3e25717850c26c9cd0d89d");
    // Chained: the digest of the hex digest
    assert_eq!(session.apply_key("key4")?.len(), 128);
    Ok(())
}

#[test]
fn test_signature_page_flow() -> Result<()> {
    let mut session = SignatureSession::new()?;

    session.select_public("key1-public")?;
    assert!(session.check().is_none());

    session.select_private("key1")?;
    assert!(session.is_valid());

    session.select_public("key2-public")?;
    assert!(!session.is_valid());

    session.select_public("key1-public")?;
    session.set_text("another message")?;
    assert!(session.is_valid());
    Ok(())
}

#[test]
fn test_every_demo_regenerates() -> Result<()> {
    let config = CryptoConfig::default().with_text_codec(TextCodec::Utf8);
    for kind in DemoKind::ALL {
        let mut demo = Demo::with_config(kind, &config)?;
        let before: Vec<String> = demo.keys().iter().map(|key| key.id.clone()).collect();

        demo.regenerate()?;
        let after: Vec<String> = demo.keys().iter().map(|key| key.id.clone()).collect();
        assert_eq!(before, after, "{}", kind);
    }
    Ok(())
}

#[test]
fn test_demo_symmetric_with_utf8() -> Result<()> {
    let config = CryptoConfig::default().with_text_codec(TextCodec::Utf8);
    let mut demo = Demo::with_config(DemoKind::Symmetric, &config)?;

    demo.set_text("Ваш секретный текст ✓")?;
    demo.apply_key("key1")?;
    demo.apply_key("key1")?;
    assert_eq!(demo.text(), Some("Ваш секретный текст ✓"));
    Ok(())
}
