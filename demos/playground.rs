/*!
Walks through all five demos the way a reader of the tutorial would.

Run with `cargo run --example playground`.
*/

use crypto_playground::{Demo, DemoKind, Error, KeyExchangeSession, Result, SignatureSession};

fn show(demo: &Demo) {
    if let Some(text) = demo.text() {
        println!("  text: {}", text);
    }
}

fn main() -> Result<()> {
    println!("Crypto Playground {}", crypto_playground::VERSION);

    // Symmetric: lock with one key, fail with the other, unlock with the first
    println!("\n{}", DemoKind::Symmetric);
    let mut demo = Demo::new(DemoKind::Symmetric)?;
    show(&demo);
    demo.apply_key("key1")?;
    show(&demo);
    if let Err(err) = demo.apply_key("key2") {
        println!("  key2: {}", err);
    }
    demo.apply_key("key1")?;
    show(&demo);

    // Asymmetric: short text, public key in, private key out
    println!("\n{}", DemoKind::Asymmetric);
    let mut demo = Demo::new(DemoKind::Asymmetric)?;
    match demo.apply_key("key1-public") {
        Err(Error::PayloadTooLarge { len, max }) => {
            println!("  default text is {} bytes once encoded, limit is {}", len, max);
        }
        other => other?,
    }
    demo.set_text("Привет")?;
    demo.apply_key("key1-public")?;
    show(&demo);
    demo.apply_key("key1")?;
    show(&demo);

    // Hashing: digests chain
    println!("\n{}", DemoKind::Hash);
    let mut demo = Demo::new(DemoKind::Hash)?;
    for id in ["key1", "key2"] {
        demo.apply_key(id)?;
        show(&demo);
    }

    // Key exchange: both directions agree, the same pair is refused
    println!("\n{}", DemoKind::KeyExchange);
    let mut session = KeyExchangeSession::new()?;
    session.select_public("key2-public")?;
    session.select_private("key1")?;
    println!("  key2-public + key1: {}", session.shared_secret().unwrap_or("none"));
    session.select_private("key3")?;
    session.select_public("key1-public")?;
    session.select_private("key2")?;
    println!("  key1-public + key2: {}", session.shared_secret().unwrap_or("none"));
    if let Err(err) = session.select_public("key2-public") {
        println!("  key2-public + key2: {}", err);
    }

    // Signature: the check follows the selected public key
    println!("\n{}", DemoKind::Signature);
    let mut session = SignatureSession::new()?;
    session.select_private("key1")?;
    for public in ["key1-public", "key2-public"] {
        session.select_public(public)?;
        println!(
            "  {} + key1: {} {}",
            public,
            session.signature().unwrap_or(""),
            if session.is_valid() { "valid" } else { "invalid" }
        );
    }

    Ok(())
}
