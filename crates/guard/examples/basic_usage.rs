//! Basic usage example for paramguard
//!
//! Every rejection is also logged by the `fmt` subscriber at `debug` level.

use std::sync::Arc;

use paramguard::prelude::*;
use tracing_subscriber::filter::LevelFilter;

fn register(name: Option<&str>, age: u32, tags: &[&str]) -> Result<(), GuardError> {
    let name = param!(?name)
        .is_not_null_or_white_space()?
        .has_length_between(3, 16)?
        .is_match(r"^[A-Za-z][A-Za-z0-9_]*$")?
        .require()?;
    param!(age).is_between(18, 130)?;
    param!(tags).is_not_empty()?;

    println!("registered {name} ({age}) with {} tag(s)", tags.len());
    Ok(())
}

fn main() -> Result<(), MessagesError> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let attempts: [(Option<&str>, u32, &[&str]); 4] = [
        (Some("alice"), 30, &["admin"]),
        (None, 30, &["admin"]),
        (Some("bob"), 12, &["guest"]),
        (Some("carol"), 40, &[]),
    ];

    for (name, age, tags) in attempts {
        if let Err(e) = register(name, age, tags) {
            println!("✗ [{}] {e}", e.code());
        }
    }

    // Swap in a catalog, e.g. loaded from a translations file.
    let catalog = Arc::new(Messages::from_json_str(
        r#"{ "between": "Alter muss zwischen {min} und {max} liegen." }"#,
    )?);
    if let Err(e) = validate(12, "age").with_messages(catalog).is_between(18, 130) {
        println!("✗ {e}");
    }

    Ok(())
}
