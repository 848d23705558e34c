//! Samples small dungeons from a single declarative specification.
//!
//! Run with `cargo run --example dungeon`. Each run, and each sample within a
//! run, may differ: the solver is randomized and the specification admits many
//! models. Set `RUST_LOG=search=debug` (or another target from the library's
//! log module) to watch the solver work.

use weft_sat::{config::Config, context::Context, types::err};

const ROOMS: [&str; 4] = ["entrance", "hall", "crypt", "vault"];

fn main() -> Result<(), err::ErrorKind> {
    env_logger::init();

    let mut ctx = Context::from_config(Config::default());

    ctx.attribute("lit", &[&ROOMS])?;
    ctx.attribute("treasure", &[&ROOMS])?;
    ctx.attribute("guardian", &[])?;
    ctx.attribute("sealed", &[])?;

    // Exactly one room holds the treasure, and never the entrance.
    ctx.unique(&[
        "treasure entrance",
        "treasure hall",
        "treasure crypt",
        "treasure vault",
    ])?;
    ctx.assert("!treasure entrance")?;

    // The entrance is lit; the crypt is not.
    ctx.assert("lit entrance")?;
    ctx.assert("!lit crypt")?;

    // A guardian appears exactly when the vault holds the treasure.
    ctx.equal(&["guardian"], &["treasure vault"])?;

    // A dungeon may be sealed only behind a guardian in a darkened vault.
    ctx.rule("sealed", &["guardian", "!lit vault"])?;

    // Between one and three rooms are lit.
    ctx.quantify(
        1.0,
        3.0,
        &["lit entrance", "lit hall", "lit crypt", "lit vault"],
    )?;

    println!("constraints:\n{}", ctx.show_constraints());

    for sample in 1..=5 {
        let world = ctx.solve()?;
        println!("dungeon {sample}: {}", world.true_attributes().join(", "));
    }

    Ok(())
}
