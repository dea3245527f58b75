//! # Confirm
//!
//! Run with: `cargo run --example confirm`

#[path = "logging.rs"]
mod logging;

use infinite::{Confirm, ConfirmOptions};

#[infinite::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let answer = Confirm::new(ConfirmOptions {
        prompt: "Deploy to production?".into(),
        default: true,
        ..ConfirmOptions::default()
    })
    .display()
    .await?;

    match answer {
        Some(true) => println!("deploying"),
        Some(false) => println!("skipped"),
        None => println!("cancelled"),
    }
    Ok(())
}
