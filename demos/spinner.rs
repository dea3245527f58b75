//! # Spinner
//!
//! Spin while a fake job runs in the background, reporting its steps.
//!
//! Run with: `cargo run --example spinner`

#[path = "logging.rs"]
mod logging;

use infinite::widgets::spinner::Shape;
use infinite::{Spinner, SpinnerOptions};
use std::time::Duration;

#[infinite::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let result = Spinner::new(SpinnerOptions {
        prompt: "Preparing...".into(),
        shape: Shape::Dot,
        ..SpinnerOptions::default()
    })?
    .display(|spinner| async move {
        for step in ["resolve", "download", "unpack"] {
            spinner.set_prompt(format!("{step}..."));
            infinite::tokio::time::sleep(Duration::from_millis(800)).await;
            spinner.println(format!("✓ {step}"));
        }
        spinner.finish("All done");
        3
    })
    .await?;

    match result {
        Some(steps) => println!("{steps} steps finished"),
        None => println!("cancelled"),
    }
    Ok(())
}
