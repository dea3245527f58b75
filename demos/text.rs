//! # Text
//!
//! Ask for a name, then a password.
//!
//! Run with: `cargo run --example text`

#[path = "logging.rs"]
mod logging;

use infinite::widgets::input::EchoMode;
use infinite::{Text, TextOptions};

#[infinite::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let Some(name) = Text::new(TextOptions {
        prompt: "Name: ".into(),
        placeholder: "anonymous".into(),
        char_limit: 32,
        ..TextOptions::default()
    })?
    .display()
    .await?
    else {
        println!("cancelled");
        return Ok(());
    };

    let password = Text::new(TextOptions {
        prompt: "Password: ".into(),
        echo_mode: EchoMode::Password('*'),
        ..TextOptions::default()
    })?
    .display()
    .await?;

    match password {
        Some(password) => println!("hello {name}, your password has {} characters", password.chars().count()),
        None => println!("cancelled"),
    }
    Ok(())
}
