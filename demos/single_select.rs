//! # Single Select
//!
//! Pick one item from a list with filtering turned off.
//!
//! Run with: `cargo run --example single_select`

#[path = "logging.rs"]
mod logging;

use infinite::{SelectOptions, SingleSelect};

#[infinite::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let options = [
        "1 Buy carrots",
        "2 Buy celery",
        "3 Buy kohlrabi",
        "4 Buy computer",
        "5 Buy something",
        "6 Buy car",
        "7 Buy subway",
    ];
    let selected = SingleSelect::new(
        options,
        SelectOptions {
            prompt: "Hello world".into(),
            filter: false,
            ..SelectOptions::default()
        },
    )?
    .display()
    .await?;

    match selected {
        Some(i) => println!("you selection {}", options[i]),
        None => println!("cancelled"),
    }
    Ok(())
}
