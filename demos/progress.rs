//! # Progress
//!
//! Copy some fake files and advance the bar as each one finishes.
//!
//! Run with: `cargo run --example progress`

#[path = "logging.rs"]
mod logging;

use infinite::{Progress, ProgressOptions};
use std::time::Duration;

#[infinite::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let files: Vec<String> = (1..=40).map(|i| format!("file-{i:02}.dat")).collect();
    let total = files.len() as u64;

    let copied = Progress::new(ProgressOptions {
        total,
        width: 30,
        prompt: "Copying".into(),
        ..ProgressOptions::default()
    })?
    .display(|bar| async move {
        let mut copied = 0;
        for file in files {
            infinite::tokio::time::sleep(Duration::from_millis(60)).await;
            if file.ends_with("20.dat") {
                bar.println(format!("halfway: {file}"));
            }
            bar.incr(1);
            copied += 1;
        }
        copied
    })
    .await?;

    match copied {
        Some(n) => println!("copied {n} files"),
        None => println!("cancelled"),
    }
    Ok(())
}
