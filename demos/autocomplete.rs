//! # Autocomplete
//!
//! Complete the last word of the line from a fixed vocabulary. Up/Down/Tab
//! move through the suggestions, Enter applies one, Enter again submits.
//!
//! Run with: `cargo run --example autocomplete`

#[path = "logging.rs"]
mod logging;

use infinite::{Autocomplete, AutocompleteOptions, TextOptions};

const COMMANDS: &[&str] = &[
    "build", "bench", "check", "clean", "clippy", "doc", "fetch", "fmt", "run", "test", "tree",
    "update",
];

/// Byte offset where the word under the cursor starts.
fn word_start(text: &str, cursor: usize) -> usize {
    let before: String = text.chars().take(cursor).collect();
    before.rfind(' ').map_or(0, |i| i + 1)
}

#[infinite::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let options = AutocompleteOptions {
        input: TextOptions {
            prompt: "cargo ".into(),
            placeholder: "type a command".into(),
            ..TextOptions::default()
        },
        ..AutocompleteOptions::default()
    };

    let line = Autocomplete::new(options, |text: &str, cursor: usize| {
        let before: String = text.chars().take(cursor).collect();
        let word = &before[word_start(text, cursor)..];
        if word.is_empty() {
            return vec![];
        }
        COMMANDS
            .iter()
            .filter(|c| c.starts_with(word))
            .map(|c| c.to_string())
            .collect()
    })?
    .with_completer(|text: &str, cursor: usize, suggestion: &str| {
        let before: String = text.chars().take(cursor).collect();
        let after: String = text.chars().skip(cursor).collect();
        let head = &before[..word_start(text, cursor)];
        let completed = format!("{head}{suggestion}");
        let new_cursor = completed.chars().count();
        (format!("{completed}{after}"), new_cursor)
    })
    .display()
    .await?;

    match line {
        Some(line) => println!("running: cargo {line}"),
        None => println!("cancelled"),
    }
    Ok(())
}
