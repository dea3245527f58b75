//! # Multi Select
//!
//! Filterable multi select with a custom row renderer. Tab toggles a row,
//! Ctrl+A toggles every visible row.
//!
//! Run with: `cargo run --example multi_select`

#[path = "logging.rs"]
mod logging;

use infinite::ratatui::style::{Color, Style};
use infinite::ratatui::text::{Line, Span};
use infinite::widgets::selection::Choice;
use infinite::{MultiSelect, SelectOptions};

#[infinite::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let toppings = [
        "Cheese", "Tomato", "Basil", "Mushroom", "Olive", "Onion", "Pepper", "Ham", "Pineapple",
    ];
    let picked = MultiSelect::new(
        toppings,
        SelectOptions {
            prompt: "Toppings:".into(),
            page_size: 6,
            ..SelectOptions::default()
        },
    )?
    .with_row_render(|choice: &Choice, is_cursor: bool, is_selected: bool| {
        let mark = if is_selected { "[x]" } else { "[ ]" };
        let style = if is_cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(format!("{mark} ")),
            Span::styled(choice.text.clone(), style),
        ])
    })
    .display()
    .await?;

    match picked {
        Some(indices) if indices.is_empty() => println!("plain pizza"),
        Some(indices) => {
            let names: Vec<&str> = indices.iter().map(|&i| toppings[i]).collect();
            println!("ordering: {}", names.join(", "));
        }
        None => println!("cancelled"),
    }
    Ok(())
}
