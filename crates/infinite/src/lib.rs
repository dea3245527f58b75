//! **infinite** -- composable interactive command-line prompts for [`ratatui`].
//!
//! This is the umbrella crate. It re-exports the runtime from
//! [`infinite_core`], the widgets from [`infinite_widgets`] and adds
//! ready-to-run prompts, each with an options record and an async `display`
//! entry point:
//!
//! | Prompt | Answer |
//! |--------|--------|
//! | [`SingleSelect`] | index of the chosen item |
//! | [`MultiSelect`] | indices of the chosen items, ascending |
//! | [`Text`] | the typed line |
//! | [`Confirm`] | `bool` |
//! | [`Autocomplete`] | the typed or completed line |
//! | [`Spinner`] | output of the background task |
//! | [`Progress`] | output of the background task |
//!
//! Every `display` returns `Ok(None)` when the user cancels with Esc or
//! Ctrl+C. Misconfigured options are rejected by the constructors with
//! [`InfError::InvalidConfig`] before anything is drawn.
//!
//! # Quick start
//!
//! ```ignore
//! use infinite::{SelectOptions, SingleSelect};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), infinite::InfError> {
//!     let fruits = ["apple", "banana", "cherry"];
//!     let picked = SingleSelect::new(fruits, SelectOptions::default())?
//!         .display()
//!         .await?;
//!     if let Some(i) = picked {
//!         println!("you picked {}", fruits[i]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The library emits [`tracing`] events but never installs a subscriber.

mod autocomplete;
mod confirm;
mod display;
mod error;
mod progress;
mod select;
mod spinner;
pub mod startup;
mod task;
mod text;

pub use autocomplete::{Autocomplete, AutocompleteOptions};
pub use confirm::{Confirm, ConfirmOptions};
pub use error::InfError;
pub use progress::{Progress, ProgressHandle, ProgressOptions};
pub use select::{MultiSelect, SelectOptions, SingleSelect};
pub use spinner::{Spinner, SpinnerHandle, SpinnerOptions};
pub use startup::StartUp;
pub use text::{Text, TextOptions};

pub use infinite_core::*;
pub mod widgets {
    pub use infinite_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
