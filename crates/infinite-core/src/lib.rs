//! Runtime for the **infinite** prompt toolkit.
//!
//! `infinite-core` provides the traits, types and event loop behind every
//! prompt. Programs follow the [Elm Architecture]: state changes only in
//! `update`, rendering is a pure `view`, and side effects are described by
//! [`Command`]s and [`Subscription`]s.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level program trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Side effect interpreted by the runtime |
//! | [`Subscription`] | Long-lived event source (terminal events, timers) |
//! | [`Program`] | Drives a [`Model`] in an inline terminal viewport |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit tests |
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::{Command, TerminalCommand};
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{OutputTarget, Program, ProgramError, ProgramHandle, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, Every};
