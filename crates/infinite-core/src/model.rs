use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level program trait, following the [Elm Architecture].
///
/// The runtime drives an **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) builds the initial state from `Flags`.
/// 2. [`view`](Model::view) renders the current state into the viewport.
/// 3. Events arrive as messages through [`Subscription`]s.
/// 4. [`update`](Model::update) consumes one message and may return a
///    [`Command`] (quit, print a line, send a follow-up message).
/// 5. Steps 2--4 repeat until a quit command is returned.
///
/// Prompt widgets do not implement `Model` directly; they implement
/// [`Component`](crate::Component) and are wrapped by a driver model that
/// owns exactly one of them.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// Every event that can affect the state.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    type Flags: Send + 'static;

    /// Create the initial state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Consume one message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions. Called after every update; the runtime
    /// starts new ones and cancels the ones no longer returned.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
