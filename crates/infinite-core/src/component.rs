use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives the area to draw into, so a parent can
/// decide where each child renders. Composite widgets own their children and
/// forward each message to exactly one of them, lifting the child's command
/// with [`Command::map`]:
///
/// ```rust,ignore
/// match msg {
///     Msg::Input(m) => self.input.update(m).map(Msg::Input),
///     Msg::Suggestions(m) => self.suggestions.update(m).map(Msg::Suggestions),
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Consume one message, mutate state, and return a [`Command`].
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must confine drawing to it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Timers and other event sources this component needs right now.
    ///
    /// The parent collects these and includes them, mapped, in its own
    /// subscription list.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
