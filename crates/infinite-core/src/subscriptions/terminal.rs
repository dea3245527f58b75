use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Identity marker for the terminal event subscription.
///
/// There is only ever one terminal event stream per program, so every
/// `terminal_events` subscription shares this id regardless of its mapping.
pub struct TerminalEvents;

/// Create a terminal events subscription that maps each event through `map`.
///
/// Return `Some(msg)` to forward an event to the program or `None` to drop it.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    // The EventStream is created inside the task. Creating it eagerly on every
    // `subscriptions()` call would touch crossterm's global reader and steal
    // events from the stream that is already running.
    Subscription {
        id: SubscriptionId::of::<TerminalEvents>(),
        spawn: Box::new(move |tx: mpsc::UnboundedSender<Msg>| -> AbortHandle {
            tokio::spawn(async move {
                let mut events = EventStream::new();
                while let Some(result) = events.next().await {
                    let event = match result {
                        Ok(event) => event,
                        Err(err) => {
                            tracing::debug!(%err, "terminal event stream error");
                            continue;
                        }
                    };
                    let Some(msg) = TerminalEvent::from_crossterm(event).and_then(&map) else {
                        continue;
                    };
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            })
            .abort_handle()
        }),
    }
}
