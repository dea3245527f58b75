use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};

/// A repeating timer that fires at a fixed interval.
///
/// Each tick emits the current [`Instant`]. The `id` string separates timers
/// that coexist, e.g. a cursor blink and a spinner in the same prompt.
///
/// # Example
///
/// ```rust,ignore
/// let sub = subscribe(Every::new(Duration::from_millis(100), "spinner"))
///     .map(|_| Message::Tick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// Distinguishes this timer from others.
    pub id: &'static str,
}

impl Every {
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick of a tokio interval completes immediately; skip it so
        // a blink or spinner frame does not advance the moment it starts.
        let stream = tokio_stream::wrappers::IntervalStream::new(interval)
            .skip(1)
            .map(|tick| tick.into_std());
        Box::pin(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_depends_on_name() {
        let a = Every::new(Duration::from_millis(100), "spinner");
        let b = Every::new(Duration::from_millis(100), "blink");
        assert_ne!(a.id(), b.id());
        assert_eq!(
            a.id(),
            Every::new(Duration::from_millis(530), "spinner").id()
        );
    }

    #[tokio::test]
    async fn every_skips_the_immediate_tick() {
        let start = Instant::now();
        let mut stream = Every::new(Duration::from_millis(100), "tick").stream();
        assert!(stream.next().await.is_some());
        assert!(start.elapsed() >= Duration::from_millis(90));
    }
}
