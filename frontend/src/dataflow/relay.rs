//! Event streaming Relay backed by an unbounded channel.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
#[cfg(debug_assertions)]
use std::sync::{Arc, OnceLock};

/// Type-safe event emitter feeding an [`Actor`](super::Actor).
///
/// # Examples
///
/// ```rust,ignore
/// let (query_changed_relay, mut query_changed_stream) = relay::<String>();
/// query_changed_relay.send("osaka".to_string());
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

/// Sent from two different call sites (debug builds only).
#[cfg(debug_assertions)]
#[derive(Debug, Clone)]
pub enum RelayError {
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    // Each relay has exactly one emitting call site.
    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Emits an event; dropped silently if the actor is gone.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(error) = self.check_single_source() {
            panic!("{:?}", error);
        }
        let _ = self.sender.unbounded_send(value);
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_relay_delivers_in_order() {
        let (query_changed_relay, mut stream) = relay::<String>();

        for query in ["o", "os", "osa"] {
            query_changed_relay.send(query.to_string());
        }

        assert_eq!(stream.next().await.as_deref(), Some("o"));
        assert_eq!(stream.next().await.as_deref(), Some("os"));
        assert_eq!(stream.next().await.as_deref(), Some("osa"));
    }

    #[tokio::test]
    async fn test_same_call_site_may_send_repeatedly() {
        let (reset_pressed_relay, mut stream) = relay::<()>();

        for _ in 0..2 {
            reset_pressed_relay.send(());
        }

        assert_eq!(stream.next().await, Some(()));
        assert_eq!(stream.next().await, Some(()));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "MultipleEmitters")]
    fn test_second_call_site_panics() {
        let (base_selected_relay, _stream) = relay::<String>();
        base_selected_relay.send("Tokyo".to_string());
        base_selected_relay.send("Osaka".to_string());
    }

    #[test]
    fn test_send_without_receiver_is_silent() {
        let (tag_selected_relay, stream) = relay::<String>();
        drop(stream);
        tag_selected_relay.send("design".to_string());
    }
}
