//! Event channel built on crossbeam-channel.
//!
//! The walker runs on whatever thread calls it; the CLI listens on another.

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::{Event, OrganizeEvent};

/// Sending half handed to the walker. Cheap to clone.
#[derive(Clone)]
pub struct EventSender {
    inner: Sender<Event>,
}

impl EventSender {
    /// Send an event. A dropped receiver is not an error: events are
    /// optional, the run goes on without them.
    pub fn send(&self, event: Event) {
        let _ = self.inner.send(event);
    }

    pub fn organize(&self, event: OrganizeEvent) {
        self.send(Event::Organize(event));
    }
}

/// Receiving half used by a front end
pub struct EventReceiver {
    inner: Receiver<Event>,
}

impl EventReceiver {
    /// Block until the next event, or `None` once every sender is gone
    pub fn recv(&self) -> Option<Event> {
        self.inner.recv().ok()
    }

    pub fn try_recv(&self) -> Option<Event> {
        self.inner.try_recv().ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.inner.iter()
    }
}

pub struct EventChannel;

impl EventChannel {
    /// Create a new unbounded event channel.
    pub fn new() -> (EventSender, EventReceiver) {
        let (sender, receiver) = unbounded();
        (
            EventSender { inner: sender },
            EventReceiver { inner: receiver },
        )
    }
}

/// A sender whose receiver is already gone, for runs nobody watches.
pub fn null_sender() -> EventSender {
    let (sender, _receiver) = EventChannel::new();
    sender
}
