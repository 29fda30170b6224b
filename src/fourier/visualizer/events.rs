//! Notifications scoped to a single visualizer

use std::fmt;
use std::sync::mpsc::{self, Receiver};

use crate::fourier::visualizer::types::ImageMode;

/// Something observable happened to a visualizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizerEvent {
    /// A new spectrum replaced the previous one
    ImageLoaded {
        width: usize,
        height: usize,
        mode: ImageMode,
    },
    /// The reconstruction was recomputed for a new frequency count
    FrequencyCountChanged { count: usize, max: usize },
}

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&VisualizerEvent) + Send>;

/// Per-instance list of event handlers, called in subscription order.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&VisualizerEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Subscribes a channel; every event is cloned into it.
    ///
    /// Events sent after the receiver is dropped are discarded.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<VisualizerEvent>) {
        let (sender, receiver) = mpsc::channel();
        let id = self.subscribe(move |event| {
            let _ = sender.send(event.clone());
        });
        (id, receiver)
    }

    /// Returns whether a handler was removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, event: &VisualizerEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
