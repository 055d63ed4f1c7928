//! DOM Events
//!
//! Event objects, listener handles and the per-document listener store.

use std::fmt;
use std::rc::Rc;

use crate::{Document, NodeId};

/// Event types the host dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Submit,
    Input,
    DOMContentLoaded,
}

impl EventType {
    /// Platform event name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
            Self::Input => "input",
            Self::DOMContentLoaded => "DOMContentLoaded",
        }
    }

    fn bubbles(self) -> bool {
        true
    }

    fn cancelable(self) -> bool {
        matches!(self, Self::Click | Self::Submit)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DOM event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub target: NodeId,
    pub current_target: Option<NodeId>,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    /// Create an event with the platform defaults for its type
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            current_target: None,
            bubbles: event_type.bubbles(),
            cancelable: event_type.cancelable(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Prevent default action (ignored for non-cancelable events)
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation after the current node's listeners
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Event callback; receives the document so handlers can mutate it
pub type Listener = Rc<dyn Fn(&mut Document, &mut Event)>;

/// Handle returned by `add_event_listener`, used to remove it again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    node: NodeId,
    event_type: EventType,
    handler: Listener,
}

/// Listener registrations in insertion order
#[derive(Default)]
pub(crate) struct ListenerStore {
    next_id: u64,
    entries: Vec<Registration>,
}

impl ListenerStore {
    pub(crate) fn add(&mut self, node: NodeId, event_type: EventType, handler: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push(Registration {
            id,
            node,
            event_type,
            handler,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        self.entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }

    /// Snapshot of handlers for one node, so dispatch can borrow the document
    pub(crate) fn snapshot(&self, node: NodeId, event_type: EventType) -> Vec<(ListenerId, Listener)> {
        self.entries
            .iter()
            .filter(|r| r.node == node && r.event_type == event_type)
            .map(|r| (r.id, Rc::clone(&r.handler)))
            .collect()
    }

    pub(crate) fn count_for(&self, node: NodeId, event_type: EventType) -> usize {
        self.entries
            .iter()
            .filter(|r| r.node == node && r.event_type == event_type)
            .count()
    }
}

impl fmt::Debug for ListenerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerStore")
            .field("next_id", &self.next_id)
            .field("registered", &self.entries.len())
            .finish()
    }
}
