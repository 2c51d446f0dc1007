use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Point;

/// Notifications the control sends to its listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlEvent {
    ValueChanged,
    TouchDown,
    /// A touch-down with more than one tap (double tap).
    TouchDownRepeat,
    TouchDragEnter,
    TouchDragExit,
    TouchDragInside,
    TouchDragOutside,
    TouchUpInside,
    TouchUpOutside,
    TouchCancel,
}

impl ControlEvent {
    pub const ALL: [ControlEvent; 10] = [
        Self::ValueChanged,
        Self::TouchDown,
        Self::TouchDownRepeat,
        Self::TouchDragEnter,
        Self::TouchDragExit,
        Self::TouchDragInside,
        Self::TouchDragOutside,
        Self::TouchUpInside,
        Self::TouchUpOutside,
        Self::TouchCancel,
    ];

    /// Events emitted by the touch tracking (everything except `ValueChanged`).
    pub fn is_touch(self) -> bool {
        !matches!(self, Self::ValueChanged)
    }
}

/// Payload handed to listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlEventArgs {
    pub event: ControlEvent,
    /// The control value after the change that triggered the event.
    pub value: i64,
    /// Location of the touch that caused the event; `None` for programmatic changes.
    pub location: Option<Point>,
}

/// Handle returned by listener registration, used to remove the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&ControlEventArgs)>;

struct Entry {
    id: ListenerId,
    events: Vec<ControlEvent>,
    f: Listener,
}

/// Typed listener list. Listeners run in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Listeners {
    pub(crate) fn add(&mut self, events: Vec<ControlEvent>, f: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry { id, events, f });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn dispatch(&mut self, args: &ControlEventArgs) {
        for entry in self.entries.iter_mut() {
            if entry.events.contains(&args.event) {
                (entry.f)(args);
            }
        }
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
