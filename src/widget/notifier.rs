//! Deferred, coalesced change notification.
//!
//! The control never calls its listeners from inside a mutating call. A
//! change raises a single-slot dirty flag and posts one task to the owning
//! thread's [`MessageQueue`]; further changes before that task runs are
//! absorbed by the flag. When the task runs it reads the control's state at
//! that moment, so listeners always see the final result of a burst of
//! updates rather than each intermediate step.
//!
//! Everything here is single-threaded (`Rc`, `Cell`, `RefCell`). "Later"
//! means a later turn of the host's event loop, not another thread.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use dropdown::widget::{ChangeNotifier, MessageQueue};
//!
//! let queue = MessageQueue::new();
//! let notifier = ChangeNotifier::new(queue.clone());
//! let fired = Rc::new(Cell::new(0));
//!
//! for _ in 0..3 {
//!     let fired = Rc::clone(&fired);
//!     notifier.trigger(move || fired.set(fired.get() + 1));
//! }
//!
//! assert_eq!(fired.get(), 0);
//! queue.dispatch_pending();
//! assert_eq!(fired.get(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// FIFO of deferred tasks run by the host between input events.
///
/// Cloning yields another handle to the same queue.
#[derive(Clone, Default)]
pub struct MessageQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl MessageQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to run on the next dispatch.
    pub fn post(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Runs the tasks that were queued when the dispatch started.
    ///
    /// Tasks posted while dispatching wait for the next call. Returns the
    /// number of tasks run.
    pub fn dispatch_pending(&self) -> usize {
        let batch = self.pending();

        for _ in 0..batch {
            let Some(task) = self.tasks.borrow_mut().pop_front() else {
                break;
            };
            task();
        }

        if batch > 0 {
            tracing::trace!(tasks = batch, "dispatched queued tasks");
        }
        batch
    }
}

impl fmt::Debug for MessageQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Single-slot, edge-triggered scheduler for one notification at a time.
#[derive(Debug)]
pub struct ChangeNotifier {
    queue: MessageQueue,
    pending: Rc<Cell<bool>>,
}

impl ChangeNotifier {
    /// Creates a notifier posting to `queue`.
    #[must_use]
    pub fn new(queue: MessageQueue) -> Self {
        Self {
            queue,
            pending: Rc::new(Cell::new(false)),
        }
    }

    /// Whether a delivery is scheduled but has not run yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Schedules `deliver`, unless a delivery is already pending.
    ///
    /// The flag is cleared right before `deliver` runs, so a change made by a
    /// listener during delivery schedules a fresh notification.
    pub fn trigger(&self, deliver: impl FnOnce() + 'static) {
        if self.pending.replace(true) {
            return;
        }

        let pending = Rc::clone(&self.pending);
        self.queue.post(move || {
            pending.set(false);
            deliver();
        });
    }
}

/// Handle returned when registering a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Observer set keyed by [`ListenerId`].
pub struct ListenerList<L: ?Sized> {
    next_id: u64,
    entries: Vec<(ListenerId, Rc<L>)>,
}

impl<L: ?Sized> Default for ListenerList<L> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<L: ?Sized> ListenerList<L> {
    /// Registers a listener.
    pub fn add(&mut self, listener: Rc<L>) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    /// Unregisters a listener. Unknown ids are ignored.
    pub fn remove(&mut self, id: ListenerId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Whether `id` is still registered.
    #[must_use]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies the current registrations so they can be called without
    /// holding a borrow of the owner.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(ListenerId, Rc<L>)> {
        self.entries.clone()
    }
}

impl<L: ?Sized> fmt::Debug for ListenerList<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerList")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_coalesces_until_dispatched() {
        let queue = MessageQueue::new();
        let notifier = ChangeNotifier::new(queue.clone());
        let count = Rc::new(Cell::new(0));

        for _ in 0..5 {
            let count = Rc::clone(&count);
            notifier.trigger(move || count.set(count.get() + 1));
        }

        assert!(notifier.is_pending());
        assert_eq!(queue.pending(), 1);
        queue.dispatch_pending();
        assert_eq!(count.get(), 1);
        assert!(!notifier.is_pending());
    }

    #[test]
    fn tasks_posted_during_dispatch_wait_for_next_turn() {
        let queue = MessageQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        {
            let inner_queue = queue.clone();
            let log = Rc::clone(&log);
            queue.post(move || {
                log.borrow_mut().push("first");
                let log = Rc::clone(&log);
                inner_queue.post(move || log.borrow_mut().push("second"));
            });
        }

        assert_eq!(queue.dispatch_pending(), 1);
        assert_eq!(*log.borrow(), vec!["first"]);
        assert_eq!(queue.dispatch_pending(), 1);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn retrigger_from_inside_delivery_schedules_again() {
        let queue = MessageQueue::new();
        let notifier = Rc::new(ChangeNotifier::new(queue.clone()));
        let count = Rc::new(Cell::new(0));

        {
            let again = Rc::clone(&notifier);
            let count = Rc::clone(&count);
            notifier.trigger(move || {
                count.set(count.get() + 1);
                let count = Rc::clone(&count);
                again.trigger(move || count.set(count.get() + 1));
            });
        }

        queue.dispatch_pending();
        assert_eq!(count.get(), 1);
        assert!(notifier.is_pending());
        queue.dispatch_pending();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn listener_list_add_remove() {
        let mut list: ListenerList<str> = ListenerList::default();
        let a = list.add(Rc::from("a"));
        let b = list.add(Rc::from("b"));

        list.remove(a);
        assert!(!list.contains(a));
        assert!(list.contains(b));
        assert_eq!(list.len(), 1);
        assert_eq!(list.snapshot().len(), 1);
    }
}
