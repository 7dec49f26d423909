use std::collections::HashMap;

/// Timer handles for replies that are decided but not shown yet, keyed by
/// the id of the user message they answer. Handles cancel on drop (as
/// `gloo_timers::callback::Timeout` does), so removing a handle is enough
/// to stop its reply.
#[derive(Debug)]
pub struct PendingReplies<H> {
    handles: HashMap<u64, H>,
}

impl<H> PendingReplies<H> {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    /// Tracks a new timer. A handle already stored for the same message is
    /// dropped and thereby cancelled.
    pub fn track(&mut self, reply_to: u64, handle: H) {
        self.handles.insert(reply_to, handle);
    }

    /// Forgets a timer that has fired.
    pub fn settle(&mut self, reply_to: u64) -> Option<H> {
        self.handles.remove(&reply_to)
    }

    /// Drops every outstanding timer. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.handles.len();
        self.handles.clear();
        cancelled
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H> Default for PendingReplies<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stands in for a timer: counts how often it gets dropped.
    struct Handle(Rc<Cell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_cancel_all_drops_every_handle() {
        let dropped = Rc::new(Cell::new(0));
        let mut pending = PendingReplies::new();
        pending.track(3, Handle(dropped.clone()));
        pending.track(5, Handle(dropped.clone()));

        assert_eq!(pending.cancel_all(), 2);
        assert_eq!(dropped.get(), 2);
        assert!(pending.is_empty());
        assert_eq!(pending.cancel_all(), 0);
    }

    #[test]
    fn test_settled_reply_is_no_longer_cancelled() {
        let dropped = Rc::new(Cell::new(0));
        let mut pending = PendingReplies::new();
        pending.track(3, Handle(dropped.clone()));
        pending.track(5, Handle(dropped.clone()));

        let fired = pending.settle(3);
        assert!(fired.is_some());
        assert_eq!(pending.len(), 1);
        drop(fired);
        assert_eq!(dropped.get(), 1);

        pending.cancel_all();
        assert_eq!(dropped.get(), 2);
        assert!(pending.settle(3).is_none());
    }

    #[test]
    fn test_tracking_same_message_replaces_old_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut pending = PendingReplies::new();
        pending.track(7, Handle(dropped.clone()));
        pending.track(7, Handle(dropped.clone()));

        assert_eq!(dropped.get(), 1);
        assert_eq!(pending.len(), 1);
    }
}
