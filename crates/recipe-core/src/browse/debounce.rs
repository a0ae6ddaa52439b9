//! Debounce tickets.
//!
//! Every input takes a ticket and supersedes whatever was pending. The
//! caller waits out the quiet period however its runtime allows, then calls
//! `fire` with its ticket: only the latest ticket yields the value, and only
//! once.

/// Token for one debounced input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `value`, cancelling any earlier pending value.
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// The pending value, if `ticket` is still the latest and has not fired.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value; outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// True when nothing is waiting to fire.
    pub fn quiet(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_fires_once() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.push("chicken");
        assert!(!debouncer.quiet());
        assert_eq!(debouncer.fire(ticket), Some("chicken"));
        assert_eq!(debouncer.fire(ticket), None);
        assert!(debouncer.quiet());
    }

    #[test]
    fn test_newer_input_supersedes() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.push("c");
        let second = debouncer.push("ch");
        let third = debouncer.push("chi");

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), None);
        assert_eq!(debouncer.fire(third), Some("chi"));
    }

    #[test]
    fn test_cancel_invalidates_ticket() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.push(1);
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
        assert!(debouncer.quiet());
    }
}
