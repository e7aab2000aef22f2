use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation counter guarding against stale responses.
///
/// Each fetch takes a [`Ticket`]. Starting a newer fetch or calling
/// [`RequestLatch::invalidate`] (on unmount) makes older tickets stale, and
/// their responses are dropped.
#[derive(Clone, Debug, Default)]
pub struct RequestLatch {
    generation: Arc<AtomicU64>,
}

#[derive(Clone, Debug)]
pub struct Ticket {
    generation: u64,
    latch: Arc<AtomicU64>,
}

impl RequestLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        Ticket {
            generation,
            latch: Arc::clone(&self.generation),
        }
    }

    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.latch.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let latch = RequestLatch::new();
        let first = latch.begin();
        assert!(first.is_current());

        let second = latch.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_invalidate_discards_in_flight_response() {
        let latch = RequestLatch::new();
        let ticket = latch.begin();
        latch.invalidate();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_clones_share_generation() {
        let latch = RequestLatch::new();
        let other = latch.clone();
        let ticket = latch.begin();
        other.invalidate();
        assert!(!ticket.is_current());
    }
}
