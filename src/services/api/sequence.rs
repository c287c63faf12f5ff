use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request tags for a "last request wins" fetch guard.
///
/// Rapid filter changes can leave several fetches in flight at once;
/// responses resolve in any order. Callers tag each fetch with
/// [`begin`](Self::begin) and drop any response whose tag fails
/// [`is_current`](Self::is_current), so only the newest request's data
/// ever lands.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation and return its tag, invalidating
    /// every earlier tag.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `tag` still belongs to the newest request.
    pub fn is_current(&self, tag: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == tag
    }
}

#[cfg(test)]
mod tests {
    use super::RequestSequence;

    #[test]
    fn test_single_request_is_current() {
        let sequence = RequestSequence::new();
        let tag = sequence.begin();
        assert!(sequence.is_current(tag));
    }

    #[test]
    fn test_newer_request_invalidates_older() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();

        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn test_stale_response_discarded_in_order_of_arrival() {
        let sequence = RequestSequence::new();
        let slow = sequence.begin();
        let fast = sequence.begin();

        // fast response arrives first and is accepted
        assert!(sequence.is_current(fast));
        // slow response arrives later and is dropped
        assert!(!sequence.is_current(slow));
    }
}
