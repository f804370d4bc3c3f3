use std::time::{Duration, Instant};

/// Collapses a burst of values into the last one, released after a quiet period.
///
/// Time is passed in by the caller, which keeps the debouncer deterministic
/// and lets the UI loop drive it from its own tick.
#[derive(Debug, Clone)]
pub struct Debouncer<V> {
    quiet: Duration,
    pending: Option<(V, Instant)>,
}

impl<V> Debouncer<V> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the quiet period.
    pub fn schedule(&mut self, value: V, now: Instant) {
        self.pending = Some((value, now + self.quiet));
    }

    /// Releases the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<V> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_collapses_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        debouncer.schedule(800, start);
        debouncer.schedule(900, start + Duration::from_millis(100));
        debouncer.schedule(1000, start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(450)), Some(1000));
        assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        debouncer.schedule(1, start);
        assert!(debouncer.is_pending());

        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }
}
