use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide count of image-generating requests.
///
/// Owned by the server and shared with the dispatcher through an `Arc`.
/// Each call to [`RequestCounter::next`] hands out a distinct value, which
/// doubles as the image seed and the ETag suffix.
#[derive(Debug, Default)]
pub struct RequestCounter {
    value: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new value. The first call returns 1.
    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn total(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::RequestCounter;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn starts_at_zero_and_counts_up() {
        let counter = RequestCounter::new();

        assert_eq!(counter.total(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        assert_eq!(counter.total(), 2);
    }

    #[test]
    fn concurrent_increments_never_repeat() {
        // Arrange
        let counter = Arc::new(RequestCounter::new());
        let threads = 8;
        let per_thread = 500;

        // Act
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let counter = counter.clone();
                thread::spawn(move || (0..per_thread).map(|_| counter.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "value {value} handed out twice");
            }
        }

        // Assert
        let expected = (threads * per_thread) as u64;
        assert_eq!(seen.len() as u64, expected);
        assert_eq!(counter.total(), expected);
        assert_eq!(seen.iter().max().copied(), Some(expected));
    }
}
