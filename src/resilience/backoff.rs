/// Exponential retry delay for failed fetches, in seconds. Doubles on every
/// failure up to the cap; a successful fetch resets it.
#[derive(Debug, Clone)]
pub struct Backoff {
    next: u64,
    base: u64,
    cap: u64,
}

impl Backoff {
    #[must_use]
    pub fn new(base: u64, cap: u64) -> Self {
        Self {
            next: base,
            base,
            cap,
        }
    }

    pub fn next_delay(&mut self) -> u64 {
        let delay = self.next;
        self.next = self.next.saturating_mul(2).min(self.cap);
        delay
    }

    pub fn reset(&mut self) {
        self.next = self.base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_until_capped() {
        let mut backoff = Backoff::new(10, 300);
        assert_eq!(backoff.next_delay(), 10);
        assert_eq!(backoff.next_delay(), 20);
        assert_eq!(backoff.next_delay(), 40);
        assert_eq!(backoff.next_delay(), 80);
        assert_eq!(backoff.next_delay(), 160);
        assert_eq!(backoff.next_delay(), 300);
        assert_eq!(backoff.next_delay(), 300);
    }

    #[test]
    fn reset_returns_to_base() {
        let mut backoff = Backoff::new(10, 300);
        backoff.next_delay();
        backoff.next_delay();
        backoff.reset();
        assert_eq!(backoff.next_delay(), 10);
    }
}
