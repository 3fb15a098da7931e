use std::time::{Duration, Instant};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Owned one-second countdown handle.
///
/// The handle is armed when a session starts running and disarmed when it
/// finishes or is reset. It never fires on its own: the event loop polls it
/// with the current instant and gets back the number of whole seconds that
/// became due since the previous poll.
#[derive(Clone, Debug, Default)]
pub struct Countdown {
    next_fire: Option<Instant>,
}

impl Countdown {
    pub fn start(&mut self, now: Instant) {
        self.next_fire = Some(now + ONE_SECOND);
    }

    /// Disarm the countdown. Cancelling an idle handle is a no-op.
    pub fn cancel(&mut self) {
        self.next_fire = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next_fire else {
            return 0;
        };

        let mut due = 0;
        while now >= deadline {
            due += 1;
            deadline += ONE_SECOND;
        }
        self.next_fire = Some(deadline);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_countdown_never_fires() {
        let mut countdown = Countdown::default();
        let now = Instant::now();
        assert!(!countdown.is_armed());
        assert_eq!(countdown.poll(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_fires_once_per_whole_second() {
        let mut countdown = Countdown::default();
        let t0 = Instant::now();
        countdown.start(t0);

        assert_eq!(countdown.poll(t0 + Duration::from_millis(500)), 0);
        assert_eq!(countdown.poll(t0 + Duration::from_millis(1000)), 1);
        // Same second polled again reports nothing new
        assert_eq!(countdown.poll(t0 + Duration::from_millis(1400)), 0);
        assert_eq!(countdown.poll(t0 + Duration::from_millis(2100)), 1);
    }

    #[test]
    fn test_late_poll_reports_every_missed_second() {
        let mut countdown = Countdown::default();
        let t0 = Instant::now();
        countdown.start(t0);
        assert_eq!(countdown.poll(t0 + Duration::from_millis(3500)), 3);
        assert_eq!(countdown.poll(t0 + Duration::from_millis(4000)), 1);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut countdown = Countdown::default();
        let t0 = Instant::now();
        countdown.start(t0);
        countdown.cancel();
        countdown.cancel();
        assert!(!countdown.is_armed());
        assert_eq!(countdown.poll(t0 + Duration::from_secs(5)), 0);
    }
}
