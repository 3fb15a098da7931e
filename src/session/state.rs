use std::time::Instant;

use crate::generator::PassageSource;
use crate::session::SessionError;
use crate::session::diff::{self, Diff};
use crate::session::metrics::Metrics;
use crate::session::result::ResultRecord;
use crate::session::timer::Countdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
    Finished,
}

/// A single timed typing attempt: idle until the first input, running while
/// the countdown has time left, finished when it reaches zero.
///
/// Diff and metrics are rebuilt from the whole typed buffer on every change.
pub struct Session<S: PassageSource> {
    source: S,
    passage: Vec<char>,
    typed: String,
    phase: SessionPhase,
    duration_secs: u32,
    time_remaining: u32,
    countdown: Countdown,
    diff: Diff,
    metrics: Metrics,
}

impl<S: PassageSource> Session<S> {
    pub fn new(mut source: S, duration_secs: u32) -> Self {
        let duration_secs = duration_secs.max(1);
        let passage: Vec<char> = source.next_passage().chars().collect();
        let diff = diff::diff(&passage, &[]);
        Self {
            source,
            passage,
            typed: String::new(),
            phase: SessionPhase::Idle,
            duration_secs,
            time_remaining: duration_secs,
            countdown: Countdown::default(),
            diff,
            metrics: Metrics::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn passage(&self) -> &[char] {
        &self.passage
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.duration_secs - self.time_remaining
    }

    pub fn diff(&self) -> &Diff {
        &self.diff
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn is_countdown_armed(&self) -> bool {
        self.countdown.is_armed()
    }

    pub fn configure(&mut self, duration_secs: u32) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Idle {
            return Err(SessionError::NotIdle);
        }
        if duration_secs == 0 {
            return Err(SessionError::ZeroDuration);
        }
        self.duration_secs = duration_secs;
        self.time_remaining = duration_secs;
        Ok(())
    }

    /// Start the countdown. Does nothing unless the session is idle.
    pub fn begin(&mut self, now: Instant) {
        if self.phase != SessionPhase::Idle {
            return;
        }
        self.phase = SessionPhase::Running;
        self.time_remaining = self.duration_secs;
        self.countdown.start(now);
        tracing::info!(duration_secs = self.duration_secs, "typing test started");
    }

    pub fn update_input(&mut self, text: &str) -> Result<(), SessionError> {
        self.update_input_at(text, Instant::now())
    }

    /// Replace the typed buffer. Call `advance(now)` first so seconds that
    /// are already due end the test before this input is counted.
    pub fn update_input_at(&mut self, text: &str, now: Instant) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Finished {
            return Err(SessionError::Finished);
        }
        if self.phase == SessionPhase::Idle {
            self.begin(now);
        }
        self.typed.clear();
        self.typed.push_str(text);
        self.recompute();
        Ok(())
    }

    /// One elapsed second. Returns the result record when this tick ends the test.
    pub fn tick(&mut self) -> Option<ResultRecord> {
        if self.phase != SessionPhase::Running {
            return None;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.recompute();

        if self.time_remaining > 0 {
            return None;
        }

        self.phase = SessionPhase::Finished;
        self.countdown.cancel();
        let record = ResultRecord::now(self.metrics.wpm);
        tracing::info!(
            wpm = record.wpm,
            accuracy = self.metrics.accuracy,
            errors = self.metrics.errors,
            "typing test finished"
        );
        Some(record)
    }

    /// Apply every tick that became due by `now`.
    pub fn advance(&mut self, now: Instant) -> Option<ResultRecord> {
        let due = self.countdown.poll(now);
        for _ in 0..due {
            if let Some(record) = self.tick() {
                return Some(record);
            }
        }
        None
    }

    pub fn reset(&mut self) {
        self.countdown.cancel();
        self.phase = SessionPhase::Idle;
        self.typed.clear();
        self.time_remaining = self.duration_secs;
        self.passage = self.source.next_passage().chars().collect();
        self.recompute();
    }

    fn recompute(&mut self) {
        let typed: Vec<char> = self.typed.chars().collect();
        self.diff = diff::diff(&self.passage, &typed);
        self.metrics = Metrics::from_diff(&self.diff, self.elapsed_secs());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::generator::passage::FixedPassage;

    fn session(text: &str, secs: u32) -> Session<FixedPassage> {
        Session::new(FixedPassage::new(text), secs)
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = session("hello", 30);
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert_eq!(s.time_remaining(), 30);
        assert_eq!(s.typed(), "");
        assert!(!s.is_countdown_armed());
        assert_eq!(s.metrics(), Metrics::default());
    }

    #[test]
    fn test_first_input_starts_running() {
        let mut s = session("hello", 30);
        s.update_input("h").unwrap();
        assert_eq!(s.phase(), SessionPhase::Running);
        assert!(s.is_countdown_armed());
        assert_eq!(s.metrics().correct_keystrokes, 1);
    }

    #[test]
    fn test_tick_ignored_while_idle() {
        let mut s = session("hello", 30);
        assert!(s.tick().is_none());
        assert_eq!(s.time_remaining(), 30);
    }

    #[test]
    fn test_countdown_decreases_by_one_per_tick() {
        let mut s = session("hello", 5);
        s.begin(Instant::now());
        for expected in (1..5).rev() {
            assert!(s.tick().is_none());
            assert_eq!(s.time_remaining(), expected);
            assert_eq!(s.phase(), SessionPhase::Running);
        }
        let record = s.tick();
        assert!(record.is_some());
        assert_eq!(s.time_remaining(), 0);
        assert_eq!(s.phase(), SessionPhase::Finished);
        assert!(!s.is_countdown_armed());

        // Further ticks never go negative or emit again
        assert!(s.tick().is_none());
        assert_eq!(s.time_remaining(), 0);
    }

    #[test]
    fn test_thirty_ticks_without_input_finishes_with_zero_wpm() {
        let mut s = session("hello", 30);
        s.begin(Instant::now());
        let mut records = Vec::new();
        for _ in 0..30 {
            if let Some(r) = s.tick() {
                records.push(r);
            }
        }
        assert_eq!(s.phase(), SessionPhase::Finished);
        assert_eq!(s.time_remaining(), 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].wpm, 0);
    }

    #[test]
    fn test_final_wpm_uses_full_duration() {
        // 10 correct chars over 60 seconds = 2 wpm
        let mut s = session("abcdefghijklmnop", 60);
        s.update_input("abcdefghij").unwrap();
        let mut record = None;
        for _ in 0..60 {
            record = record.or(s.tick());
        }
        assert_eq!(record.map(|r| r.wpm), Some(2));
        assert_eq!(s.metrics().wpm, 2);
    }

    #[test]
    fn test_input_rejected_after_finish() {
        let mut s = session("hello", 1);
        s.update_input("he").unwrap();
        assert!(s.tick().is_some());
        assert_eq!(s.update_input("hel"), Err(SessionError::Finished));
        assert_eq!(s.typed(), "he");
    }

    #[test]
    fn test_configure_only_while_idle() {
        let mut s = session("hello", 60);
        assert_eq!(s.configure(30), Ok(()));
        assert_eq!(s.time_remaining(), 30);

        s.update_input("h").unwrap();
        assert_eq!(s.configure(90), Err(SessionError::NotIdle));
        assert_eq!(s.duration_secs(), 30);
    }

    #[test]
    fn test_configure_rejects_zero() {
        let mut s = session("hello", 60);
        assert_eq!(s.configure(0), Err(SessionError::ZeroDuration));
        assert_eq!(s.duration_secs(), 60);
    }

    #[test]
    fn test_reset_twice_matches_reset_once() {
        let mut s = Session::new(FixedPassage::cycle(&["first", "second"]), 20);
        s.update_input("fir").unwrap();
        s.tick();

        s.reset();
        let once = (s.phase(), s.typed().to_string(), s.time_remaining());
        s.reset();
        let twice = (s.phase(), s.typed().to_string(), s.time_remaining());

        assert_eq!(once, (SessionPhase::Idle, String::new(), 20));
        assert_eq!(once, twice);
        assert!(!s.is_countdown_armed());
        assert_eq!(s.metrics(), Metrics::default());
    }

    #[test]
    fn test_reset_requests_new_passage() {
        let mut s = Session::new(FixedPassage::cycle(&["first", "second"]), 20);
        assert_eq!(s.passage().iter().collect::<String>(), "first");
        s.reset();
        assert_eq!(s.passage().iter().collect::<String>(), "second");
    }

    #[test]
    fn test_reset_from_finished_allows_typing_again() {
        let mut s = session("hello", 1);
        s.update_input("h").unwrap();
        assert!(s.tick().is_some());
        s.reset();
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert!(s.update_input("h").is_ok());
        assert_eq!(s.phase(), SessionPhase::Running);
    }

    #[test]
    fn test_advance_applies_due_ticks() {
        let mut s = session("hello", 3);
        let t0 = Instant::now();
        s.update_input_at("h", t0).unwrap();

        assert!(s.advance(t0 + Duration::from_millis(900)).is_none());
        assert_eq!(s.time_remaining(), 3);

        assert!(s.advance(t0 + Duration::from_millis(2100)).is_none());
        assert_eq!(s.time_remaining(), 1);

        let record = s.advance(t0 + Duration::from_secs(10));
        assert!(record.is_some());
        assert_eq!(s.time_remaining(), 0);
        assert_eq!(s.phase(), SessionPhase::Finished);
    }

    #[test]
    fn test_deleting_characters_recounts_keystrokes() {
        let mut s = session("hello", 30);
        s.update_input("hex").unwrap();
        assert_eq!(s.metrics().total_keystrokes, 3);
        assert_eq!(s.metrics().errors, 1);
        s.update_input("he").unwrap();
        assert_eq!(s.metrics().total_keystrokes, 2);
        assert_eq!(s.metrics().errors, 0);
        assert_eq!(s.metrics().accuracy, 100);
    }
}
