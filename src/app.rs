use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::config::{self, Config};
use crate::generator::PassageSource;
use crate::session::SessionError;
use crate::session::result::ResultRecord;
use crate::session::state::{Session, SessionPhase};
use crate::store::{ResultRepository, ResultStore, summary};
use crate::ui::line_input::{InputResult, LineInput};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Custom duration entry in progress.
pub struct DurationPromptState {
    pub input: LineInput,
    pub error: Option<String>,
}

pub struct App<S: PassageSource, R: ResultRepository> {
    pub session: Session<S>,
    pub results: ResultStore<R>,
    pub config: Config,
    pub theme: Theme,
    pub show_chart: bool,
    pub show_best: bool,
    pub duration_prompt: Option<DurationPromptState>,
    pub status: Option<StatusMessage>,
    /// The last finished test beat every earlier result.
    pub new_personal_best: bool,
    pub should_quit: bool,
    /// Where a newly chosen duration is saved. `None` keeps it in memory.
    config_path: Option<PathBuf>,
}

impl<S: PassageSource, R: ResultRepository> App<S, R> {
    pub fn new(source: S, repo: R, config: Config) -> Self {
        let session = Session::new(source, config.duration_secs);
        let results = ResultStore::open(repo);
        Self {
            session,
            results,
            config,
            theme: Theme::default(),
            show_chart: false,
            show_best: false,
            duration_prompt: None,
            status: None,
            new_personal_best: false,
            should_quit: false,
            config_path: None,
        }
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn history(&self) -> &[ResultRecord] {
        self.results.history()
    }

    pub fn is_finished(&self) -> bool {
        self.session.phase() == SessionPhase::Finished
    }

    pub fn type_char(&mut self, ch: char, now: Instant) {
        let mut text = self.session.typed().to_string();
        text.push(ch);
        self.apply_input(&text, now);
    }

    pub fn paste(&mut self, pasted: &str, now: Instant) {
        let clean: String = pasted.chars().filter(|c| !c.is_control()).collect();
        if clean.is_empty() {
            return;
        }
        let text = format!("{}{clean}", self.session.typed());
        self.apply_input(&text, now);
    }

    pub fn backspace(&mut self, now: Instant) {
        let typed = self.session.typed();
        // Deleting from an empty buffer is not input, so it can't start a test
        let Some((last, _)) = typed.char_indices().next_back() else {
            return;
        };
        let text = typed[..last].to_string();
        self.apply_input(&text, now);
    }

    fn apply_input(&mut self, text: &str, now: Instant) {
        // Seconds already due are applied first, so input that arrives after
        // the countdown ran out finishes the test instead of being scored.
        self.on_tick(now);
        match self.session.update_input_at(text, now) {
            Ok(()) => {}
            // Typing after the timer ran out is ignored until reset
            Err(SessionError::Finished) => {}
            Err(err) => tracing::debug!(error = %err, "input rejected"),
        }
    }

    /// Drive the countdown from the event loop's tick.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(record) = self.session.advance(now) {
            self.record_result(record);
        }
    }

    fn record_result(&mut self, record: ResultRecord) {
        let previous_best = summary::best_wpm(self.history());
        self.new_personal_best = record.wpm > previous_best;

        match self.results.append(record) {
            Ok(()) => self.status = None,
            Err(err) => {
                self.status = Some(StatusMessage {
                    kind: StatusKind::Warning,
                    text: format!("Result not saved: {err}"),
                });
            }
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.new_personal_best = false;
    }

    /// Switch to a new duration, abandoning the current attempt.
    pub fn set_duration(&mut self, secs: u32) {
        self.reset();
        match self.session.configure(secs) {
            Ok(()) => {
                self.config.duration_secs = secs;
                self.status = Some(StatusMessage {
                    kind: StatusKind::Info,
                    text: format!("Duration set to {secs}s"),
                });
                if let Some(path) = &self.config_path
                    && let Err(err) = Config::save_duration(path, secs)
                {
                    tracing::warn!(path = %path.display(), error = %err, "could not save duration to config");
                }
            }
            Err(err) => tracing::debug!(secs, error = %err, "duration not applied"),
        }
    }

    pub fn cycle_duration(&mut self) {
        let next = self.config.next_preset(self.session.duration_secs());
        self.set_duration(next);
    }

    pub fn open_duration_prompt(&mut self) {
        self.duration_prompt = Some(DurationPromptState {
            input: LineInput::default(),
            error: None,
        });
    }

    pub fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.duration_prompt.as_mut() else {
            return;
        };
        match prompt.input.handle(key) {
            InputResult::Continue => prompt.error = None,
            InputResult::Cancel => self.duration_prompt = None,
            InputResult::Submit => match config::parse_duration(prompt.input.value()) {
                Ok(secs) => {
                    self.duration_prompt = None;
                    self.set_duration(secs);
                }
                Err(err) => {
                    tracing::debug!(input = prompt.input.value(), error = %err, "rejected custom duration");
                    prompt.error = Some(err.to_string());
                }
            },
        }
    }

    pub fn toggle_chart(&mut self) {
        self.show_chart = !self.show_chart;
    }

    pub fn toggle_best(&mut self) {
        self.show_best = !self.show_best;
    }

    pub fn show_panels(&self) -> bool {
        self.show_chart || self.show_best
    }
}
