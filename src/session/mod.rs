pub mod diff;
pub mod metrics;
pub mod result;
pub mod state;
pub mod timer;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("duration can only be changed while the session is idle")]
    NotIdle,
    #[error("session has finished; reset before typing again")]
    Finished,
    #[error("duration must be at least one second")]
    ZeroDuration,
}
