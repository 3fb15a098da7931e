//! Terminal typing speed trainer.
//!
//! The core (`generator`, `session`, `store`) has no terminal dependency and is
//! what the integration tests drive; `app`, `event` and `ui` wire it to ratatui.

pub mod app;
pub mod config;
pub mod event;
pub mod generator;
pub mod logging;
pub mod session;
pub mod store;
pub mod ui;
