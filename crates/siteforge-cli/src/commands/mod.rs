//! Command handlers.
//!
//! Each submodule exposes an `execute` function; dispatch happens in
//! `main::run`.  Handlers translate CLI arguments into core calls and render
//! the results — no validation or generation logic lives here.

pub mod check;
pub mod completions;
pub mod setup;
