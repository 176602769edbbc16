//! AURA command-line front end
//!
//! File loading, console reports and logging setup around `aura_core`.

pub mod format;
pub mod input;
pub mod io;
pub mod logging;
pub mod report;

pub use input::{InputError, load_project, load_safety_signals, load_scenarios};
pub use logging::init_logging;
