//! Interactive TUI interface
//!
//! Two editable grids for the initial and goal boards, plus a step-by-step
//! browser for the solution path.

mod app;
mod editor;
mod rendering;

pub use app::{App, GridFocus, InputMode, Message, MessageStyle, run_tui};
pub use editor::{EditResult, GridEditor};
pub use rendering::ui;
