//! UI primitives for the Pasteur CLI.
//!
//! - **Context**: environment detection (TTY, color)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badges and text styling
//! - **Render**: key-value lines, tables, errors
//! - **Progress**: spinner for network round trips

mod context;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use progress::Spinner;
pub use render::{badge, kv, kv_table, print_error, print_warning};
pub use theme::Badge;
