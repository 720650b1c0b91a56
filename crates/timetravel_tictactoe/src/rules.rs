//! Game rules: line completion and draw detection.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{LineKind, Outcome, detect_line};
