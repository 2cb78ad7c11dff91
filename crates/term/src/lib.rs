//! Terminal "game renderer" module.
//!
//! Renders into a simple framebuffer that is flushed to a terminal backend,
//! instead of going through a widget toolkit.
//!
//! Goals:
//! - Keep `core` free of any terminal concerns
//! - Keep the view pure so layouts can be asserted in tests
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_connect_four_core as core;
pub use tui_connect_four_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
