//! Terminal connect-four (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_connect_four::{core,input,term,types}`
//! so the binary, benches and integration tests share one import path.

pub use tui_connect_four_core as core;
pub use tui_connect_four_input as input;
pub use tui_connect_four_term as term;
pub use tui_connect_four_types as types;
