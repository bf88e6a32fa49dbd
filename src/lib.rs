//! TUI Gridwalk (workspace facade crate).
//!
//! This package keeps a stable `tui_gridwalk::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_gridwalk_core as core;
pub use tui_gridwalk_input as input;
pub use tui_gridwalk_term as term;
pub use tui_gridwalk_types as types;
