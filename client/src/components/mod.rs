//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `UiState` from context and call into
//! `crate::host::runtime` for every action; none of them holds studio state.

pub mod diagram_panel;
pub mod header;
pub mod help_shortcuts_modal;
pub mod input_panel;
pub mod notice_toast;
