//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only presentation state lives here. The authoritative view state machine
//! is `flownook::Studio`; the browser host mirrors its surface calls into
//! [`ui::UiState`] so components can render reactively.

pub mod ui;
