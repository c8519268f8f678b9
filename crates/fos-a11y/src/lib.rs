//! fOS Accessibility
//!
//! ARIA roles and states, plus the focus helpers the widgets build on.
//!
//! Features:
//! - ARIA role parsing with multi-token `role` attributes
//! - ARIA state attributes (`aria-expanded`, `aria-selected`, ...)
//! - Focusable-element predicate and guarded focus attempts
//! - First/last focusable descendant search
//! - Sequential (Tab key) focus order

pub mod aria;
pub mod focus;

pub use aria::{AriaRole, AriaState, has_role, role_tokens};
pub use focus::{
    TabIndex, attempt_focus, focus_first_descendant, focus_last_descendant, is_focusable,
    sequential_focus_order,
};

