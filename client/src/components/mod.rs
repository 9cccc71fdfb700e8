//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render interaction surfaces and hand network work to `net::api`
//! so their click logic stays testable without a browser.

pub mod login_button;
