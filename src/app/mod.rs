//! Application Layer
//!
//! App initialization, global action handlers and the main window.

pub mod application;
