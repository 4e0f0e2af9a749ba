//! Helper Utilities
//!
//! Common utilities used across the application.

mod action;
mod bounded;
mod format;
mod fs;

pub use action::*;
pub use bounded::*;
pub use format::*;
pub use fs::*;
