//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on services or do I/O.

mod card;
mod modal;

pub use card::*;
pub use modal::*;
