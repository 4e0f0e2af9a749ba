//! View Components
//!
//! UI components for the PyME dashboard application.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├────────┬────────────────────────────────────────────────────┤
//! │        │  Landing                                            │
//! │ Side   │    or                                               │
//! │ bar    │  Dashboard                                          │
//! │ (72px) │    welcome / quotes / summary / actions /           │
//! │        │    weekly chart / recent transactions / dialog      │
//! └────────┴────────────────────────────────────────────────────┘
//! ```

mod content;
mod dashboard;
mod landing;
mod sidebar;
mod title_bar;
mod workspace;

pub use content::*;
pub use dashboard::*;
pub use landing::*;
pub use sidebar::*;
pub use title_bar::*;
pub use workspace::*;
