//! State Management
//!
//! GPUI entities shared by the views, reachable through [`PymeGlobalStore`].

mod app;
mod dialog;
mod i18n;
mod ledger;
mod quotes;
mod ui_event;

pub use app::*;
pub use dialog::*;
pub use i18n::*;
pub use ledger::*;
pub use quotes::*;
pub use ui_event::*;
