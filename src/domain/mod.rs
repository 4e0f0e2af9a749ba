//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the business domain:
//! currency quotes, transactions, the monthly summary, the weekly chart and
//! metrics derived from the ledger.

mod analysis;
mod category;
mod chart;
mod draft;
mod quote;
mod summary;
mod transaction;

pub use analysis::*;
pub use category::*;
pub use chart::*;
pub use draft::*;
pub use quote::*;
pub use summary::*;
pub use transaction::*;
