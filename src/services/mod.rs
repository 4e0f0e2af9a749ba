//! Service Layer
//!
//! Abstraction over external services and the async runtime they need.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              QuotesState                 │
//! │   refresh() ── cx.spawn ── run_in_tokio  │
//! └───────────────────┬─────────────────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │   QuoteClient (reqwest, parallel GETs)   │
//! └─────────────────────────────────────────┘
//! ```

mod quotes;
mod runtime;

pub use quotes::*;
pub use runtime::*;
