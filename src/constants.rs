//! UI Constants
//!
//! Centralized layout, formatting and data constants.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 72.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Dashboard content max width
pub const DASHBOARD_MAX_WIDTH: f32 = 1200.0;

/// Weekly chart plot height
pub const CHART_HEIGHT: f32 = 300.0;
/// Number of horizontal grid lines on the weekly chart
pub const CHART_TICK_COUNT: usize = 5;

/// Mock weekly totals are drawn from `[CHART_MOCK_MIN, CHART_MOCK_MIN + CHART_MOCK_SPAN)`
pub const CHART_MOCK_MIN: u64 = 10_000;
pub const CHART_MOCK_SPAN: u64 = 50_000;

/// Transaction dialog width
pub const DIALOG_WIDTH: f32 = 460.0;

/// Quick amount shortcuts offered in the transaction dialog
pub const QUICK_AMOUNTS: [u64; 5] = [1_000, 5_000, 10_000, 25_000, 50_000];

/// Rows kept in the recent transactions table
pub const RECENT_TRANSACTIONS_LIMIT: usize = 100;

/// Argentina runs on UTC-03:00 all year round
pub const ARGENTINA_UTC_OFFSET_SECS: i32 = -3 * 3600;

/// Currency quote endpoints (dolarapi.com)
pub const QUOTE_ENDPOINTS: [&str; 4] = [
    "https://dolarapi.com/v1/dolares/oficial",
    "https://dolarapi.com/v1/dolares/blue",
    "https://dolarapi.com/v1/cotizaciones/eur",
    "https://dolarapi.com/v1/cotizaciones/brl",
];

/// Per-request timeout for quote fetches
pub const QUOTE_FETCH_TIMEOUT_SECS: u64 = 10;

/// Error surfaced to the currency banner when any quote request fails
pub const QUOTE_FETCH_ERROR: &str = "Failed to fetch currency data.";
