//! Summary - Monthly Totals
//!
//! The summary is an independent record. It is not derived from the
//! transaction list, so the two disagree until a real ledger backs both.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Monthly income/expense totals shown on the summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub transactions: u32,
}

impl Summary {
    pub fn mock() -> Self {
        Self {
            income: dec!(1250000.75),
            expenses: dec!(785450.50),
            balance: dec!(464550.25),
            transactions: 124,
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::mock()
    }
}
