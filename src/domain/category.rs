//! Category - Transaction Categories per Kind

use super::TransactionKind;

/// A selectable transaction category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable slug
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

const fn category(value: &'static str, label: &'static str) -> Category {
    Category { value, label }
}

pub const INCOME_CATEGORIES: &[Category] = &[
    category("ventas", "Ventas"),
    category("consultoria", "Consultoría"),
    category("otros", "Otros Ingresos"),
];

pub const EXPENSE_CATEGORIES: &[Category] = &[
    category("alquiler", "Alquiler"),
    category("insumos", "Insumos"),
    category("salarios", "Salarios"),
    category("servicios", "Servicios Públicos"),
    category("marketing", "Marketing"),
    category("otros", "Otros Gastos"),
];

/// Category options offered for a transaction kind
pub fn categories_for(kind: TransactionKind) -> &'static [Category] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Look up a category by slug within a kind's list
///
/// Slugs are only unique per kind ("otros" exists in both lists).
pub fn find_category(kind: TransactionKind, value: &str) -> Option<&'static Category> {
    categories_for(kind).iter().find(|c| c.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_counts() {
        assert_eq!(categories_for(TransactionKind::Income).len(), 3);
        assert_eq!(categories_for(TransactionKind::Expense).len(), 6);
    }

    #[test]
    fn test_find_category_is_scoped_by_kind() {
        let income = find_category(TransactionKind::Income, "otros").map(|c| c.label);
        let expense = find_category(TransactionKind::Expense, "otros").map(|c| c.label);
        assert_eq!(income, Some("Otros Ingresos"));
        assert_eq!(expense, Some("Otros Gastos"));
        assert!(find_category(TransactionKind::Income, "alquiler").is_none());
    }
}
