//! Action Buttons
//!
//! Opens the transaction dialog on the income or expense tab.

use crate::assets::CustomIconName;
use crate::domain::TransactionKind;
use crate::helpers::{NEW_EXPENSE_KEYSTROKE, NEW_INCOME_KEYSTROKE, humanize_keystroke};
use crate::states::{TransactionDialogState, i18n_dashboard};
use gpui::{App, Entity, Window, prelude::*};
use gpui_component::{
    Icon,
    button::{Button, ButtonVariants},
    h_flex,
};

/// "Registrar Ingreso" / "Registrar Gasto" buttons opening the dialog
#[derive(IntoElement)]
pub struct ActionButtons {
    dialog: Entity<TransactionDialogState>,
}

impl ActionButtons {
    pub fn new(dialog: Entity<TransactionDialogState>) -> Self {
        Self { dialog }
    }

    fn button(
        &self,
        kind: TransactionKind,
        label_key: &'static str,
        keystroke: &'static str,
        cx: &App,
    ) -> Button {
        let dialog = self.dialog.clone();

        Button::new(label_key)
            .icon(Icon::from(CustomIconName::CirclePlus))
            .label(i18n_dashboard(cx, label_key))
            .tooltip(humanize_keystroke(keystroke))
            .on_click(move |_, _, cx| {
                dialog.update(cx, |state, cx| state.open(kind, cx));
            })
    }
}

impl RenderOnce for ActionButtons {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        h_flex()
            .items_center()
            .gap_4()
            .child(
                self.button(TransactionKind::Income, "record_income", NEW_INCOME_KEYSTROKE, cx)
                    .primary(),
            )
            .child(self.button(
                TransactionKind::Expense,
                "record_expense",
                NEW_EXPENSE_KEYSTROKE,
                cx,
            ))
    }
}
