//! Transaction Dialog
//!
//! Modal form for recording an income or expense: kind toggle, amount with
//! quick-amount buttons, date, category and description.

use crate::components::Modal;
use crate::constants::QUICK_AMOUNTS;
use crate::domain::TransactionKind;
use crate::helpers::{format_date, format_quick_amount};
use crate::states::{
    DraftText, LedgerState, PymeGlobalStore, TransactionDialogState, i18n_dialog,
};
use chrono::Utc;
use gpui::{
    ClickEvent, Context, Entity, SharedString, Subscription, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};
use tracing::debug;

const FORM_LABEL_WIDTH: f32 = 96.0;

/// Reports closed-to-open transitions of the dialog flag
#[derive(Debug, Default, Clone, Copy)]
struct OpenTransition {
    was_open: bool,
}

impl OpenTransition {
    /// Record the latest flag; true when the dialog has just opened
    fn update(&mut self, is_open: bool) -> bool {
        let opened = is_open && !self.was_open;
        self.was_open = is_open;
        opened
    }
}

pub struct TransactionDialog {
    state: Entity<TransactionDialogState>,
    ledger: Entity<LedgerState>,
    amount_input: Entity<InputState>,
    date_input: Entity<InputState>,
    description_input: Entity<InputState>,
    open_transition: OpenTransition,
    _subscriptions: Vec<Subscription>,
}

impl TransactionDialog {
    pub fn new(
        state: Entity<TransactionDialogState>,
        ledger: Entity<LedgerState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let amount_input = cx.new(|cx| InputState::new(window, cx));
        let date_input = cx.new(|cx| InputState::new(window, cx));
        let description_input = cx.new(|cx| InputState::new(window, cx));

        let preferences = cx.global::<PymeGlobalStore>().preferences();
        let mut subscriptions = vec![
            // Clear the inputs each time the dialog opens
            cx.observe_in(&state, window, |this, _, window, cx| {
                this.sync_open(window, cx);
                cx.notify();
            }),
            // Locale changes
            cx.observe_in(&preferences, window, |this, _, window, cx| {
                this.apply_placeholders(window, cx);
            }),
        ];

        // Enter submits from any text field
        for input in [&amount_input, &date_input, &description_input] {
            subscriptions.push(cx.subscribe(input, |this, _, event: &InputEvent, cx| {
                if matches!(event, InputEvent::PressEnter { .. }) {
                    this.submit(cx);
                }
            }));
        }

        let mut this = Self {
            state,
            ledger,
            amount_input,
            date_input,
            description_input,
            open_transition: OpenTransition::default(),
            _subscriptions: subscriptions,
        };
        this.apply_placeholders(window, cx);
        // A shortcut may open the dialog before the dashboard is first built
        this.sync_open(window, cx);
        this
    }

    fn sync_open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let is_open = self.state.read(cx).is_open();
        if self.open_transition.update(is_open) {
            self.reset_inputs(window, cx);
        }
    }

    fn apply_placeholders(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let inputs = [
            (&self.amount_input, "amount_placeholder"),
            (&self.date_input, "date_placeholder"),
            (&self.description_input, "description_placeholder"),
        ];
        for (input, key) in inputs {
            let placeholder = i18n_dialog(cx, key);
            input.update(cx, |input, cx| input.set_placeholder(placeholder, window, cx));
        }
    }

    fn reset_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let today = format_date(&Utc::now());
        self.amount_input
            .update(cx, |input, cx| input.set_value("", window, cx));
        self.date_input
            .update(cx, |input, cx| input.set_value(today, window, cx));
        self.description_input
            .update(cx, |input, cx| input.set_value("", window, cx));
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        if !self.state.read(cx).is_open() {
            return;
        }

        let text = DraftText {
            amount: self.amount_input.read(cx).value().to_string(),
            date: self.date_input.read(cx).value().to_string(),
            description: self.description_input.read(cx).value().to_string(),
        };
        let ledger = self.ledger.clone();

        let result = self
            .state
            .update(cx, |state, cx| state.submit(text, &ledger, cx));
        // Rejections stay visible in the dialog
        if let Err(e) = result {
            debug!(error = %e, "Transaction not recorded");
        }
    }

    fn on_submit(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.submit(cx);
    }

    fn on_cancel(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.state.update(cx, |state, cx| state.close(cx));
    }

    fn form_row(label: SharedString, field: impl IntoElement) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_4()
            .items_center()
            .child(
                h_flex()
                    .w(px(FORM_LABEL_WIDTH))
                    .flex_none()
                    .justify_end()
                    .child(Label::new(label).text_sm()),
            )
            .child(div().flex_1().min_w_0().child(field))
    }

    fn render_kind_tabs(&self, current: TransactionKind, cx: &mut Context<Self>) -> impl IntoElement {
        let tabs: Vec<_> = TransactionKind::all()
            .iter()
            .map(|&kind| {
                let label = i18n_dialog(cx, &format!("tab_{}", kind.key()));
                Button::new(SharedString::from(format!("kind-{}", kind.key())))
                    .label(label)
                    .small()
                    .flex_1()
                    .map(|button| if kind == current { button.primary() } else { button.ghost() })
                    .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.state.update(cx, |state, cx| state.set_kind(kind, cx));
                    }))
            })
            .collect();

        h_flex()
            .w_full()
            .p_1()
            .gap_1()
            .rounded_md()
            .bg(cx.theme().muted)
            .children(tabs)
    }

    fn render_quick_amounts(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let buttons: Vec<_> = QUICK_AMOUNTS
            .iter()
            .enumerate()
            .map(|(ix, &amount)| {
                Button::new(("quick-amount", ix))
                    .label(format_quick_amount(amount))
                    .outline()
                    .small()
                    .flex_1()
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        let text = this
                            .state
                            .update(cx, |state, cx| state.apply_quick_amount(amount, cx));
                        this.amount_input
                            .update(cx, |input, cx| input.set_value(text, window, cx));
                    }))
            })
            .collect();

        h_flex().w_full().gap_2().children(buttons)
    }

    fn render_categories(
        &self,
        kind: TransactionKind,
        selected: Option<&'static str>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let placeholder = i18n_dialog(cx, &format!("category_placeholder_{}", kind.key()));
        let muted = cx.theme().muted_foreground;

        let chips: Vec<_> = crate::domain::categories_for(kind)
            .iter()
            .enumerate()
            .map(|(ix, category)| {
                let value = category.value;
                Button::new(("category", ix))
                    .label(category.label)
                    .small()
                    .map(|button| {
                        if selected == Some(value) {
                            button.primary()
                        } else {
                            button.outline()
                        }
                    })
                    .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.state
                            .update(cx, |state, cx| state.select_category(value, cx));
                    }))
            })
            .collect();

        v_flex()
            .gap_2()
            .when(selected.is_none(), |this| {
                this.child(Label::new(placeholder).text_xs().text_color(muted))
            })
            .child(h_flex().flex_wrap().gap_2().children(chips))
    }
}

impl Render for TransactionDialog {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.state.read(cx);
        if !state.is_open() {
            return div().into_any_element();
        }

        let kind = state.draft().kind();
        let selected = state.draft().category().map(|category| category.value);
        let error = state.error();

        let error_row = error.map(|error| {
            Label::new(i18n_dialog(cx, error.i18n_key()))
                .text_sm()
                .text_color(cx.theme().danger)
        });

        Modal::new(i18n_dialog(cx, "title"))
            .description(i18n_dialog(cx, "description"))
            .on_close(cx.listener(Self::on_cancel))
            .child(self.render_kind_tabs(kind, cx))
            .child(
                v_flex()
                    .gap_4()
                    .py_2()
                    .child(Self::form_row(
                        i18n_dialog(cx, "amount"),
                        Input::new(&self.amount_input).w_full(),
                    ))
                    .child(Self::form_row(
                        i18n_dialog(cx, "quick"),
                        self.render_quick_amounts(cx),
                    ))
                    .child(Self::form_row(
                        i18n_dialog(cx, "date"),
                        Input::new(&self.date_input).w_full(),
                    ))
                    .child(Self::form_row(
                        i18n_dialog(cx, "category"),
                        self.render_categories(kind, selected, cx),
                    ))
                    .child(Self::form_row(
                        i18n_dialog(cx, "description_label"),
                        Input::new(&self.description_input).w_full(),
                    )),
            )
            .when_some(error_row, |modal, row| modal.child(row))
            .footer(
                Button::new("dialog-cancel")
                    .label(i18n_dialog(cx, "cancel"))
                    .ghost()
                    .on_click(cx.listener(Self::on_cancel)),
            )
            .footer(
                Button::new("dialog-submit")
                    .label(i18n_dialog(cx, "submit"))
                    .primary()
                    .on_click(cx.listener(Self::on_submit)),
            )
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_open_dialog_counts_as_opened() {
        let mut transition = OpenTransition::default();
        assert!(transition.update(true));
        assert!(!transition.update(true));
    }

    #[test]
    fn test_reopen_after_close() {
        let mut transition = OpenTransition::default();
        assert!(!transition.update(false));
        assert!(transition.update(true));
        assert!(!transition.update(false));
        assert!(transition.update(true));
    }
}
