//! Currency Banner
//!
//! One card per quote with buy and sell prices; a loading line or the
//! fetch error replaces the cards.

use crate::assets::CustomIconName;
use crate::components::Card;
use crate::domain::Quote;
use crate::helpers::format_price;
use crate::states::{QuotesLoadState, QuotesState, i18n_dashboard};
use gpui::{App, Context, Entity, FontWeight, Subscription, Window, div, prelude::*};
use gpui_component::{ActiveTheme, Icon, h_flex, label::Label};

/// Buy and sell rows as (translation key, formatted price)
pub fn price_rows(quote: &Quote) -> [(&'static str, String); 2] {
    [
        ("buy", format_price(quote.buy)),
        ("sell", format_price(quote.sell)),
    ]
}

pub struct CurrencyBanner {
    quotes: Entity<QuotesState>,
    _subscriptions: Vec<Subscription>,
}

impl CurrencyBanner {
    pub fn new(quotes: Entity<QuotesState>, cx: &mut Context<Self>) -> Self {
        let subscriptions = vec![cx.observe(&quotes, |_this, _model, cx| cx.notify())];

        Self {
            quotes,
            _subscriptions: subscriptions,
        }
    }

    fn render_quote(quote: &Quote, cx: &App) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;
        let [buy, sell] = price_rows(quote).map(|(key, price)| {
            h_flex()
                .items_center()
                .justify_between()
                .child(Label::new(i18n_dashboard(cx, key)).text_xs().text_color(muted))
                .child(Label::new(price).text_lg().font_weight(FontWeight::BOLD))
        });

        div().flex_1().min_w_0().child(
            Card::new(quote.name.clone())
                .icon(Icon::from(CustomIconName::DollarSign).size_4().text_color(muted))
                .child(buy)
                .child(sell),
        )
    }
}

impl Render for CurrencyBanner {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.quotes.read(cx);

        match state.load_state() {
            QuotesLoadState::Loading => div()
                .w_full()
                .p_4()
                .flex()
                .justify_center()
                .child(Label::new(i18n_dashboard(cx, "quotes_loading")))
                .into_any_element(),
            QuotesLoadState::Error(message) => div()
                .w_full()
                .p_4()
                .flex()
                .justify_center()
                .child(Label::new(message.to_string()).text_color(cx.theme().danger))
                .into_any_element(),
            QuotesLoadState::Idle | QuotesLoadState::Loaded => {
                h_flex()
                    .w_full()
                    .gap_4()
                    .children(state.quotes().iter().map(|quote| Self::render_quote(quote, cx)))
                    .into_any_element()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mock_quotes;

    #[test]
    fn test_price_rows_use_two_decimals() {
        let quotes = mock_quotes();
        assert_eq!(
            price_rows(&quotes[0]),
            [("buy", "$1270.00".to_string()), ("sell", "$1310.00".to_string())]
        );
        assert_eq!(price_rows(&quotes[3])[1].1, "$234.68");
    }
}
