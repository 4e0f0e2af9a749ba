//! Title Bar Component
//!
//! Custom title bar with branding and the settings menu.

use crate::assets::CustomIconName;
use crate::states::{LocaleAction, PymeGlobalStore, ThemeAction, i18n_sidebar};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    Icon, IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct PymeTitleBar;

impl PymeTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let prefs = cx.global::<PymeGlobalStore>().read(cx);
        let (locale, theme) = (prefs.locale(), prefs.theme());

        menu
            // Language section
            .label(i18n_sidebar(cx, "language"))
            .menu_with_check("Español", locale == "es", Box::new(LocaleAction::Es))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            // Theme section
            .label(i18n_sidebar(cx, "theme"))
            .menu_with_check(
                i18n_sidebar(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_sidebar(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_sidebar(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }
}

impl Render for PymeTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let right_actions = h_flex()
            .items_center()
            .justify_end()
            .px_2()
            .gap_2()
            .mr_2();

        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .gap_2()
                    .pl_4()
                    .child(Icon::from(CustomIconName::DollarSign).small())
                    .child(Label::new("PyME Dashboard").text_sm()),
            )
            .child(
                right_actions.child(
                    Button::new("settings")
                        .tooltip(i18n_sidebar(cx, "settings"))
                        .icon(IconName::Settings2)
                        .small()
                        .ghost()
                        .dropdown_menu(move |menu, window, cx| Self::render_settings_menu(menu, window, cx))
                        .anchor(Corner::TopRight),
                ),
            )
    }
}
