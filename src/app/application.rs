//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::domain::TransactionKind;
use crate::helpers::{DialogAction, MenuAction, NavAction, new_key_bindings};
use crate::states::{
    AppPreferences, LedgerState, LocaleAction, PymeGlobalStore, QuotesState, Route, ThemeAction,
    TransactionDialogState, update_preferences_and_save,
};
use crate::views::PymeWorkspace;
use gpui::{
    BorrowAppContext,
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::{error, info};

/// Apply a theme mode, following the system appearance when `None`
fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
    cx.refresh_windows();
}

fn navigate(route: Route, cx: &mut App) {
    cx.update_global::<PymeGlobalStore, ()>(|store, cx| {
        store.update(cx, |state, cx| state.go_to(route, cx));
    });
}

/// Register global action handlers
fn register_actions(cx: &mut App) {
    cx.on_action(|_: &MenuAction, cx: &mut App| cx.quit());

    cx.on_action(|action: &NavAction, cx: &mut App| {
        let route = match action {
            NavAction::Landing => Route::Landing,
            NavAction::Dashboard => Route::Dashboard,
        };
        navigate(route, cx);
    });

    cx.on_action(|action: &DialogAction, cx: &mut App| {
        let dialog = cx.global::<PymeGlobalStore>().dialog();
        match action {
            DialogAction::NewIncome | DialogAction::NewExpense => {
                let kind = if *action == DialogAction::NewIncome {
                    TransactionKind::Income
                } else {
                    TransactionKind::Expense
                };
                navigate(Route::Dashboard, cx);
                dialog.update(cx, |state, cx| state.open(kind, cx));
            }
            DialogAction::Close => dialog.update(cx, |state, cx| state.close(cx)),
        }
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, cx);
        update_preferences_and_save(cx, "set_theme", move |prefs, _cx| prefs.set_theme(mode));
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = action.code();
        info!(locale, "Switching locale");
        update_preferences_and_save(cx, "set_locale", move |prefs, _cx| {
            prefs.set_locale(locale.to_string())
        });
    });
}

/// Run the PyME dashboard application
pub fn run_app() {
    let app = Application::new().with_assets(Assets);

    app.run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());

        let preferences = AppPreferences::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load preferences, using defaults");
            AppPreferences::new()
        });
        let theme = preferences.theme();
        info!(locale = preferences.locale(), "Preferences loaded");

        // Initialize global state
        let preferences = cx.new(|_| preferences);
        let quotes = cx.new(|_| QuotesState::new());
        let ledger = cx.new(|_| LedgerState::new());
        let dialog = cx.new(|_| TransactionDialogState::new());
        cx.set_global(PymeGlobalStore::new(preferences, quotes, ledger, dialog));

        apply_theme(theme, cx);
        register_actions(cx);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("PyME Dashboard")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| PymeWorkspace::new(window, cx));
            let view: AnyView = workspace.into();
            cx.new(|cx| Root::new(view, window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
