//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::PymeGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

fn translate(cx: &App, namespace: &str, key: &str) -> SharedString {
    let locale = cx.global::<PymeGlobalStore>().read(cx).locale();
    t!(format!("{namespace}.{key}"), locale = locale).into()
}

/// Get translated string from "landing" namespace
pub fn i18n_landing(cx: &App, key: &str) -> SharedString {
    translate(cx, "landing", key)
}

/// Get translated string from "sidebar" namespace
pub fn i18n_sidebar(cx: &App, key: &str) -> SharedString {
    translate(cx, "sidebar", key)
}

/// Get translated string from "dashboard" namespace
pub fn i18n_dashboard(cx: &App, key: &str) -> SharedString {
    translate(cx, "dashboard", key)
}

/// Get translated string from "dialog" namespace
pub fn i18n_dialog(cx: &App, key: &str) -> SharedString {
    translate(cx, "dialog", key)
}
