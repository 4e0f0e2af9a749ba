//! Application State
//!
//! Global application state: routing, locale, theme and quote settings,
//! plus the global store that hands out every state entity.

use crate::constants::QUOTE_FETCH_TIMEOUT_SECS;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::states::{LedgerState, QuotesState, TransactionDialogState};
use gpui::{Action, App, AppContext, Context, Entity, Global};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// Application routes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Landing page with the call-to-action buttons
    #[default]
    Landing,
    /// Financial dashboard
    Dashboard,
}

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    Es,
    En,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::Es => "es",
            LocaleAction::En => "en",
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const DEFAULT_LOCALE: &str = "es";
const SUPPORTED_LOCALES: [&str; 2] = ["es", "en"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("pyme-dashboard.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Map a language code to a supported locale, if any
fn supported_locale(lang: &str) -> Option<&'static str> {
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| lang.eq_ignore_ascii_case(supported))
}

/// Live quote fetching settings (`[quotes]` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSettings {
    /// Fetch quotes from dolarapi.com instead of showing mock data
    pub live: bool,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            live: false,
            timeout_secs: QUOTE_FETCH_TIMEOUT_SECS,
        }
    }
}

impl QuoteSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Persisted application preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppPreferences {
    route: Route,
    locale: Option<String>,
    theme: Option<String>,
    quotes: QuoteSettings,
}

impl AppPreferences {
    /// Load preferences from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        let mut prefs = Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        // Detect system locale if not set
        if prefs.locale.as_ref().is_none_or(|l| l.is_empty()) {
            let system = Locale::current().to_string();
            let lang = system.split_once('-').map_or(system.as_str(), |(lang, _)| lang);
            prefs.locale = supported_locale(lang).map(str::to_string);
        }

        Ok(prefs)
    }

    /// Parse preferences; the route always starts at the landing page
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut prefs: Self = toml::from_str(value)?;
        prefs.route = Route::Landing;
        Ok(prefs)
    }

    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale
            .as_deref()
            .and_then(supported_locale)
            .unwrap_or(DEFAULT_LOCALE)
    }

    pub fn quotes(&self) -> &QuoteSettings {
        &self.quotes
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, route: Route, cx: &mut Context<Self>) {
        if self.route != route {
            info!(?route, "Navigating");
            self.route = route;
            cx.notify();
        }
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<PymeGlobalStore>()`
#[derive(Clone)]
pub struct PymeGlobalStore {
    preferences: Entity<AppPreferences>,
    quotes: Entity<QuotesState>,
    ledger: Entity<LedgerState>,
    dialog: Entity<TransactionDialogState>,
}

impl PymeGlobalStore {
    pub fn new(
        preferences: Entity<AppPreferences>,
        quotes: Entity<QuotesState>,
        ledger: Entity<LedgerState>,
        dialog: Entity<TransactionDialogState>,
    ) -> Self {
        Self {
            preferences,
            quotes,
            ledger,
            dialog,
        }
    }

    pub fn preferences(&self) -> Entity<AppPreferences> {
        self.preferences.clone()
    }

    pub fn quotes(&self) -> Entity<QuotesState> {
        self.quotes.clone()
    }

    pub fn ledger(&self) -> Entity<LedgerState> {
        self.ledger.clone()
    }

    pub fn dialog(&self) -> Entity<TransactionDialogState> {
        self.dialog.clone()
    }

    /// Read preferences
    pub fn read<'a>(&self, cx: &'a App) -> &'a AppPreferences {
        self.preferences.read(cx)
    }

    /// Update preferences
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut AppPreferences, &mut Context<AppPreferences>) -> R,
    ) -> C::Result<R> {
        self.preferences.update(cx, update)
    }
}

impl Global for PymeGlobalStore {}

// ==================== Persistence ====================

/// Save preferences to disk
pub fn save_preferences(prefs: &AppPreferences) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(prefs)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update preferences and save to disk asynchronously
pub fn update_preferences_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut AppPreferences, &App) + Send + 'static,
{
    let store = cx.global::<PymeGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current = store.update(cx, |prefs, cx| {
            mutation(prefs, cx);
            cx.notify();
            prefs.clone()
        });

        if let Ok(prefs) = current {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_preferences(&prefs) {
                        error!(error = %e, action = action_name, "Failed to save preferences");
                    } else {
                        info!(action = action_name, "Preferences saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let prefs = AppPreferences::from_toml("  \n").expect("empty is valid");
        assert_eq!(prefs.route(), Route::Landing);
        assert_eq!(prefs.locale(), "es");
        assert!(prefs.theme().is_none());
        assert!(!prefs.quotes().live);
        assert_eq!(prefs.quotes().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_route_resets_to_landing() {
        let prefs = AppPreferences::from_toml("route = \"Dashboard\"\nlocale = \"en\"\n")
            .expect("valid toml");
        assert_eq!(prefs.route(), Route::Landing);
        assert_eq!(prefs.locale(), "en");
    }

    #[test]
    fn test_partial_quotes_table() {
        let prefs = AppPreferences::from_toml("[quotes]\nlive = true\n").expect("valid toml");
        assert!(prefs.quotes().live);
        assert_eq!(prefs.quotes().timeout_secs, QUOTE_FETCH_TIMEOUT_SECS);
    }

    #[test]
    fn test_unsupported_locale_falls_back() {
        let prefs = AppPreferences::from_toml("locale = \"zh\"\n").expect("valid toml");
        assert_eq!(prefs.locale(), "es");
    }

    #[test]
    fn test_theme_round_trip() {
        let mut prefs = AppPreferences::new();
        prefs.set_theme(Some(ThemeMode::Dark));
        prefs.set_locale("en".to_string());

        let text = toml::to_string(&prefs).expect("serialize");
        let loaded = AppPreferences::from_toml(&text).expect("parse");
        assert_eq!(loaded.theme(), Some(ThemeMode::Dark));
        assert_eq!(loaded.locale(), "en");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(AppPreferences::from_toml("quotes = [").is_err());
    }
}
