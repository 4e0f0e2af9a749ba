//! PyME Dashboard Library
//!
//! Landing page and financial dashboard for Argentine small and medium
//! businesses: currency quotes, monthly summary, weekly chart, recent
//! transactions and a dialog for recording new ones.

rust_i18n::i18n!("locales", fallback = "es");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;
