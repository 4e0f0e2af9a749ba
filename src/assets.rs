//! Embedded assets for Pyme Dashboard
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icons not shipped with gpui-component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    TrendingUp,
    TrendingDown,
    DollarSign,
    ArrowLeftRight,
    CirclePlus,
    CircleArrowUp,
    CircleArrowDown,
    House,
    LayoutDashboard,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::TrendingUp => "icons/trending-up.svg",
            CustomIconName::TrendingDown => "icons/trending-down.svg",
            CustomIconName::DollarSign => "icons/dollar-sign.svg",
            CustomIconName::ArrowLeftRight => "icons/arrow-left-right.svg",
            CustomIconName::CirclePlus => "icons/circle-plus.svg",
            CustomIconName::CircleArrowUp => "icons/circle-arrow-up.svg",
            CustomIconName::CircleArrowDown => "icons/circle-arrow-down.svg",
            CustomIconName::House => "icons/house.svg",
            CustomIconName::LayoutDashboard => "icons/layout-dashboard.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}
