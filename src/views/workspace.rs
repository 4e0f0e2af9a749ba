//! Workspace - Main Shell
//!
//! Holds the title bar, sidebar and content area.

use crate::views::{PymeContent, PymeSidebar, PymeTitleBar};
use gpui::{Context, Entity, Window, div, prelude::*};
use gpui_component::{ActiveTheme, v_flex};

/// Main workspace containing the application layout
pub struct PymeWorkspace {
    title_bar: Entity<PymeTitleBar>,
    sidebar: Entity<PymeSidebar>,
    content: Entity<PymeContent>,
}

impl PymeWorkspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| PymeTitleBar::new(window, cx));
        let sidebar = cx.new(|cx| PymeSidebar::new(window, cx));
        let content = cx.new(|cx| PymeContent::new(window, cx));

        Self {
            title_bar,
            sidebar,
            content,
        }
    }
}

impl Render for PymeWorkspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(self.content.clone()),
            )
    }
}
