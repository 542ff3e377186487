//! Tab strip projection
//!
//! `TabStrip` borrows the registry's current tabs and active id and builds
//! a `StripView` for the host to draw. Hit testing works on tab ids: the
//! host reports which tab and which part of it (body or close) was clicked.

use serde::Serialize;

use erp_tabs::{Tab, TabRegistry, TabType};

use crate::event::{Click, HitTarget, StripHandler, TabIntent};

/// Accessible label of the close control.
pub const CLOSE_LABEL: &str = "Close tab";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloseAffordance {
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabButton {
    pub id: String,
    pub label: String,
    pub tab_type: TabType,
    pub is_active: bool,
    pub close: CloseAffordance,
}

/// Rendered strip: buttons in display order plus the content region of the
/// active tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripView<C> {
    pub buttons: Vec<TabButton>,
    pub content: Option<C>,
}

impl<C> StripView<C> {
    pub fn active_button(&self) -> Option<&TabButton> {
        self.buttons.iter().find(|button| button.is_active)
    }

    /// One-line text form, e.g. `[Alice ×]* [Bob ×]`.
    pub fn to_text(&self) -> String {
        self.buttons
            .iter()
            .map(|button| {
                let marker = if button.is_active { "*" } else { "" };
                format!("[{} ×]{}", button.label, marker)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TabStrip<'a> {
    tabs: &'a [Tab],
    active_tab_id: Option<&'a str>,
}

impl<'a> TabStrip<'a> {
    pub fn new(tabs: &'a [Tab], active_tab_id: Option<&'a str>) -> Self {
        Self {
            tabs,
            active_tab_id,
        }
    }

    pub fn from_registry(registry: &'a TabRegistry) -> Self {
        Self::new(registry.tabs(), registry.active_tab_id())
    }

    /// Build the view, or `None` when there are no tabs to show.
    ///
    /// `content_for` is only called for the active tab, and only when the
    /// active id names one of the tabs.
    pub fn render<C, F>(&self, content_for: F) -> Option<StripView<C>>
    where
        F: FnOnce(&Tab) -> C,
    {
        if self.tabs.is_empty() {
            return None;
        }

        let buttons = self
            .tabs
            .iter()
            .map(|tab| TabButton {
                id: tab.id().to_string(),
                label: tab.label().to_string(),
                tab_type: tab.tab_type(),
                is_active: self.active_tab_id == Some(tab.id()),
                close: CloseAffordance {
                    aria_label: CLOSE_LABEL,
                },
            })
            .collect();

        let content = self
            .active_tab_id
            .and_then(|active_id| self.tabs.iter().find(|tab| tab.id() == active_id))
            .map(content_for);

        Some(StripView { buttons, content })
    }

    /// Intents produced by a click, in the order their handlers run.
    ///
    /// The click bubbles from its target outwards. The close control stops
    /// propagation, so a close click never also activates its tab.
    pub fn resolve(&self, click: &Click) -> Vec<TabIntent> {
        if !self.tabs.iter().any(|tab| tab.id() == click.tab_id) {
            tracing::debug!(tab_id = %click.tab_id, "Click on tab that is not rendered");
            return Vec::new();
        }

        let mut intents = Vec::new();
        for target in click.target.bubble_path() {
            match target {
                HitTarget::Close => {
                    intents.push(TabIntent::Close(click.tab_id.clone()));
                    break;
                }
                HitTarget::Body => {
                    intents.push(TabIntent::Activate(click.tab_id.clone()));
                }
            }
        }

        tracing::debug!(
            tab_id = %click.tab_id,
            target = click.target.as_str(),
            ?intents,
            "Resolved tab strip click"
        );

        intents
    }
}

/// Resolve a click against the registry's current strip and apply the
/// resulting intents to it.
pub fn dispatch_click(registry: &mut TabRegistry, click: &Click) -> Vec<TabIntent> {
    let intents = TabStrip::from_registry(registry).resolve(click);
    for intent in &intents {
        registry.apply(intent);
    }
    intents
}
