//! Tab Registry
//!
//! Owns the ordered list of open tabs and the active-tab pointer.
//! Every mutation goes through `open`, `close`, `activate` or `close_all`,
//! and each one updates both fields before returning.

use crate::kind::TabType;
use crate::policy::ActivationPolicy;
use crate::tab::Tab;

#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    /// Open tabs in display (insertion) order
    tabs: Vec<Tab>,
    /// Id of the focused tab
    active_tab_id: Option<String>,
    policy: ActivationPolicy,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ActivationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Open a record as a tab and focus it.
    ///
    /// If the record already has a tab, nothing is appended and the existing
    /// tab keeps its original label.
    pub fn open(&mut self, tab_type: TabType, entity_id: &str, label: &str) -> &Tab {
        let tab_id = Tab::compose_id(tab_type, entity_id);

        let index = match self.position(&tab_id) {
            Some(index) => {
                tracing::debug!(tab_id = %tab_id, "Tab already open, focusing it");
                index
            }
            None => {
                self.tabs
                    .push(Tab::new(tab_type, entity_id.to_string(), label.to_string()));
                tracing::info!(tab_id = %tab_id, label = %label, "Opened tab");
                self.tabs.len() - 1
            }
        };

        self.active_tab_id = Some(tab_id);
        &self.tabs[index]
    }

    /// Close a tab. Unknown ids are ignored.
    ///
    /// Closing the active tab focuses the last remaining tab (not the
    /// neighbour of the closed one), or nothing when none remain.
    pub fn close(&mut self, tab_id: &str) -> Option<Tab> {
        let index = self.position(tab_id)?;
        let removed = self.tabs.remove(index);

        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = self.tabs.last().map(|tab| tab.id().to_string());
        }

        tracing::info!(
            tab_id = %tab_id,
            active_tab_id = ?self.active_tab_id,
            remaining = self.tabs.len(),
            "Closed tab"
        );

        Some(removed)
    }

    /// Point the active tab at `tab_id`.
    ///
    /// Returns true if the pointer now names an open tab.
    pub fn activate(&mut self, tab_id: &str) -> bool {
        let is_open = self.contains(tab_id);

        match (self.policy, is_open) {
            (_, true) => {
                tracing::debug!(tab_id = %tab_id, "Activated tab");
            }
            (ActivationPolicy::Unchecked, false) => {
                tracing::warn!(tab_id = %tab_id, "Activated id with no open tab");
            }
            (ActivationPolicy::MembersOnly, false) => {
                tracing::debug!(tab_id = %tab_id, "Ignored activation of unknown tab");
                return false;
            }
        }

        self.active_tab_id = Some(tab_id.to_string());
        is_open
    }

    /// Close every tab and clear the active pointer.
    pub fn close_all(&mut self) {
        let closed = self.tabs.len();
        self.tabs.clear();
        self.active_tab_id = None;

        tracing::info!(closed, "Closed all tabs");
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// The focused tab, or `None` if the pointer names no open tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        let active_id = self.active_tab_id.as_deref()?;
        self.tabs.iter().find(|tab| tab.id() == active_id)
    }

    pub fn get(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id() == tab_id)
    }

    pub fn contains(&self, tab_id: &str) -> bool {
        self.position(tab_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn policy(&self) -> ActivationPolicy {
        self.policy
    }

    fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == tab_id)
    }
}
