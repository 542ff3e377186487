//! Workspace state container
//!
//! The registry lives behind one lock. Each operation takes the write guard
//! once, so readers never see the tab list and the active id out of step.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use erp_tabs::{Tab, TabRegistry, TabType};
use erp_tabstrip::{dispatch_click, Click, StripView, TabIntent, TabStrip};

use crate::config::Config;

/// Tabs and active id captured under a single read guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceSnapshot {
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<String>,
}

impl WorkspaceSnapshot {
    pub fn of(registry: &TabRegistry) -> Self {
        Self {
            tabs: registry.tabs().to_vec(),
            active_tab_id: registry.active_tab_id().map(str::to_string),
        }
    }
}

/// Workspace for one user session.
pub struct Workspace {
    config: Config,
    registry: Arc<RwLock<TabRegistry>>,
}

impl Workspace {
    /// Create a workspace for `config`. Call `Config::init_logging` first if
    /// the host has not installed a subscriber of its own.
    pub fn new(config: Config) -> Self {
        let registry = TabRegistry::with_policy(config.activation_policy);

        tracing::info!(
            activation_policy = %config.activation_policy,
            "Workspace initialized"
        );

        Self {
            config,
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // === Tab operations ===

    pub fn open_tab(&self, tab_type: TabType, entity_id: &str, label: &str) -> Tab {
        self.registry
            .write()
            .open(tab_type, entity_id, label)
            .clone()
    }

    pub fn close_tab(&self, tab_id: &str) -> Option<Tab> {
        self.registry.write().close(tab_id)
    }

    pub fn activate_tab(&self, tab_id: &str) -> bool {
        self.registry.write().activate(tab_id)
    }

    pub fn close_all_tabs(&self) {
        self.registry.write().close_all();
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.registry.read().tabs().to_vec()
    }

    pub fn active_tab_id(&self) -> Option<String> {
        self.registry.read().active_tab_id().map(str::to_string)
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.registry.read().active_tab().cloned()
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot::of(&self.registry.read())
    }

    // === Strip ===

    /// Render the tab strip, with `content_for` producing the region shown
    /// under it for the active tab.
    pub fn render_strip<C, F>(&self, content_for: F) -> Option<StripView<C>>
    where
        F: FnOnce(&Tab) -> C,
    {
        let registry = self.registry.read();
        TabStrip::from_registry(&registry).render(content_for)
    }

    /// Apply a click on the strip and return the intents it produced.
    pub fn handle_click(&self, click: &Click) -> Vec<TabIntent> {
        let mut registry = self.registry.write();
        dispatch_click(&mut registry, click)
    }

    // === Guarded access ===

    pub fn with_registry<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TabRegistry) -> T,
    {
        f(&self.registry.read())
    }

    /// Run several registry operations under one write guard.
    pub fn update<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut TabRegistry) -> T,
    {
        f(&mut self.registry.write())
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Clone for Workspace {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            registry: Arc::clone(&self.registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erp_tabs::ActivationPolicy;
    use std::thread;

    #[test]
    fn test_workspace_tab_flow() {
        let workspace = Workspace::default();

        workspace.open_tab(TabType::Client, "A", "Alice");
        workspace.open_tab(TabType::Lead, "B", "Bob");
        let tab = workspace.open_tab(TabType::Client, "A", "Alice2");
        assert_eq!(tab.label(), "Alice");

        let snapshot = workspace.snapshot();
        assert_eq!(snapshot.tabs.len(), 2);
        assert_eq!(snapshot.active_tab_id.as_deref(), Some("client-A"));

        workspace.close_tab("client-A");
        assert_eq!(workspace.active_tab().unwrap().id(), "lead-B");

        workspace.close_all_tabs();
        assert!(workspace.tabs().is_empty());
        assert_eq!(workspace.active_tab_id(), None);
    }

    #[test]
    fn test_policy_comes_from_config() {
        let workspace = Workspace::new(Config {
            activation_policy: ActivationPolicy::MembersOnly,
            ..Config::default()
        });
        workspace.open_tab(TabType::Service, "S", "Support");

        assert_eq!(workspace.config().activation_policy, ActivationPolicy::MembersOnly);
        assert!(!workspace.activate_tab("client-missing"));
        assert_eq!(workspace.active_tab_id().as_deref(), Some("service-S"));
        assert_eq!(
            workspace.with_registry(|registry| registry.policy()),
            ActivationPolicy::MembersOnly
        );
    }

    #[test]
    fn test_render_and_click() {
        let workspace = Workspace::default();
        assert!(workspace.render_strip(|_| ()).is_none());

        workspace.open_tab(TabType::Client, "A", "Alice");
        workspace.open_tab(TabType::Lead, "B", "Bob");

        workspace.handle_click(&Click::body("client-A"));
        let view = workspace
            .render_strip(|tab| tab.label().to_string())
            .unwrap();
        assert_eq!(view.content.as_deref(), Some("Alice"));

        let intents = workspace.handle_click(&Click::close("lead-B"));
        assert_eq!(intents, vec![TabIntent::Close("lead-B".to_string())]);
        assert_eq!(workspace.active_tab_id().as_deref(), Some("client-A"));
    }

    #[test]
    fn test_update_is_atomic_for_readers() {
        let workspace = Workspace::default();
        let snapshot = workspace.update(|registry| {
            registry.open(TabType::Client, "1", "One");
            registry.open(TabType::Client, "2", "Two");
            registry.close("client-2");
            WorkspaceSnapshot::of(registry)
        });
        assert_eq!(snapshot.active_tab_id.as_deref(), Some("client-1"));
    }

    #[test]
    fn test_concurrent_opens_keep_invariants() {
        let workspace = Workspace::default();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let workspace = workspace.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let entity = (i % 10).to_string();
                        workspace.open_tab(TabType::Lead, &entity, "lead");
                        if worker % 2 == 0 {
                            workspace.close_tab(&format!("lead-{}", (i + 3) % 10));
                        }
                        let snapshot = workspace.snapshot();
                        if let Some(active) = snapshot.active_tab_id {
                            assert!(snapshot.tabs.iter().any(|tab| tab.id() == active));
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let tabs = workspace.tabs();
        let mut ids: Vec<&str> = tabs.iter().map(|tab| tab.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tabs.len());
    }
}
