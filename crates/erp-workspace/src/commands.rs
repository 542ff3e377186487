//! Workspace commands
//!
//! String-in, serializable-out entry points for hosts that talk to the
//! workspace over a message bridge. Arguments are parsed here; failures are
//! returned as `CommandResult::err` instead of propagating.

use serde::{Deserialize, Serialize};

use erp_tabs::{Tab, TabRegistry, TabType};
use erp_tabstrip::{dispatch_click, Click, HitTarget, StripView, TabStrip};

use crate::error::CoreError;
use crate::workspace::Workspace;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub tab_type: String,
    pub entity_id: String,
    pub label: String,
    pub is_active: bool,
}

impl TabInfo {
    fn from_tab(tab: &Tab, active_tab_id: Option<&str>) -> Self {
        Self {
            id: tab.id().to_string(),
            tab_type: tab.tab_type().as_str().to_string(),
            entity_id: tab.entity_id().to_string(),
            label: tab.label().to_string(),
            is_active: active_tab_id == Some(tab.id()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsState {
    pub tabs: Vec<TabInfo>,
    pub active_tab_id: Option<String>,
}

impl TabsState {
    fn of(registry: &TabRegistry) -> Self {
        let active_tab_id = registry.active_tab_id();
        Self {
            tabs: registry
                .tabs()
                .iter()
                .map(|tab| TabInfo::from_tab(tab, active_tab_id))
                .collect(),
            active_tab_id: active_tab_id.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<Result<T>> for CommandResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => CommandResult::ok(data),
            Err(e) => {
                tracing::warn!(error = %e, "Workspace command failed");
                CommandResult::err(e.to_string())
            }
        }
    }
}

fn parse_tab_type(tab_type: &str) -> Result<TabType> {
    tab_type.parse::<TabType>().map_err(CoreError::from)
}

pub fn open_tab(
    workspace: &Workspace,
    tab_type: &str,
    entity_id: &str,
    label: &str,
) -> CommandResult<TabInfo> {
    let result = parse_tab_type(tab_type).map(|tab_type| {
        workspace.update(|registry| {
            let tab = registry.open(tab_type, entity_id, label).clone();
            TabInfo::from_tab(&tab, registry.active_tab_id())
        })
    });
    result.into()
}

pub fn close_tab(workspace: &Workspace, tab_id: &str) -> CommandResult<TabsState> {
    CommandResult::ok(workspace.update(|registry| {
        registry.close(tab_id);
        TabsState::of(registry)
    }))
}

pub fn activate_tab(workspace: &Workspace, tab_id: &str) -> CommandResult<TabsState> {
    CommandResult::ok(workspace.update(|registry| {
        registry.activate(tab_id);
        TabsState::of(registry)
    }))
}

pub fn close_all_tabs(workspace: &Workspace) -> CommandResult<TabsState> {
    CommandResult::ok(workspace.update(|registry| {
        registry.close_all();
        TabsState::of(registry)
    }))
}

pub fn get_tabs(workspace: &Workspace) -> CommandResult<TabsState> {
    CommandResult::ok(workspace.with_registry(TabsState::of))
}

pub fn get_active_tab(workspace: &Workspace) -> CommandResult<Option<TabInfo>> {
    CommandResult::ok(workspace.with_registry(|registry| {
        registry
            .active_tab()
            .map(|tab| TabInfo::from_tab(tab, registry.active_tab_id()))
    }))
}

/// Rendered strip with the active tab's info as its content region.
/// `data` is `None` when no tabs are open.
pub fn get_strip(workspace: &Workspace) -> CommandResult<Option<StripView<TabInfo>>> {
    CommandResult::ok(workspace.with_registry(|registry| {
        TabStrip::from_registry(registry)
            .render(|tab| TabInfo::from_tab(tab, registry.active_tab_id()))
    }))
}

/// Click on a strip button. `target` is `"body"` or `"close"`.
pub fn click_tab(workspace: &Workspace, tab_id: &str, target: &str) -> CommandResult<TabsState> {
    let result = target
        .parse::<HitTarget>()
        .map_err(CoreError::from)
        .map(|target| {
            let click = Click {
                tab_id: tab_id.to_string(),
                target,
            };
            workspace.update(|registry| {
                dispatch_click(registry, &click);
                TabsState::of(registry)
            })
        });
    result.into()
}
