//! Click events and the intents they produce

use serde::{Deserialize, Serialize};

use erp_tabs::{TabError, TabRegistry};

/// Part of a tab button that received a click.
///
/// The close affordance sits inside the tab body, so a click on it would
/// reach the body too unless its handler stops propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitTarget {
    Body,
    Close,
}

impl HitTarget {
    /// Targets the click travels through, innermost first.
    pub(crate) fn bubble_path(self) -> &'static [HitTarget] {
        match self {
            HitTarget::Close => &[HitTarget::Close, HitTarget::Body],
            HitTarget::Body => &[HitTarget::Body],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HitTarget::Body => "body",
            HitTarget::Close => "close",
        }
    }
}

impl std::str::FromStr for HitTarget {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "body" => Ok(HitTarget::Body),
            "close" => Ok(HitTarget::Close),
            _ => Err(TabError::UnknownHitTarget(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Click {
    pub tab_id: String,
    pub target: HitTarget,
}

impl Click {
    pub fn body(tab_id: impl Into<String>) -> Self {
        Self {
            tab_id: tab_id.into(),
            target: HitTarget::Body,
        }
    }

    pub fn close(tab_id: impl Into<String>) -> Self {
        Self {
            tab_id: tab_id.into(),
            target: HitTarget::Close,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "tab_id", rename_all = "lowercase")]
pub enum TabIntent {
    Activate(String),
    Close(String),
}

impl TabIntent {
    pub fn tab_id(&self) -> &str {
        match self {
            TabIntent::Activate(id) | TabIntent::Close(id) => id,
        }
    }
}

/// Receiver of the strip's two intents.
pub trait StripHandler {
    fn on_activate(&mut self, tab_id: &str);

    fn on_close(&mut self, tab_id: &str);

    fn apply(&mut self, intent: &TabIntent) {
        match intent {
            TabIntent::Activate(id) => self.on_activate(id),
            TabIntent::Close(id) => self.on_close(id),
        }
    }
}

impl StripHandler for TabRegistry {
    fn on_activate(&mut self, tab_id: &str) {
        self.activate(tab_id);
    }

    fn on_close(&mut self, tab_id: &str) {
        self.close(tab_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_path_starts_at_target() {
        assert_eq!(HitTarget::Body.bubble_path(), &[HitTarget::Body]);
        assert_eq!(
            HitTarget::Close.bubble_path(),
            &[HitTarget::Close, HitTarget::Body]
        );
    }

    #[test]
    fn test_parse_hit_target() {
        assert_eq!("close".parse::<HitTarget>().unwrap(), HitTarget::Close);
        assert_eq!("Body".parse::<HitTarget>().unwrap(), HitTarget::Body);
        assert_eq!(
            "icon".parse::<HitTarget>().unwrap_err(),
            TabError::UnknownHitTarget("icon".to_string())
        );
    }

    #[test]
    fn test_intent_serialized_shape() {
        let json = serde_json::to_value(TabIntent::Close("lead-B".to_string())).unwrap();
        assert_eq!(json["intent"], "close");
        assert_eq!(json["tab_id"], "lead-B");
    }

    #[test]
    fn test_intent_tab_id() {
        assert_eq!(TabIntent::Activate("client-A".to_string()).tab_id(), "client-A");
        assert_eq!(TabIntent::Close("lead-B".to_string()).tab_id(), "lead-B");
    }

    #[test]
    fn test_registry_handles_intents() {
        let mut registry = TabRegistry::new();
        registry.open(erp_tabs::TabType::Client, "A", "Alice");
        registry.open(erp_tabs::TabType::Lead, "B", "Bob");

        registry.apply(&TabIntent::Activate("client-A".to_string()));
        assert_eq!(registry.active_tab_id(), Some("client-A"));

        registry.apply(&TabIntent::Close("client-A".to_string()));
        assert_eq!(registry.active_tab_id(), Some("lead-B"));
        assert_eq!(registry.len(), 1);
    }
}
