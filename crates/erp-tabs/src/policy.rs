//! Activation policy
//!
//! Decides what `TabRegistry::activate` does with an id that is not open.

use serde::{Deserialize, Serialize};

use crate::error::TabError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationPolicy {
    /// Accept any id, even one with no open tab. `active_tab()` then
    /// reports no active tab until the pointer is moved again.
    #[default]
    Unchecked,
    /// Ignore ids that do not belong to an open tab.
    MembersOnly,
}

impl ActivationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationPolicy::Unchecked => "unchecked",
            ActivationPolicy::MembersOnly => "members_only",
        }
    }
}

impl std::fmt::Display for ActivationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActivationPolicy {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "unchecked" => Ok(ActivationPolicy::Unchecked),
            "members_only" => Ok(ActivationPolicy::MembersOnly),
            _ => Err(TabError::UnknownPolicy(s.to_string())),
        }
    }
}
