//! Entity categories that can be opened as workspace tabs

use serde::{Deserialize, Serialize};

use crate::error::TabError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabType {
    /// Client record
    Client,
    /// Sales lead
    Lead,
    /// Catalog service
    Service,
}

impl TabType {
    pub const ALL: [TabType; 3] = [TabType::Client, TabType::Lead, TabType::Service];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabType::Client => "client",
            TabType::Lead => "lead",
            TabType::Service => "service",
        }
    }
}

impl std::fmt::Display for TabType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabType {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "client" => Ok(TabType::Client),
            "lead" => Ok(TabType::Lead),
            "service" => Ok(TabType::Service),
            _ => Err(TabError::UnknownTabType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!("client".parse::<TabType>().unwrap(), TabType::Client);
        assert_eq!("Lead".parse::<TabType>().unwrap(), TabType::Lead);
        assert_eq!(" SERVICE ".parse::<TabType>().unwrap(), TabType::Service);
    }

    #[test]
    fn test_parse_unknown_type() {
        let err = "invoice".parse::<TabType>().unwrap_err();
        assert_eq!(err, TabError::UnknownTabType("invoice".to_string()));
    }

    #[test]
    fn test_display_matches_serde() {
        for kind in TabType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
