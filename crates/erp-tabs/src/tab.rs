//! Tab data structure
//!
//! A tab is a handle on one open entity record. It is never modified after
//! creation: reopening the same record keeps the original label.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::kind::TabType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    id: String,
    tab_type: TabType,
    entity_id: String,
    label: String,
    opened_at: DateTime<Utc>,
}

impl Tab {
    pub(crate) fn new(tab_type: TabType, entity_id: String, label: String) -> Self {
        Self {
            id: Self::compose_id(tab_type, &entity_id),
            tab_type,
            entity_id,
            label,
            opened_at: Utc::now(),
        }
    }

    /// Tab id for a record: `"{type}-{entity_id}"`.
    pub fn compose_id(tab_type: TabType, entity_id: &str) -> String {
        format!("{}-{}", tab_type.as_str(), entity_id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tab_type(&self) -> TabType {
        self.tab_type
    }

    /// Identifier of the underlying record
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// Display label given when the tab was opened
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}
