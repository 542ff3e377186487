//! ERP Workspace Tabs
//!
//! Tracks the entity records (clients, leads, services) a user has opened
//! into the workspace tab strip, and which of them is active.
//! Tabs are keyed by `(type, entity id)`: opening the same record twice
//! focuses the existing tab instead of adding a duplicate.

mod error;
mod kind;
mod policy;
mod registry;
mod tab;

pub use error::TabError;
pub use kind::TabType;
pub use policy::ActivationPolicy;
pub use registry::TabRegistry;
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
