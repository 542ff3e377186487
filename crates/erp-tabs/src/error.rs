//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Unknown tab type: {0}")]
    UnknownTabType(String),

    #[error("Unknown hit target: {0}")]
    UnknownHitTarget(String),

    #[error("Unknown activation policy: {0}")]
    UnknownPolicy(String),
}
