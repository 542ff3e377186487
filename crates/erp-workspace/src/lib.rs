//! ERP Workspace
//!
//! Host-side coordination for the workspace tab strip. The `Workspace` owns
//! the tab registry for one session; pages open records into it and the
//! strip renders whatever it currently holds.

pub mod commands;
mod config;
mod error;
mod workspace;

pub use config::Config;
pub use error::CoreError;
pub use workspace::{Workspace, WorkspaceSnapshot};

// Re-export tab components
pub use erp_tabs::{ActivationPolicy, Tab, TabError, TabRegistry, TabType};
pub use erp_tabstrip::{
    dispatch_click, Click, CloseAffordance, HitTarget, StripHandler, StripView, TabButton,
    TabIntent, TabStrip,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this more than
/// once keeps the first subscriber.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
