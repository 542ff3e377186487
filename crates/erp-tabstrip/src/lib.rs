//! ERP Workspace Tab Strip
//!
//! Renders the registry's tabs as a horizontal row of closable buttons and
//! turns clicks into `activate` / `close` intents. The strip owns no state:
//! it is rebuilt from the registry after every change.

mod event;
mod strip;

pub use event::{Click, HitTarget, StripHandler, TabIntent};
pub use strip::{dispatch_click, CloseAffordance, StripView, TabButton, TabStrip, CLOSE_LABEL};
