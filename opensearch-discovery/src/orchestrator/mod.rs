//! Discovery orchestrator: per-site fallback discovery and the concurrent
//! run over all configured sites.
//!
//! [`discover`] locates and parses one site's description, trying the
//! homepage's search link before the URL itself. [`batch`] runs the whole
//! discover → parse → derive pipeline for many sites at once and returns
//! per-site outcomes in configuration order.

pub mod batch;
pub mod discover;

pub use batch::{discover_form, discover_forms, SiteForm, SiteOutcome};
pub use discover::{Discovered, Discoverer};
