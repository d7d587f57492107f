//! Library side of the `foodshare` command: logging, settings and drafts.

pub mod draft;
pub mod logging;
pub mod settings;
