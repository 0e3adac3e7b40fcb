//! Domain-level frontend features (auth, leads, chat, dashboard, upload) and
//! their shared logic. Routes import these modules to keep view code focused
//! while keeping security and API handling in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod chat;
pub(crate) mod dashboard;
pub(crate) mod leads;
pub(crate) mod upload;
