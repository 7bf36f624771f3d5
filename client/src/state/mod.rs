//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state is the only state shared across pages; form drafts stay
//! local to the page that owns them.

pub mod session;
