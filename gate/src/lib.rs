//! Session flag store and navigation guard for the formdesk client.
//!
//! This crate is UI-framework agnostic: the Leptos client owns an
//! [`context::AppContext`] over a browser-backed [`store::FlagStore`] and asks
//! it what to do on every route change. Native tests drive the same context
//! over [`store::MemoryStore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Flag store trait, persisted key names, in-memory store |
//! | [`session`] | Typed session (`Anonymous` / `Authenticated`) and its flag projection |
//! | [`routes`] | Static route descriptors and path resolution |
//! | [`guard`] | Guard policy and the side-effect-free navigator |
//! | [`context`] | Application context owning store, session, and route table |
//! | [`config`] | Landing/login path configuration |

pub mod config;
pub mod context;
pub mod guard;
pub mod routes;
pub mod session;
pub mod store;

pub use config::{ConfigError, GateConfig};
pub use context::AppContext;
pub use guard::{Decision, Navigation, Navigator, Step, check};
pub use routes::{RouteDescriptor, RouteKind, RouteMeta, RouteTable};
pub use session::{Identity, Session, SessionFlags};
pub use store::{FlagStore, MemoryStore, StoreError};
