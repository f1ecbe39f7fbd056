//! Contract Definition Library
//!
//! This crate provides the descriptor primitives consumed by the
//! `contract-gen` binary: flat metadata records describing the HTTP
//! routes, pub/sub channels, and async events a server publishes.
//! The generator turns a set of these descriptors into a single typed
//! contract module for client code.
//!
//! ## Core Types
//!
//! - [`RouteDescriptor`] - One HTTP route (path, method, request/response type-strings)
//! - [`ChannelDescriptor`] - One pub/sub channel (path, body/response type-strings)
//! - [`EventDescriptor`] - One server-emitted event (name, body/ack type-strings)
//! - [`Method`] - Route method, including the `all` wildcard
//! - [`Verb`] - The four concrete verbs a contract is partitioned into
//!
//! ## Type-strings
//!
//! Descriptors carry their request/response shapes as *type-strings*:
//! free-form textual type expressions the generator splices into the
//! output verbatim. They are opaque by contract: nothing in this
//! workspace ever parses them. The [`TypeStrings`] trait gives the
//! generator uniform mutable access to every such field on a record,
//! and [`ScopedPath`] exposes the identity path that scope filtering
//! rewrites.
//!
//! ## Examples
//!
//! Descriptors normally arrive as server-published JSON:
//!
//! ```
//! use contract_define::{Method, RouteDescriptor};
//!
//! let json = r#"{
//!     "fileUrl": "src/routes/profile.ts",
//!     "full_route_path": "/users/profile",
//!     "method": "get",
//!     "response_body_type_string": "Profile;"
//! }"#;
//!
//! let route: RouteDescriptor = serde_json::from_str(json).unwrap();
//! assert_eq!(route.method, Method::Get);
//! assert_eq!(route.full_route_path.as_deref(), Some("/users/profile"));
//! ```

pub mod auth;
pub mod channel;
pub mod event;
pub mod method;
pub mod prelude;
pub mod route;

// Re-export main types at crate root
pub use auth::{Authority, AuthorityList, AuthorityRequirements, AuthorityValue, AuthorizationOption, DynamicAuthorities};
pub use channel::ChannelDescriptor;
pub use event::EventDescriptor;
pub use method::{Method, Verb};
pub use route::RouteDescriptor;

/// Uniform access to every type-string field on a descriptor.
///
/// The wire convention is that any field whose key ends in
/// `type_string` carries an opaque textual type expression. This trait
/// makes that convention explicit per record type so the normalizer
/// can rewrite all of them without reflecting over field names.
pub trait TypeStrings {
    /// Mutable slots for every type-string field, in declaration order.
    fn type_strings_mut(&mut self) -> Vec<&mut Option<String>>;
}

/// The identity path that scope filtering selects on and rebases.
///
/// Routes and channels carry a scoped path (`full_route_path` /
/// `full_channel_path`). Events intentionally do not implement this
/// trait: the generator never scope-filters them.
pub trait ScopedPath {
    /// The current identity path; absent paths read as empty.
    fn scoped_path(&self) -> &str;

    /// Overwrites the identity path (used once, during normalization).
    fn set_scoped_path(&mut self, path: String);
}
