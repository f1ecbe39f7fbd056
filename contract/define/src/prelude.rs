//! Convenient re-exports for working with descriptor types.
//!
//! ## Examples
//!
//! ```
//! use contract_define::prelude::*;
//!
//! let method = Method::Get;
//! assert!(method.matches(Verb::Get));
//! ```

pub use crate::auth::{
    Authority, AuthorityList, AuthorityRequirements, AuthorityValue, AuthorizationOption,
    DynamicAuthorities,
};
pub use crate::channel::ChannelDescriptor;
pub use crate::event::EventDescriptor;
pub use crate::method::{Method, Verb};
pub use crate::route::RouteDescriptor;
pub use crate::{ScopedPath, TypeStrings};
