//! Contract synthesis for the generated module.
//!
//! Each submodule renders one surface of the contract artifact. The
//! generators are pure text builders: type-strings arriving on the
//! descriptors are opaque payloads spliced verbatim, never parsed or
//! validated here. Malformed type expressions only surface when the
//! consuming crate compiles the artifact.
//!
//! ## Submodules
//!
//! - [`preamble`] - Fixed shared types at the top of every artifact
//! - [`routes`] - Per-verb route contracts with permissive fallbacks
//! - [`channels`] - The emit contract for pub/sub channels
//! - [`events`] - The subscription contract for server events
//!
//! ## Discriminator shape
//!
//! Where the server publishes literal-keyed contracts, each generator
//! emits a closed enum of literals plus a contract trait implemented
//! by per-descriptor marker structs, and a plain `(literal, type)`
//! mapping table with a first-match lookup function. Duplicate
//! literals are not detected: in the tables and `match` arms the
//! earliest descriptor shadows later ones, mirroring the ordered
//! dispatch of the descriptor lists themselves. Empty categories fall
//! back to permissive signatures so callers can still invoke the
//! surface with arbitrary strings before the server publishes any
//! descriptors.

pub mod channels;
pub mod events;
pub mod preamble;
pub mod routes;

pub use channels::channels_section;
pub use events::events_section;
pub use preamble::preamble;
pub use routes::{permissive_verb, routes_section};
