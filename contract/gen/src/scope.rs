//! Scope filtering and descriptor normalization.
//!
//! This is the front half of the synthesis core: given a scope prefix
//! and the server-published descriptor maps, select the descriptors
//! that fall under the scope, rewrite their type-string fields, and
//! rebase their identity paths onto the scope.
//!
//! Filtering is prefix-based on the normalized path, not
//! segment-aware: scope `"user"` also selects `"users/2"`. That is an
//! accepted property of the design, not a bug to fix here.

use contract_define::{EventDescriptor, ScopedPath, TypeStrings};
use indexmap::IndexMap;
use tracing::debug;

/// The textual fallback spliced wherever a descriptor omits a type-string.
pub const FUNCTIONLESS_ANY: &str = "OmitFunctions<Any>";

/// Strips at most one leading and one trailing path separator.
///
/// ## Examples
///
/// ```
/// use contract_gen::scope::trim_slashes;
///
/// assert_eq!(trim_slashes("/users/"), "users");
/// assert_eq!(trim_slashes("users/2"), "users/2");
/// assert_eq!(trim_slashes("/"), "");
/// ```
pub fn trim_slashes(s: &str) -> &str {
    let s = s.strip_prefix('/').unwrap_or(s);
    s.strip_suffix('/').unwrap_or(s)
}

/// Joins path components with single separators.
///
/// Each component is trimmed independently before joining, so the
/// result never contains doubled separators and never starts with one.
/// Empty components vanish.
///
/// ## Examples
///
/// ```
/// use contract_gen::scope::join_paths;
///
/// assert_eq!(join_paths(&["https://api.test.com/", "/assets/"]), "https://api.test.com/assets");
/// assert_eq!(join_paths(&["", "api", "/v1/"]), "api/v1");
/// ```
pub fn join_paths(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| trim_slashes(p))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Rewrites every present type-string field on a descriptor.
///
/// Strips exactly one trailing statement terminator if present, then
/// wraps the expression in the `OmitFunctions` projection so that
/// server-side behavior members never leak into the client contract.
/// Absent fields stay absent; they fall back to
/// [`FUNCTIONLESS_ANY`] at splice time.
pub fn wrap_type_strings<T: TypeStrings>(descriptor: &mut T) {
    for slot in descriptor.type_strings_mut() {
        if let Some(raw) = slot.take() {
            let stripped = raw.strip_suffix(';').unwrap_or(&raw);
            *slot = Some(format!("OmitFunctions<{stripped}>"));
        }
    }
}

/// Reads a type-string slot, falling back to the wrapped `Any` projection.
pub fn wrapped_or_any(slot: &Option<String>) -> &str {
    slot.as_deref().unwrap_or(FUNCTIONLESS_ANY)
}

/// Selects and normalizes the descriptors under `scope`.
///
/// Descriptors are visited in the source map's insertion order. A
/// descriptor is selected when its trimmed identity path starts with
/// the trimmed scope. Selected descriptors are mutated exactly once:
/// type-strings are wrapped and the identity path is overwritten with
/// the separator-trimmed suffix remaining after the scope prefix.
pub fn filter_scoped<T>(map: IndexMap<String, T>, scope: &str) -> Vec<T>
where
    T: ScopedPath + TypeStrings,
{
    let scope = trim_slashes(scope);
    let mut selected = Vec::new();

    for (_, mut descriptor) in map {
        let path = trim_slashes(descriptor.scoped_path()).to_string();
        let keep = path.starts_with(scope);
        debug!(%path, keep, "scope candidate");
        if !keep {
            continue;
        }

        wrap_type_strings(&mut descriptor);
        descriptor.set_scoped_path(trim_slashes(&path[scope.len()..]).to_string());
        selected.push(descriptor);
    }

    selected
}

/// Prepares the event list for synthesis.
///
/// Events bypass scope filtering entirely (every published event
/// appears in the contract); only type-string wrapping applies.
pub fn prepare_events(map: IndexMap<String, EventDescriptor>) -> Vec<EventDescriptor> {
    map.into_values()
        .map(|mut event| {
            wrap_type_strings(&mut event);
            event
        })
        .collect()
}
