//! Artifact assembly and file output.
//!
//! Assembles the category sections into a single contract source file
//! and writes it atomically. The assembled text is plain string
//! splicing; the opt-in [`check_and_format`] pass is the only place
//! the artifact is ever parsed as Rust.

use std::fs;
use std::io::Write;
use std::path::Path;

use contract_define::{ChannelDescriptor, EventDescriptor, RouteDescriptor};
use tracing::{debug, info};

use crate::codegen::{channels_section, events_section, preamble, routes_section};
use crate::errors::GeneratorError;

/// Assembles the full contract source.
///
/// Section order is fixed: preamble, `additionalTypes` blocks
/// (channels, then routes, then events), the event subscription
/// contract, the emit contract, and finally the four verb contracts.
/// Passing empty slices everywhere yields the all-permissive baseline.
pub fn assemble(
    support_import: Option<&str>,
    routes: &[RouteDescriptor],
    channels: &[ChannelDescriptor],
    events: &[EventDescriptor],
) -> String {
    let mut out = preamble(support_import);

    for block in additional_types(routes, channels, events) {
        out.push_str(block);
        if !block.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&events_section(events));
    out.push_str(&channels_section(channels));
    out.push_str(&routes_section(routes));

    debug!(
        routes = routes.len(),
        channels = channels.len(),
        events = events.len(),
        bytes = out.len(),
        "assembled contract"
    );
    out
}

/// The all-permissive baseline written by `reset`.
///
/// Built from empty descriptor lists, so it is deterministic and
/// resetting twice produces byte-identical output.
pub fn reset_contract() -> String {
    assemble(None, &[], &[], &[])
}

/// Collects the verbatim `additionalTypes` blocks in splice order.
fn additional_types<'a>(
    routes: &'a [RouteDescriptor],
    channels: &'a [ChannelDescriptor],
    events: &'a [EventDescriptor],
) -> Vec<&'a str> {
    let mut blocks = Vec::new();
    blocks.extend(channels.iter().filter_map(|c| c.additional_types.as_deref()));
    blocks.extend(routes.iter().filter_map(|r| r.additional_types.as_deref()));
    blocks.extend(events.iter().filter_map(|e| e.additional_types.as_deref()));
    blocks
}

/// Parses and pretty-prints the assembled artifact.
///
/// Opt-in: descriptor type-strings are opaque to the generator, so a
/// server publishing an expression this crate cannot parse must not
/// break default generation. When the check is requested and fails,
/// nothing is written.
pub fn check_and_format(text: &str) -> Result<String, GeneratorError> {
    let ast = syn::parse_file(text).map_err(|e| GeneratorError::CodeGen(e.to_string()))?;
    Ok(prettyplease::unparse(&ast))
}

/// Writes `text` to `path` atomically.
///
/// The content lands in a sibling temp file first and is renamed over
/// the destination, so a crash mid-write never leaves a truncated
/// contract behind. Parent directories are created as needed.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), GeneratorError> {
    let io_err = |source: std::io::Error| GeneratorError::WriteError {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp = path.with_extension("rs.tmp");
    {
        let mut file = fs::File::create(&tmp).map_err(io_err)?;
        file.write_all(text.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
    }
    fs::rename(&tmp, path).map_err(io_err)?;

    info!(path = %path.display(), bytes = text.len(), "wrote contract");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn route_with_types(additional: &str) -> RouteDescriptor {
        serde_json::from_value(serde_json::json!({
            "fileUrl": "t.ts",
            "full_route_path": "x",
            "method": "get",
            "additionalTypes": additional,
        }))
        .unwrap()
    }

    #[test]
    fn reset_is_deterministic_and_permissive() {
        let a = reset_contract();
        let b = reset_contract();
        assert_eq!(a, b);
        assert!(a.contains("pub trait ApiGet"));
        assert!(a.contains("pub trait AsyncEmit"));
        assert!(a.contains("pub trait OnEvent"));
        assert!(!a.contains("enum ApiGetUrl"));
    }

    #[test]
    fn additional_types_splice_channels_then_routes_then_events() {
        let channel: ChannelDescriptor = serde_json::from_value(serde_json::json!({
            "fileUrl": "c.ts",
            "full_channel_path": "c",
            "additionalTypes": "pub struct FromChannel;",
        }))
        .unwrap();
        let event: EventDescriptor = serde_json::from_value(serde_json::json!({
            "fileUrl": "e.ts",
            "event": "e",
            "additionalTypes": "pub struct FromEvent;",
        }))
        .unwrap();
        let route = route_with_types("pub struct FromRoute;");

        let text = assemble(None, &[route], &[channel], &[event]);
        let c = text.find("pub struct FromChannel;").unwrap();
        let r = text.find("pub struct FromRoute;").unwrap();
        let e = text.find("pub struct FromEvent;").unwrap();
        assert!(c < r && r < e);
    }

    #[test]
    fn sections_follow_events_channels_routes_order() {
        let text = reset_contract();
        let events = text.find("pub trait OnEvent").unwrap();
        let channels = text.find("pub trait AsyncEmit").unwrap();
        let routes = text.find("pub trait ApiPost").unwrap();
        assert!(events < channels && channels < routes);
    }

    #[test]
    fn baseline_passes_the_syntax_check() {
        let formatted = check_and_format(&reset_contract()).unwrap();
        assert!(formatted.contains("pub trait ApiGet"));
    }

    #[test]
    fn malformed_artifact_fails_the_check() {
        assert!(matches!(
            check_and_format("pub struct {{{"),
            Err(GeneratorError::CodeGen(_))
        ));
    }

    #[test]
    fn write_atomic_creates_parents_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src/generated/contract.rs");

        write_atomic(&path, "first").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!path.with_extension("rs.tmp").exists());
    }
}
