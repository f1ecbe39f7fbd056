//! The fixed preamble shared by every generated artifact.

/// Notice prepended to everything the generator writes.
pub const GENERATED_NOTICE: &str =
    "// This file was automatically generated by contract-gen. Do not edit manually.";

/// Renders the artifact preamble.
///
/// The preamble declares every shared shape the category sections
/// refer to: the `Any` escape hatch, the `OmitFunctions` projection,
/// request/emit option records, the response wrapper, and the
/// subscription plumbing types. When `support_import` is given, the
/// extracted support module is mounted with a `#[path]` attribute so
/// the spliced type-strings can resolve against server-published
/// types.
pub fn preamble(support_import: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str(GENERATED_NOTICE);
    out.push_str("\n\n");
    out.push_str("#![allow(dead_code, nonstandard_style, unreachable_patterns, unused_variables)]\n\n");

    if let Some(path) = support_import {
        out.push_str(&format!("#[path = \"{path}\"]\nmod support;\npub use support::*;\n\n"));
    }

    out.push_str(
        r#"/// Escape hatch for shapes the server did not describe.
pub type Any = serde_json::Value;

/// Data-only projection of a server-shaped type.
///
/// Server objects may carry behavior; the client contract only ever
/// sees their data members.
pub type OmitFunctions<T> = T;

/// Options accepted by every asynchronous emit call.
#[derive(Debug, Default)]
pub struct EmitOptions {
    pub timeout: Option<u64>,
    pub since_mins: Option<u64>,
    pub now: bool,
    pub quiet: bool,
    pub not_scoped: bool,
}

/// Transports a request may be routed over.
#[derive(Debug, Clone, Copy)]
pub enum Transport {
    Http,
    Socket,
}

/// Per-call configuration shared by every verb.
#[derive(Debug, Default)]
pub struct RequestConfig<D> {
    pub since_mins: Option<u64>,
    pub now: bool,
    pub request_via: Option<Vec<Transport>>,
    pub quiet: bool,
    pub data: Option<D>,
}

/// Response wrapper returned by every route call.
#[derive(Debug)]
pub struct HttpResponse<T> {
    pub status: u16,
    pub body: T,
}

/// Callback handed to event subscribers for acknowledging receipt.
pub type AckFn<T> = Box<dyn FnOnce(T) + Send>;

/// Handle returned by subscriptions; calling it unsubscribes.
pub type Unsubscribe = Box<dyn FnOnce() + Send>;

/// Acknowledgment type for events that define no expected response.
pub enum NoAck {}
"#,
    );

    out
}
