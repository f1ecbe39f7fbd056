//! Emit contract generation for pub/sub channels.

use contract_define::{ChannelDescriptor, ScopedPath};

use crate::codegen::routes::quote_literal;
use crate::ident::pascal_ident;
use crate::scope::wrapped_or_any;

/// Renders the asynchronous emit contract.
///
/// With no channels in scope the surface degrades to a permissive
/// emit signature; otherwise a closed literal enum, a per-channel
/// contract trait with marker structs, the `(path, response)` table,
/// and the typed emit trait are produced.
pub fn channels_section(channels: &[ChannelDescriptor]) -> String {
    if channels.is_empty() {
        return "/// Permissive emit surface: no channels are published for this scope.\n\
                pub trait AsyncEmit {\n\
                \x20   fn emit(&self, event: &str, body: Any, options: EmitOptions) -> Any;\n\
                }\n\n"
            .to_string();
    }

    let mut out = String::new();

    out.push_str("/// Closed set of channels published for the current scope.\npub enum AsyncEmitEvent {\n");
    for channel in channels {
        out.push_str(&format!("    {},\n", pascal_ident(channel.scoped_path())));
    }
    out.push_str("}\n\n");

    out.push_str("impl AsyncEmitEvent {\n");
    out.push_str("    pub const fn as_str(&self) -> &'static str {\n        match self {\n");
    for channel in channels {
        out.push_str(&format!(
            "            Self::{} => \"{}\",\n",
            pascal_ident(channel.scoped_path()),
            quote_literal(channel.scoped_path()),
        ));
    }
    out.push_str("        }\n    }\n\n");

    out.push_str("    pub fn from_path(path: &str) -> Option<Self> {\n        match path {\n");
    for channel in channels {
        out.push_str(&format!(
            "            \"{}\" => Some(Self::{}),\n",
            quote_literal(channel.scoped_path()),
            pascal_ident(channel.scoped_path()),
        ));
    }
    out.push_str("            _ => None,\n        }\n    }\n}\n\n");

    out.push_str(
        "/// Per-channel contract: path literal plus emitted body and\n/// reply shapes.\npub trait AsyncEmitChannel {\n    const PATH: &'static str;\n    type Body;\n    type Response;\n}\n\n",
    );

    for channel in channels {
        let marker = format!("Emit{}", pascal_ident(channel.scoped_path()));
        out.push_str(&format!("pub struct {marker};\n\n"));
        out.push_str(&format!(
            "impl AsyncEmitChannel for {marker} {{\n\
             \x20   const PATH: &'static str = \"{path}\";\n\
             \x20   type Body = {body};\n\
             \x20   type Response = {response};\n\
             }}\n\n",
            path = quote_literal(channel.scoped_path()),
            body = wrapped_or_any(&channel.request_body_type_string),
            response = wrapped_or_any(&channel.response_body_type_string),
        ));
    }

    out.push_str("pub const ASYNC_EMIT_RESPONSES: &[(&str, &str)] = &[\n");
    for channel in channels {
        out.push_str(&format!(
            "    (\"{}\", \"{}\"),\n",
            quote_literal(channel.scoped_path()),
            quote_literal(wrapped_or_any(&channel.response_body_type_string)),
        ));
    }
    out.push_str("];\n\n");
    out.push_str(
        "pub fn async_emit_response_type(path: &str) -> Option<&'static str> {\n\
         \x20   ASYNC_EMIT_RESPONSES.iter().find(|(p, _)| *p == path).map(|(_, t)| *t)\n\
         }\n\n",
    );

    out.push_str(
        "pub trait AsyncEmit {\n\
         \x20   fn emit<C: AsyncEmitChannel>(&self, event: C, body: C::Body, options: EmitOptions) -> C::Response;\n\
         }\n\n",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(path: &str, body: Option<&str>, response: Option<&str>) -> ChannelDescriptor {
        serde_json::from_value(serde_json::json!({
            "fileUrl": "channels.ts",
            "full_channel_path": path,
            "request_body_type_string": body,
            "response_body_type_string": response,
        }))
        .unwrap()
    }

    #[test]
    fn empty_list_is_permissive() {
        let text = channels_section(&[]);
        assert!(text.contains("fn emit(&self, event: &str, body: Any, options: EmitOptions) -> Any;"));
        assert!(!text.contains("AsyncEmitEvent"));
    }

    #[test]
    fn channels_produce_literal_enum_and_markers() {
        let channels = vec![channel(
            "billing/charge",
            Some("OmitFunctions<ChargeRequest>"),
            Some("OmitFunctions<ChargeReceipt>"),
        )];
        let text = channels_section(&channels);

        assert!(text.contains("pub enum AsyncEmitEvent"));
        assert!(text.contains("BillingCharge,"));
        assert!(text.contains("impl AsyncEmitChannel for EmitBillingCharge"));
        assert!(text.contains("const PATH: &'static str = \"billing/charge\";"));
        assert!(text.contains("type Body = OmitFunctions<ChargeRequest>;"));
        assert!(text.contains("(\"billing/charge\", \"OmitFunctions<ChargeReceipt>\"),"));
        assert!(text.contains("fn emit<C: AsyncEmitChannel>"));
    }

    #[test]
    fn missing_type_strings_fall_back_to_any() {
        let text = channels_section(&[channel("ping", None, None)]);
        assert!(text.contains("type Body = OmitFunctions<Any>;"));
        assert!(text.contains("type Response = OmitFunctions<Any>;"));
    }

    #[test]
    fn table_preserves_descriptor_order() {
        let channels = vec![
            channel("a", None, Some("OmitFunctions<First>")),
            channel("a", None, Some("OmitFunctions<Second>")),
        ];
        let text = channels_section(&channels);
        let first = text.find("OmitFunctions<First>").unwrap();
        let second = text.find("OmitFunctions<Second>").unwrap();
        assert!(first < second);
    }
}
