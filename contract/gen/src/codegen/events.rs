//! Subscription contract generation for server-emitted events.

use contract_define::EventDescriptor;

use crate::codegen::routes::quote_literal;
use crate::ident::pascal_ident;
use crate::scope::wrapped_or_any;

/// Renders the event subscription contract.
///
/// Events are keyed by name, never scope-filtered. Each event gets a
/// variant in a closed name enum and a marker struct implementing the
/// subscription contract; an event with no declared acknowledgment
/// shape gets the uninhabited `NoAck` so callers cannot construct one.
pub fn events_section(events: &[EventDescriptor]) -> String {
    if events.is_empty() {
        return "/// Permissive subscription surface: no events are published.\n\
                pub trait OnEvent {\n\
                \x20   fn on(&self, event: &str, callback: Box<dyn FnMut(Any, Option<AckFn<Any>>) + Send>) -> Unsubscribe;\n\
                }\n\n"
            .to_string();
    }

    let mut out = String::new();

    out.push_str("/// Closed set of events the server publishes.\npub enum EventName {\n");
    for event in events {
        out.push_str(&format!("    {},\n", pascal_ident(&event.event)));
    }
    out.push_str("}\n\n");

    out.push_str("impl EventName {\n");
    out.push_str("    pub const fn as_str(&self) -> &'static str {\n        match self {\n");
    for event in events {
        out.push_str(&format!(
            "            Self::{} => \"{}\",\n",
            pascal_ident(&event.event),
            quote_literal(&event.event),
        ));
    }
    out.push_str("        }\n    }\n\n");

    out.push_str("    pub fn from_name(name: &str) -> Option<Self> {\n        match name {\n");
    for event in events {
        out.push_str(&format!(
            "            \"{}\" => Some(Self::{}),\n",
            quote_literal(&event.event),
            pascal_ident(&event.event),
        ));
    }
    out.push_str("            _ => None,\n        }\n    }\n}\n\n");

    out.push_str(
        "/// Per-event contract: name literal plus payload and\n/// acknowledgment shapes.\npub trait ApiEvent {\n    const NAME: &'static str;\n    type Body;\n    type Ack;\n}\n\n",
    );

    for event in events {
        let marker = format!("On{}", pascal_ident(&event.event));
        let ack = event
            .expected_response_body_type_string
            .as_deref()
            .unwrap_or("NoAck");
        out.push_str(&format!("pub struct {marker};\n\n"));
        out.push_str(&format!(
            "impl ApiEvent for {marker} {{\n\
             \x20   const NAME: &'static str = \"{name}\";\n\
             \x20   type Body = {body};\n\
             \x20   type Ack = {ack};\n\
             }}\n\n",
            name = quote_literal(&event.event),
            body = wrapped_or_any(&event.event_body_type_string),
        ));
    }

    out.push_str("pub const EVENT_BODIES: &[(&str, &str)] = &[\n");
    for event in events {
        out.push_str(&format!(
            "    (\"{}\", \"{}\"),\n",
            quote_literal(&event.event),
            quote_literal(wrapped_or_any(&event.event_body_type_string)),
        ));
    }
    out.push_str("];\n\n");
    out.push_str(
        "pub fn event_body_type(name: &str) -> Option<&'static str> {\n\
         \x20   EVENT_BODIES.iter().find(|(n, _)| *n == name).map(|(_, t)| *t)\n\
         }\n\n",
    );

    out.push_str(
        "pub trait OnEvent {\n\
         \x20   fn on<E: ApiEvent>(&self, event: E, callback: Box<dyn FnMut(E::Body, Option<AckFn<E::Ack>>) + Send>) -> Unsubscribe;\n\
         }\n\n",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, body: Option<&str>, ack: Option<&str>) -> EventDescriptor {
        serde_json::from_value(serde_json::json!({
            "fileUrl": "events.ts",
            "event": name,
            "event_body_type_string": body,
            "expected_response_body_type_string": ack,
        }))
        .unwrap()
    }

    #[test]
    fn empty_list_is_permissive() {
        let text = events_section(&[]);
        assert!(text.contains("fn on(&self, event: &str,"));
        assert!(!text.contains("EventName"));
    }

    #[test]
    fn event_names_become_variants_and_markers() {
        let events = vec![event(
            "sync:progress",
            Some("OmitFunctions<SyncProgress>"),
            None,
        )];
        let text = events_section(&events);

        assert!(text.contains("pub enum EventName"));
        assert!(text.contains("SyncProgress,"));
        assert!(text.contains("const NAME: &'static str = \"sync:progress\";"));
        assert!(text.contains("impl ApiEvent for OnSyncProgress"));
        assert!(text.contains("type Body = OmitFunctions<SyncProgress>;"));
    }

    #[test]
    fn undeclared_ack_is_uninhabited() {
        let text = events_section(&[event("fire-and-forget", None, None)]);
        assert!(text.contains("type Ack = NoAck;"));
    }

    #[test]
    fn declared_ack_is_spliced() {
        let text = events_section(&[event(
            "needs-reply",
            None,
            Some("OmitFunctions<ReplyShape>"),
        )]);
        assert!(text.contains("type Ack = OmitFunctions<ReplyShape>;"));
    }
}
