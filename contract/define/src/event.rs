//! Server-emitted event descriptors.

use serde::{Deserialize, Serialize};

use crate::TypeStrings;

/// Metadata for one async event the server can emit to subscribers.
///
/// Events are identified by `event` name rather than a mounted path,
/// and the generator does not scope-filter them: every published
/// event appears in the contract regardless of scope. An event may
/// declare an expected acknowledgment shape; when it does not, the
/// generated subscription contract marks the ack channel uninhabited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor {
    /// Server-side source file this event was described in.
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// Event name; the identity key in the generated contract.
    pub event: String,
    /// Rooms the event is emitted to (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<String>>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,
    /// Type-string for the event payload shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_body_type_string: Option<String>,
    /// Extra type declarations spliced verbatim into the artifact.
    #[serde(rename = "additionalTypes", default, skip_serializing_if = "Option::is_none")]
    pub additional_types: Option<String>,
    /// Type-string for the acknowledgment the server expects back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_response_body_type_string: Option<String>,
    /// Absolute path of the description file on the server (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_file_full_path: Option<String>,
}

impl TypeStrings for EventDescriptor {
    fn type_strings_mut(&mut self) -> Vec<&mut Option<String>> {
        vec![
            &mut self.event_body_type_string,
            &mut self.expected_response_body_type_string,
        ]
    }
}
