//! Pub/sub channel descriptors.

use serde::{Deserialize, Serialize};

use crate::auth::AuthorityRequirements;
use crate::{ScopedPath, TypeStrings};

/// Metadata for one pub/sub channel published by the server.
///
/// Channels are the emit-and-await-reply surface: a caller emits a
/// body on `full_channel_path` and receives a typed response. Like
/// routes they are scope-filtered on their identity path; unlike
/// routes they carry no method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    /// Server-side source file this channel was described in.
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// Channel path relative to its description file (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Full mounted path; the identity key for scope filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_channel_path: Option<String>,
    /// Whether the channel requires an authenticated caller (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_auth: Option<bool>,
    /// Structured allow/reject authority rules (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_authorities: Option<AuthorityRequirements>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,
    /// Type-string for the emitted body shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body_type_string: Option<String>,
    /// Extra type declarations spliced verbatim into the artifact.
    #[serde(rename = "additionalTypes", default, skip_serializing_if = "Option::is_none")]
    pub additional_types: Option<String>,
    /// Type-string for the reply shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_body_type_string: Option<String>,
    /// Absolute path of the description file on the server (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_file_full_path: Option<String>,
}

impl TypeStrings for ChannelDescriptor {
    fn type_strings_mut(&mut self) -> Vec<&mut Option<String>> {
        vec![
            &mut self.request_body_type_string,
            &mut self.response_body_type_string,
        ]
    }
}

impl ScopedPath for ChannelDescriptor {
    fn scoped_path(&self) -> &str {
        self.full_channel_path.as_deref().unwrap_or("")
    }

    fn set_scoped_path(&mut self, path: String) {
        self.full_channel_path = Some(path);
    }
}
