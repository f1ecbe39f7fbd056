//! HTTP route descriptors.

use serde::{Deserialize, Serialize};

use crate::method::Method;
use crate::{ScopedPath, TypeStrings};

/// Metadata for one HTTP route published by the server.
///
/// The identity of a route is its `full_route_path`; scope filtering
/// selects on it and rewrites it in place. The four `*_type_string`
/// fields carry opaque textual type expressions that end up spliced
/// into the generated contract. A route without a method is invalid
/// and fails deserialization.
///
/// ## Examples
///
/// ```
/// use contract_define::{Method, RouteDescriptor};
///
/// let json = r#"{
///     "fileUrl": "src/routes/users.ts",
///     "full_route_path": "/users/profile",
///     "method": "get",
///     "request_params_type_string": "ProfileQuery;",
///     "response_body_type_string": "Profile"
/// }"#;
///
/// let route: RouteDescriptor = serde_json::from_str(json).unwrap();
/// assert_eq!(route.method, Method::Get);
/// assert_eq!(route.response_body_type_string.as_deref(), Some("Profile"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Server-side source file this route was described in.
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// Route path relative to its description file (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Extra type declarations spliced verbatim into the artifact.
    #[serde(rename = "additionalTypes", default, skip_serializing_if = "Option::is_none")]
    pub additional_types: Option<String>,
    /// Full mounted path; the identity key for scope filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_route_path: Option<String>,
    /// Whether the route requires an authenticated caller (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_auth: Option<bool>,
    /// Authority key names required by the route (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_authorities: Option<Vec<String>>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,
    /// Route method; `all` contributes to every verb.
    pub method: Method,
    /// Type-string for the query/params shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_params_type_string: Option<String>,
    /// Type-string for the request body shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body_type_string: Option<String>,
    /// Type-string for the request headers shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_headers_type_string: Option<String>,
    /// Declared response content type (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_content_type: Option<String>,
    /// Type-string for the response body shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_body_type_string: Option<String>,
    /// Absolute path of the description file on the server (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_file_full_path: Option<String>,
}

impl TypeStrings for RouteDescriptor {
    fn type_strings_mut(&mut self) -> Vec<&mut Option<String>> {
        vec![
            &mut self.request_params_type_string,
            &mut self.request_body_type_string,
            &mut self.request_headers_type_string,
            &mut self.response_body_type_string,
        ]
    }
}

impl ScopedPath for RouteDescriptor {
    fn scoped_path(&self) -> &str {
        self.full_route_path.as_deref().unwrap_or("")
    }

    fn set_scoped_path(&mut self, path: String) {
        self.full_route_path = Some(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_method_is_invalid() {
        let json = r#"{"fileUrl": "a.ts", "full_route_path": "/users"}"#;
        assert!(serde_json::from_str::<RouteDescriptor>(json).is_err());
    }

    #[test]
    fn auxiliary_fields_survive_roundtrip() {
        let json = r#"{
            "fileUrl": "a.ts",
            "full_route_path": "/users",
            "method": "post",
            "requires_auth": true,
            "requires_authorities": ["admin"],
            "additionalTypes": "pub struct Extra;"
        }"#;
        let route: RouteDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(route.requires_auth, Some(true));
        assert_eq!(route.additional_types.as_deref(), Some("pub struct Extra;"));

        let back = serde_json::to_value(&route).unwrap();
        assert_eq!(back["additionalTypes"], "pub struct Extra;");
        assert_eq!(back["requires_authorities"][0], "admin");
    }

    #[test]
    fn type_string_slots_cover_all_four_fields() {
        let json = r#"{"fileUrl": "a.ts", "method": "get"}"#;
        let mut route: RouteDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(route.type_strings_mut().len(), 4);
    }

    #[test]
    fn absent_path_reads_as_empty() {
        let json = r#"{"fileUrl": "a.ts", "method": "get"}"#;
        let route: RouteDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(route.scoped_path(), "");
    }
}
